use crate::domain::models::resolution::{ConflictResolutionInput, ResolutionProposal};
use crate::domain::ports::SuggestionStrategy;

/// Default wizard strategy. It computes no alternatives of its own; it
/// forwards whatever the caller already gathered, minus the zone and slot
/// that just conflicted.
pub struct PassThroughSuggestions;

impl SuggestionStrategy for PassThroughSuggestions {
    fn suggest(&self, input: &ConflictResolutionInput) -> ResolutionProposal {
        ResolutionProposal {
            alternative_time_slots: input
                .alternative_time_slots
                .iter()
                .filter(|slot| **slot != input.original_time_slot)
                .copied()
                .collect(),
            suggested_zones: input
                .suggested_zones
                .iter()
                .filter(|zone| **zone != input.original_zone)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_filters_the_original_choice() {
        let input = ConflictResolutionInput {
            conflicted_dates: Vec::new(),
            available_dates: Vec::new(),
            alternative_time_slots: vec!["10:00-12:00".parse().unwrap(), "14:00-16:00".parse().unwrap()],
            suggested_zones: vec!["z1".to_string(), "z2".to_string()],
            original_zone: "z1".to_string(),
            original_time_slot: "10:00-12:00".parse().unwrap(),
        };

        let proposal = PassThroughSuggestions.suggest(&input);
        assert_eq!(proposal.alternative_time_slots, vec!["14:00-16:00".parse().unwrap()]);
        assert_eq!(proposal.suggested_zones, vec!["z2".to_string()]);
    }

    #[test]
    fn test_empty_input_yields_empty_proposal() {
        let input = ConflictResolutionInput {
            conflicted_dates: Vec::new(),
            available_dates: Vec::new(),
            alternative_time_slots: Vec::new(),
            suggested_zones: Vec::new(),
            original_zone: "z1".to_string(),
            original_time_slot: "10:00-12:00".parse().unwrap(),
        };

        let proposal = PassThroughSuggestions.suggest(&input);
        assert!(proposal.alternative_time_slots.is_empty());
        assert!(proposal.suggested_zones.is_empty());
    }
}
