use crate::config::BookingDefaults;
use crate::domain::models::cart::{CartItem, ReservationPricing};

/// Line total for one item: zone hourly rate times duration, with the
/// uniform fallback duration applied when the item carries none.
pub fn line_total(item: &CartItem, defaults: &BookingDefaults) -> i64 {
    let hours = i64::from(item.duration_hours.unwrap_or(defaults.duration_hours));
    item.price_per_hour * hours
}

pub fn total_price(items: &[CartItem], defaults: &BookingDefaults) -> i64 {
    items.iter().map(|item| line_total(item, defaults)).sum()
}

/// Full breakdown: base hours, extra services, discount on the base amount,
/// VAT on the net.
pub fn price_items(items: &[CartItem], defaults: &BookingDefaults) -> ReservationPricing {
    let base_price = total_price(items, defaults);
    let services_price: i64 = items.iter().map(|item| item.services_price).sum();
    let discounts = ((base_price as f64) * defaults.discount_rate).round() as i64;
    let net = base_price + services_price - discounts;
    let vat = ((net as f64) * defaults.vat_rate).round() as i64;

    ReservationPricing {
        base_price,
        services_price,
        discounts,
        vat,
        total: net + vat,
    }
}
