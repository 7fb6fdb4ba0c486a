pub mod cart;
pub mod conflict;
pub mod pricing;
pub mod recurrence;
pub mod resolution;
