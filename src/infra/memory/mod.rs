pub mod booking_store;
pub mod calendar;
pub mod pricing;
