pub mod booking;
pub mod cart;
pub mod conflict;
pub mod pattern;
pub mod resolution;
pub mod slot;
