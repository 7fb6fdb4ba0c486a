pub mod admin;
pub mod availability;
pub mod cart;
pub mod health;
pub mod pattern;
