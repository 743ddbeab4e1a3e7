pub mod bookings;
pub mod catalog;
pub mod diagnose;
pub mod health;
pub mod mechanics;
pub mod quote;
