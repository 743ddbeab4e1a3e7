//! Bike repair diagnostics: turn reported symptoms into prioritized, priced
//! issues and an aggregate service estimate.

pub mod api;
pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod errors;
pub mod models;
pub mod repl;
pub mod utils;
