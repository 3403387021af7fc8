//! zeck library: application logic for the Zeckendorf calculator.

pub mod app;
pub mod config;
pub mod errors;
