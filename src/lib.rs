//! `YatraFare` - Round-trip fare estimation for Indian intercity travel
//!
//! This library provides static distance and pricing tables, a pure fare
//! calculator, and the ranking/presentation layer behind the estimator's
//! web form.

pub mod api;
pub mod config;
pub mod error;
pub mod presenter;
pub mod pricing;
pub mod routes;
pub mod trip;
pub mod web;

// Re-export core types for public API
pub use config::FareConfig;
pub use error::FareError;
pub use presenter::{BestOption, EstimateView, FareCard};
pub use pricing::{FareQuote, ModePricing, TravelMode};
pub use trip::{QueryContext, TripQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, FareError>;
