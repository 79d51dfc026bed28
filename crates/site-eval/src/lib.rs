//! Restaurant site evaluation: weighted composite scoring, break-even financials and the
//! supporting survey, competition and comparison helpers.
//!
//! The engines under [`scoring`] and [`financial`] are pure functions over plain values with
//! immutable reference tables, so they can be called from any number of requests at once.

pub mod comparison;
pub mod competition;
pub mod config;
pub mod error;
pub mod financial;
pub mod import;
pub mod router;
pub mod scoring;
pub mod survey;
pub mod telemetry;
pub mod validation;

pub use router::evaluation_router;
pub use validation::ValidationError;
