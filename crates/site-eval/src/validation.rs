//! Input validation shared by the scoring and financial engines.
//!
//! Every engine entry point checks its whole input before computing anything, so a caller
//! either gets a complete result or one of these errors naming the offending field.

use crate::scoring::Dimension;

/// Rejected input, split by the engine that owns the broken contract.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid dimension score: {0}")]
    InvalidDimensionScore(ScoreViolation),
    #[error("invalid financial input: {0}")]
    InvalidFinancialInput(FinancialViolation),
}

impl ValidationError {
    /// Stable identifier for API payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidDimensionScore(_) => "invalid_dimension_score",
            ValidationError::InvalidFinancialInput(_) => "invalid_financial_input",
        }
    }

    /// Wire name of the field that broke its invariant.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidDimensionScore(violation) => violation.field(),
            ValidationError::InvalidFinancialInput(violation) => violation.field(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreViolation {
    #[error("{dimension} must be within 1..=10, got {value}")]
    ScoreOutOfRange { dimension: Dimension, value: u8 },
    #[error("weights must sum to exactly 100, got {total}")]
    WeightSum { total: u64 },
}

impl ScoreViolation {
    pub fn field(&self) -> &'static str {
        match self {
            ScoreViolation::ScoreOutOfRange { dimension, .. } => dimension.field(),
            ScoreViolation::WeightSum { .. } => "weights",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinancialViolation {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("grossMarginRate must be within (0, 100], got {value}")]
    MarginOutOfRange { value: f64 },
    #[error("seats must be at least 1")]
    NoSeats,
    #[error("{brand} {slot} occupancy must be within 0..=100, got {value}")]
    OccupancyOutOfRange {
        brand: String,
        slot: &'static str,
        value: f64,
    },
}

impl FinancialViolation {
    pub fn field(&self) -> &'static str {
        match self {
            FinancialViolation::NotFinite { field }
            | FinancialViolation::NotPositive { field, .. }
            | FinancialViolation::Negative { field, .. } => field,
            FinancialViolation::MarginOutOfRange { .. } => "grossMarginRate",
            FinancialViolation::NoSeats => "seats",
            FinancialViolation::OccupancyOutOfRange { slot, .. } => slot,
        }
    }
}

impl From<ScoreViolation> for ValidationError {
    fn from(value: ScoreViolation) -> Self {
        Self::InvalidDimensionScore(value)
    }
}

impl From<FinancialViolation> for ValidationError {
    fn from(value: FinancialViolation) -> Self {
        Self::InvalidFinancialInput(value)
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, FinancialViolation> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinancialViolation::NotFinite { field })
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, FinancialViolation> {
    if ensure_finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(FinancialViolation::NotPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(
    field: &'static str,
    value: f64,
) -> Result<f64, FinancialViolation> {
    if ensure_finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(FinancialViolation::Negative { field, value })
    }
}

pub(crate) fn ensure_margin_rate(value: f64) -> Result<f64, FinancialViolation> {
    let value = ensure_finite("grossMarginRate", value)?;
    if value > 0.0 && value <= 100.0 {
        Ok(value)
    } else {
        Err(FinancialViolation::MarginOutOfRange { value })
    }
}

pub(crate) fn ensure_seats(seats: u32) -> Result<u32, FinancialViolation> {
    if seats >= 1 {
        Ok(seats)
    } else {
        Err(FinancialViolation::NoSeats)
    }
}

/// Rounds to two decimal places, ties away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
