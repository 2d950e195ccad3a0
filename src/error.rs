use std::time::Duration;

use thiserror::Error;

/// Pricing request failures with structured variants.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("pricing service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("pricing request timed out after {limit:?}")]
    TimedOut { limit: Duration },

    #[error("pricing response missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Numeric formatting failures.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("cannot parse formatted amount '{raw}'")]
    InvalidAmount { raw: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, Error>;
