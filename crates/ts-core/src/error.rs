use crate::numeric::Real;
use thiserror::Error;

pub type TsResult<T> = Result<T, TsError>;

/// Errors shared across the thermoscale crates.
///
/// All failures are synchronous and leave no partial state behind: a
/// constructor or operator either returns a value or one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// An absolute temperature would land below 0 K.
    #[error("Temperature {kelvin} K is below absolute zero (0 K)")]
    BelowAbsoluteZero { kelvin: Real },

    /// A scale name did not resolve in the registry.
    #[error("Unknown temperature scale: {name}")]
    UnknownScale { name: String },

    /// An arithmetic combination with no physical meaning.
    #[error("Invalid operation: {what}")]
    InvalidOperation { what: &'static str },

    /// NaN or infinite input where a finite value is required.
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: Real },

    /// Malformed argument (zero slope, empty scale name, ...).
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
