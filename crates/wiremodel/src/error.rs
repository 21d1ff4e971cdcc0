//! Faults for the named hydration entry points.

use thiserror::Error;

/// Programmer-usage faults: asking for a model the registry does not carry,
/// or constructing with the wrong number of required values. Payload quality
/// never raises these — bad data passes through opaquely instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HydrateError {
    #[error("UNKNOWN_MODEL: {0}")]
    UnknownModel(String),

    #[error("NOT_A_MODEL: {0}")]
    NotAModel(String),

    #[error("REQUIRED_ARITY: {model} takes {expected}, got {got}")]
    RequiredArity {
        model: String,
        expected: usize,
        got: usize,
    },
}
