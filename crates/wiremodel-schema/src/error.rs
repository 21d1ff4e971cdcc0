//! Schema integrity error type.

use thiserror::Error;

/// Structural faults in schema metadata or registry usage.
///
/// These surface at registration/validation time, before any payload is
/// converted; conversion itself is lenient and never produces them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("NAME_EMPTY")]
    EmptyName,
    #[error("KEY_EMPTY: {0}")]
    EmptyKey(String),
    #[error("DUP_KEY: {0}.{1}")]
    DuplicateKey(String, String),
    #[error("REF_EMPTY")]
    EmptyRef,
    #[error("ENUM_EMPTY: {0}")]
    EmptyEnum(String),
    #[error("DUP_VALUE: {0}.{1}")]
    DuplicateValue(String, String),
    #[error("DUP_SCHEMA: {0}")]
    DuplicateSchema(String),
    #[error("UNKNOWN_SCHEMA: {0}")]
    UnknownSchema(String),
    #[error("NOT_AN_ENUM: {0}")]
    NotAnEnum(String),
}
