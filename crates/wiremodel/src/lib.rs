//! Type-directed JSON marshalling.
//!
//! Wire payloads arrive as already-parsed JSON; schemas describe the shapes
//! an API declares. This crate walks one against the other: the
//! [`Converter`] interprets any value against a descriptor, and the
//! [`Hydrator`] applies a model's declared field list to an object payload,
//! producing a [`ModelInstance`]. Both are lenient — mismatched shapes pass
//! through opaquely, bad dates become sentinels, and unknown wire fields are
//! ignored — because a generated client consuming a third-party-versioned
//! API favors availability over strictness.
//!
//! Dehydration ([`Typed::to_value`], [`ModelInstance::to_value`]) renders
//! converted values back to wire JSON.

pub mod convert;
pub mod date;
pub mod error;
pub mod hydrate;
pub mod instance;
pub mod typed;

pub use wiremodel_schema as schema;

pub use convert::Converter;
pub use date::DateStamp;
pub use error::HydrateError;
pub use hydrate::Hydrator;
pub use instance::ModelInstance;
pub use typed::Typed;
