//! Schema vocabulary for wiremodel.
//!
//! This crate defines the descriptor language that drives conversion — the
//! [`Descriptor`] tree, model and enum metadata, the [`SchemaBuilder`]
//! shorthands, structural validation, a descriptor [`Walker`], and the
//! [`SchemaRegistry`] that resolves names at startup. It knows nothing about
//! wire values; the `wiremodel` crate interprets these schemas against JSON.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod registry;
pub mod validate;
pub mod walker;

pub use builder::{SchemaBuilder, D};
pub use descriptor::Descriptor;
pub use error::SchemaError;
pub use model::{EnumSchema, FieldSchema, ModelSchema};
pub use registry::{SchemaEntry, SchemaRegistry};
pub use validate::{validate_descriptor, validate_enum, validate_model};
pub use walker::Walker;
