//! Schema builder.
//!
//! A fluent shorthand for writing descriptor trees and schema metadata by
//! hand or from a generator. The global [`D`] builder keeps call sites terse:
//! `D.arr(D.str())`, `D.field("scopes", D.arr(D.str()))`.

use serde_json::Value;

use crate::descriptor::Descriptor;
use crate::model::{EnumSchema, FieldSchema, ModelSchema};

/// Builder for descriptors and schema metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder;

impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Descriptor shorthands

    pub fn any(&self) -> Descriptor {
        Descriptor::Any
    }

    pub fn str(&self) -> Descriptor {
        Descriptor::Str
    }

    pub fn num(&self) -> Descriptor {
        Descriptor::Num
    }

    pub fn bool(&self) -> Descriptor {
        Descriptor::Bool
    }

    pub fn date(&self) -> Descriptor {
        Descriptor::Date
    }

    pub fn blob(&self) -> Descriptor {
        Descriptor::Blob
    }

    pub fn arr(&self, inner: Descriptor) -> Descriptor {
        Descriptor::Arr(Box::new(inner))
    }

    pub fn map(&self, inner: Descriptor) -> Descriptor {
        Descriptor::Map(Box::new(inner))
    }

    pub fn model(&self, name: impl Into<String>) -> Descriptor {
        Descriptor::Model(name.into())
    }

    pub fn enum_(&self, name: impl Into<String>) -> Descriptor {
        Descriptor::Enum(name.into())
    }

    // ------------------------------------------------------------------
    // Field constructors

    /// An optional field with no declared default.
    pub fn field(&self, key: impl Into<String>, descriptor: Descriptor) -> FieldSchema {
        FieldSchema::new(key, descriptor)
    }

    /// A field that participates in positional construction.
    pub fn required(&self, key: impl Into<String>, descriptor: Descriptor) -> FieldSchema {
        FieldSchema {
            required: true,
            ..FieldSchema::new(key, descriptor)
        }
    }

    /// An optional field with a declared default.
    pub fn defaulted(
        &self,
        key: impl Into<String>,
        descriptor: Descriptor,
        default: Value,
    ) -> FieldSchema {
        FieldSchema {
            default: Some(default),
            ..FieldSchema::new(key, descriptor)
        }
    }

    // ------------------------------------------------------------------
    // Schema constructors

    pub fn schema(&self, name: impl Into<String>, fields: Vec<FieldSchema>) -> ModelSchema {
        ModelSchema::new(name, fields)
    }

    pub fn enumeration(
        &self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> EnumSchema {
        EnumSchema::new(name, values)
    }
}

/// Global default schema builder.
pub static D: SchemaBuilder = SchemaBuilder;
