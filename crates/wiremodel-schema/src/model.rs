//! Model and enum schema metadata.
//!
//! A model's schema is static, declaration-ordered metadata: each field names
//! its wire key, its descriptor, whether it participates in positional
//! construction, and an optional declared default. Enum schemas are closed
//! string sets with one membership check.

use serde_json::Value;

use crate::descriptor::Descriptor;

/// A single declared field of a model schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Wire key of the field.
    pub key: String,
    pub descriptor: Descriptor,
    /// Field is part of the positional construction signature.
    pub required: bool,
    /// Declared default, readable when the wire omits the field. Hydration
    /// never writes it onto an instance.
    pub default: Option<Value>,
}

impl FieldSchema {
    pub fn new(key: impl Into<String>, descriptor: Descriptor) -> Self {
        Self {
            key: key.into(),
            descriptor,
            required: false,
            default: None,
        }
    }
}

/// A named composite with an ordered, fixed set of declared fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelSchema {
    pub name: String,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldSchema>,
}

impl ModelSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Look up a declared field by wire key.
    pub fn field(&self, key: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// The fields marked required, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|f| f.required)
    }

    /// A field's declared default value, if any.
    pub fn default_of(&self, key: &str) -> Option<&Value> {
        self.field(key).and_then(|f| f.default.as_ref())
    }
}

/// A closed set of permitted literal string values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumSchema {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumSchema {
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The membership check for wire literals. Conversion never calls this;
    /// it exists for consumers that want strict enums.
    pub fn contains(&self, literal: &str) -> bool {
        self.values.iter().any(|v| v == literal)
    }
}
