//! The type converter.
//!
//! One recursive function interprets wire JSON against a [`Descriptor`].
//! Conversion is lenient: `null` passes through for every descriptor, scalar
//! coercion is type-directed (numeric strings parse, scalars render to
//! display strings), and a value whose shape a descriptor cannot claim comes
//! back as [`Typed::Opaque`] instead of faulting.

use indexmap::IndexMap;
use serde_json::{Number, Value};

use wiremodel_schema::{Descriptor, SchemaEntry, SchemaRegistry};

use crate::date::DateStamp;
use crate::hydrate::Hydrator;
use crate::typed::Typed;

/// Interprets wire values against descriptors, resolving model and enum
/// references through a shared registry.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Convert one wire value. Pure in `(raw, descriptor)` over the registry
    /// the converter was built with.
    pub fn convert(&self, raw: &Value, descriptor: &Descriptor) -> Typed {
        // Null is a legitimate wire value for every descriptor.
        if raw.is_null() {
            return Typed::Null;
        }
        match descriptor {
            Descriptor::Any | Descriptor::Blob => Typed::Opaque(raw.clone()),
            Descriptor::Str => coerce_str(raw),
            Descriptor::Num => coerce_num(raw),
            Descriptor::Bool => coerce_bool(raw),
            Descriptor::Date => coerce_date(raw),
            Descriptor::Arr(inner) => self.convert_arr(raw, inner),
            Descriptor::Map(inner) => self.convert_map(raw, inner),
            Descriptor::Model(name) => self.convert_reference(raw, name),
            // Enum conversion is identity on the literal; membership is the
            // consumer's check (`EnumSchema::contains`), not a conversion
            // gate.
            Descriptor::Enum(_) => enum_identity(raw),
        }
    }

    fn convert_arr(&self, raw: &Value, inner: &Descriptor) -> Typed {
        let Value::Array(items) = raw else {
            return Typed::Opaque(raw.clone());
        };
        Typed::Arr(items.iter().map(|item| self.convert(item, inner)).collect())
    }

    fn convert_map(&self, raw: &Value, inner: &Descriptor) -> Typed {
        let Value::Object(entries) = raw else {
            return Typed::Opaque(raw.clone());
        };
        Typed::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), self.convert(value, inner)))
                .collect::<IndexMap<String, Typed>>(),
        )
    }

    fn convert_reference(&self, raw: &Value, name: &str) -> Typed {
        match self.registry.get(name) {
            Some(SchemaEntry::Model(schema)) => match raw {
                Value::Object(_) => {
                    Typed::Instance(Hydrator::new(self.registry).hydrate_schema(schema, raw, None))
                }
                other => Typed::Opaque(other.clone()),
            },
            // Generated field metadata sometimes routes an enum through a
            // model reference; enums are values, not objects.
            Some(SchemaEntry::Enum(_)) => enum_identity(raw),
            // A dangling reference is a wiring bug `SchemaRegistry::validate`
            // reports at startup; at conversion time the payload survives.
            None => Typed::Opaque(raw.clone()),
        }
    }
}

fn coerce_str(raw: &Value) -> Typed {
    match raw {
        Value::String(s) => Typed::Str(s.clone()),
        Value::Number(n) => Typed::Str(n.to_string()),
        Value::Bool(b) => Typed::Str(b.to_string()),
        other => Typed::Opaque(other.clone()),
    }
}

fn coerce_num(raw: &Value) -> Typed {
    match raw {
        Value::Number(n) => Typed::Num(n.clone()),
        Value::String(s) => match parse_number(s) {
            Some(n) => Typed::Num(n),
            None => Typed::Opaque(raw.clone()),
        },
        other => Typed::Opaque(other.clone()),
    }
}

fn coerce_bool(raw: &Value) -> Typed {
    match raw {
        Value::Bool(b) => Typed::Bool(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Typed::Bool(true),
            "false" => Typed::Bool(false),
            _ => Typed::Opaque(raw.clone()),
        },
        other => Typed::Opaque(other.clone()),
    }
}

fn coerce_date(raw: &Value) -> Typed {
    match raw {
        Value::String(s) => Typed::Date(DateStamp::parse(s)),
        other => Typed::Opaque(other.clone()),
    }
}

fn enum_identity(raw: &Value) -> Typed {
    match raw {
        Value::String(s) => Typed::Str(s.clone()),
        other => Typed::Opaque(other.clone()),
    }
}

/// Parse a numeric string the way wire payloads spell numbers: integer
/// first, falling back to float. Non-finite floats are not JSON numbers.
fn parse_number(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Number::from(i));
    }
    if let Ok(u) = trimmed.parse::<u64>() {
        return Some(Number::from(u));
    }
    match trimmed.parse::<f64>() {
        Ok(f) => Number::from_f64(f),
        Err(_) => None,
    }
}
