//! Converted values.
//!
//! [`Typed`] is what conversion produces: wire JSON mirrored into the
//! descriptor vocabulary. Payloads a descriptor could not claim stay
//! [`Typed::Opaque`], holding the raw JSON untouched, so lenient passthrough
//! never loses data.

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::date::DateStamp;
use crate::instance::ModelInstance;

/// A converted value. Containers hold converted elements; `Opaque` holds
/// wire JSON that passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Typed {
    Null,
    Bool(bool),
    Num(Number),
    Str(String),
    Date(DateStamp),
    Arr(Vec<Typed>),
    Map(IndexMap<String, Typed>),
    Instance(ModelInstance),
    Opaque(Value),
}

impl Typed {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Num(_) => "num",
            Self::Str(_) => "str",
            Self::Date(_) => "date",
            Self::Arr(_) => "arr",
            Self::Map(_) => "map",
            Self::Instance(_) => "instance",
            Self::Opaque(_) => "opaque",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<&Number> {
        match self {
            Self::Num(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_num().and_then(Number::as_f64)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_num().and_then(Number::as_i64)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateStamp> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_arr(&self) -> Option<&[Typed]> {
        match self {
            Self::Arr(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Typed>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&ModelInstance> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Dehydrate back to wire JSON. Dates render in their wire form; opaque
    /// payloads come back verbatim.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Num(n) => Value::Number(n.clone()),
            Self::Str(s) => Value::String(s.clone()),
            Self::Date(d) => Value::String(d.to_wire()),
            Self::Arr(items) => Value::Array(items.iter().map(Typed::to_value).collect()),
            Self::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_value()))
                    .collect(),
            ),
            Self::Instance(instance) => instance.to_value(),
            Self::Opaque(value) => value.clone(),
        }
    }
}
