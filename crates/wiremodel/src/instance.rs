//! Hydrated model instances.

use indexmap::IndexMap;
use serde_json::Value;

use crate::typed::Typed;

/// A hydrated record: a model name plus the declared fields the wire
/// actually supplied. Fields the payload never carried stay absent rather
/// than defaulting to null, so "absent" and "explicitly null" remain
/// distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    model: String,
    fields: IndexMap<String, Typed>,
}

impl ModelInstance {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn get(&self, key: &str) -> Option<&Typed> {
        self.fields.get(key)
    }

    /// Assign a field, inserting or overwriting. New keys append in call
    /// order, which the hydrator drives in declared-field order.
    pub fn set(&mut self, key: impl Into<String>, value: Typed) {
        self.fields.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Remove a field, keeping the order of the rest.
    pub fn unset(&mut self, key: &str) -> Option<Typed> {
        self.fields.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &IndexMap<String, Typed> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Dehydrate to a wire object carrying exactly the live fields.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}
