//! Schema registry — the process-wide table of named schemas.
//!
//! The registry is built once at startup (registration faults on structural
//! problems) and is immutable afterwards; hydrations share it read-only, so
//! no locking is needed.

use indexmap::IndexMap;

use crate::descriptor::Descriptor;
use crate::error::SchemaError;
use crate::model::{EnumSchema, ModelSchema};
use crate::validate::{validate_enum, validate_model};
use crate::walker::Walker;

/// A registered schema: a composite model or a closed enum.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaEntry {
    Model(ModelSchema),
    Enum(EnumSchema),
}

impl SchemaEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Model(m) => &m.name,
            Self::Enum(e) => &e.name,
        }
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }
}

/// Name → schema table for one API description.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: IndexMap<String, SchemaEntry>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model schema. The schema is validated structurally and the
    /// name must be unused.
    pub fn register_model(&mut self, schema: ModelSchema) -> Result<(), SchemaError> {
        validate_model(&schema)?;
        self.insert(SchemaEntry::Model(schema))
    }

    /// Register an enum schema. The schema is validated structurally and the
    /// name must be unused.
    pub fn register_enum(&mut self, schema: EnumSchema) -> Result<(), SchemaError> {
        validate_enum(&schema)?;
        self.insert(SchemaEntry::Enum(schema))
    }

    fn insert(&mut self, entry: SchemaEntry) -> Result<(), SchemaError> {
        let name = entry.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(SchemaError::DuplicateSchema(name));
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.get(name)
    }

    /// Look up a model schema by name; `None` if absent or an enum.
    pub fn model(&self, name: &str) -> Option<&ModelSchema> {
        match self.entries.get(name) {
            Some(SchemaEntry::Model(m)) => Some(m),
            _ => None,
        }
    }

    /// Look up an enum schema by name; `None` if absent or a model.
    pub fn enum_schema(&self, name: &str) -> Option<&EnumSchema> {
        match self.entries.get(name) {
            Some(SchemaEntry::Enum(e)) => Some(e),
            _ => None,
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.values()
    }

    /// Resolve every schema reference in every registered model.
    ///
    /// A `Model` reference may target either entry kind (the conversion path
    /// treats a model reference to an enum as enum identity); an `Enum`
    /// reference must target an enum. Dangling references are the classic
    /// generator wiring mistake this call exists to catch at startup.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for entry in self.entries.values() {
            let SchemaEntry::Model(schema) = entry else {
                continue;
            };
            let mut result = Ok(());
            Walker::walk_model(schema, &mut |descriptor| {
                if result.is_err() {
                    return;
                }
                result = self.check_reference(descriptor);
            });
            result?;
        }
        Ok(())
    }

    fn check_reference(&self, descriptor: &Descriptor) -> Result<(), SchemaError> {
        match descriptor {
            Descriptor::Model(name) => {
                if !self.has(name) {
                    return Err(SchemaError::UnknownSchema(name.clone()));
                }
                Ok(())
            }
            Descriptor::Enum(name) => match self.get(name) {
                Some(entry) if entry.is_enum() => Ok(()),
                Some(_) => Err(SchemaError::NotAnEnum(name.clone())),
                None => Err(SchemaError::UnknownSchema(name.clone())),
            },
            _ => Ok(()),
        }
    }
}
