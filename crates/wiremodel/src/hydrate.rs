//! The model hydrator.
//!
//! One generic field walk serves every model: for each declared field, in
//! declared order, presence is checked by key (`0`, `false`, and `""` count
//! as present), the converter runs on the raw field value, and the result
//! lands on the target instance. Unknown wire fields are ignored; absent
//! fields are never assigned, so "absent" survives hydration.

use serde_json::Value;

use wiremodel_schema::{ModelSchema, SchemaEntry, SchemaRegistry};

use crate::convert::Converter;
use crate::error::HydrateError;
use crate::instance::ModelInstance;
use crate::typed::Typed;

/// Hydrates wire payloads into [`ModelInstance`]s over a shared registry.
#[derive(Debug, Clone, Copy)]
pub struct Hydrator<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> Hydrator<'r> {
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// The converter this hydrator hands each present field to.
    pub fn converter(&self) -> Converter<'r> {
        Converter::new(self.registry)
    }

    /// Hydrate `raw` against an explicit schema, onto `target` if supplied.
    ///
    /// A non-object payload hydrates nothing: the target (or a fresh empty
    /// instance) comes back unchanged. Assignment is additive — keys the
    /// payload does not carry stay as the target had them.
    pub fn hydrate_schema(
        &self,
        schema: &ModelSchema,
        raw: &Value,
        target: Option<ModelInstance>,
    ) -> ModelInstance {
        let mut target = target.unwrap_or_else(|| ModelInstance::new(&schema.name));
        let Value::Object(data) = raw else {
            return target;
        };
        let converter = self.converter();
        for field in &schema.fields {
            if let Some(value) = data.get(&field.key) {
                target.set(field.key.clone(), converter.convert(value, &field.descriptor));
            }
        }
        target
    }

    /// Hydrate one payload into a fresh instance of the named model.
    pub fn hydrate(&self, model: &str, raw: &Value) -> Result<ModelInstance, HydrateError> {
        Ok(self.hydrate_schema(self.model_schema(model)?, raw, None))
    }

    /// Hydrate one payload onto a caller-supplied instance.
    pub fn hydrate_into(
        &self,
        model: &str,
        raw: &Value,
        target: ModelInstance,
    ) -> Result<ModelInstance, HydrateError> {
        Ok(self.hydrate_schema(self.model_schema(model)?, raw, Some(target)))
    }

    /// Hydrate a collection-valued payload, one instance per element. A
    /// non-array payload hydrates as a single instance.
    pub fn hydrate_many(
        &self,
        model: &str,
        raw: &Value,
    ) -> Result<Vec<ModelInstance>, HydrateError> {
        let schema = self.model_schema(model)?;
        match raw {
            Value::Array(items) => Ok(items
                .iter()
                .map(|item| self.hydrate_schema(schema, item, None))
                .collect()),
            other => Ok(vec![self.hydrate_schema(schema, other, None)]),
        }
    }

    /// Construct an instance from positional values for the model's
    /// required fields, in declared order. The value count must match the
    /// required-field count exactly; optional fields are never demanded.
    pub fn construct(
        &self,
        model: &str,
        values: Vec<Typed>,
    ) -> Result<ModelInstance, HydrateError> {
        let schema = self.model_schema(model)?;
        let required: Vec<&str> = schema.required_fields().map(|f| f.key.as_str()).collect();
        if required.len() != values.len() {
            return Err(HydrateError::RequiredArity {
                model: schema.name.clone(),
                expected: required.len(),
                got: values.len(),
            });
        }
        let mut instance = ModelInstance::new(&schema.name);
        for (key, value) in required.into_iter().zip(values) {
            instance.set(key, value);
        }
        Ok(instance)
    }

    /// The declared default for a field, converted through the field's
    /// descriptor. `None` when the model, the field, or the default is
    /// missing.
    pub fn default_value(&self, model: &str, key: &str) -> Option<Typed> {
        let schema = self.registry.model(model)?;
        let field = schema.field(key)?;
        let default = field.default.as_ref()?;
        Some(self.converter().convert(default, &field.descriptor))
    }

    fn model_schema(&self, name: &str) -> Result<&'r ModelSchema, HydrateError> {
        match self.registry.get(name) {
            Some(SchemaEntry::Model(schema)) => Ok(schema),
            Some(SchemaEntry::Enum(_)) => Err(HydrateError::NotAModel(name.to_string())),
            None => Err(HydrateError::UnknownModel(name.to_string())),
        }
    }
}
