//! Structural integrity checks for schema metadata.
//!
//! These run at registration/startup time. They catch generator and wiring
//! mistakes (empty keys, duplicate fields, empty enums) so the conversion
//! path can stay lenient at runtime.

use std::collections::HashSet;

use crate::descriptor::Descriptor;
use crate::error::SchemaError;
use crate::model::{EnumSchema, ModelSchema};

/// Validate a descriptor tree for structural integrity.
///
/// Reference targets are checked for non-empty names only; whether they
/// resolve is a registry-level question (see `SchemaRegistry::validate`).
pub fn validate_descriptor(descriptor: &Descriptor) -> Result<(), SchemaError> {
    match descriptor {
        Descriptor::Any
        | Descriptor::Str
        | Descriptor::Num
        | Descriptor::Bool
        | Descriptor::Date
        | Descriptor::Blob => Ok(()),
        Descriptor::Arr(inner) | Descriptor::Map(inner) => validate_descriptor(inner),
        Descriptor::Model(name) | Descriptor::Enum(name) => {
            if name.is_empty() {
                return Err(SchemaError::EmptyRef);
            }
            Ok(())
        }
    }
}

/// Validate a model schema: named, no empty or duplicate field keys, and
/// every field descriptor structurally sound.
pub fn validate_model(schema: &ModelSchema) -> Result<(), SchemaError> {
    if schema.name.is_empty() {
        return Err(SchemaError::EmptyName);
    }
    let mut seen = HashSet::new();
    for field in &schema.fields {
        if field.key.is_empty() {
            return Err(SchemaError::EmptyKey(schema.name.clone()));
        }
        if !seen.insert(field.key.as_str()) {
            return Err(SchemaError::DuplicateKey(
                schema.name.clone(),
                field.key.clone(),
            ));
        }
        validate_descriptor(&field.descriptor)?;
    }
    Ok(())
}

/// Validate an enum schema: named, non-empty, no duplicate literals.
pub fn validate_enum(schema: &EnumSchema) -> Result<(), SchemaError> {
    if schema.name.is_empty() {
        return Err(SchemaError::EmptyName);
    }
    if schema.values.is_empty() {
        return Err(SchemaError::EmptyEnum(schema.name.clone()));
    }
    let mut seen = HashSet::new();
    for value in &schema.values {
        if !seen.insert(value.as_str()) {
            return Err(SchemaError::DuplicateValue(
                schema.name.clone(),
                value.clone(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::D;

    // -- Descriptor validation --

    #[test]
    fn validate_primitives_ok() {
        for desc in [D.any(), D.str(), D.num(), D.bool(), D.date(), D.blob()] {
            assert!(validate_descriptor(&desc).is_ok());
        }
    }

    #[test]
    fn validate_recurses_into_containers() {
        assert!(validate_descriptor(&D.arr(D.map(D.model("User")))).is_ok());
        assert_eq!(
            validate_descriptor(&D.arr(D.model(""))),
            Err(SchemaError::EmptyRef)
        );
        assert_eq!(
            validate_descriptor(&D.map(D.enum_(""))),
            Err(SchemaError::EmptyRef)
        );
    }

    #[test]
    fn validate_empty_ref_err() {
        assert_eq!(validate_descriptor(&D.model("")), Err(SchemaError::EmptyRef));
        assert_eq!(validate_descriptor(&D.enum_("")), Err(SchemaError::EmptyRef));
    }

    // -- Model validation --

    #[test]
    fn validate_model_ok() {
        let schema = D.schema(
            "Token",
            vec![D.required("token", D.str()), D.field("scopes", D.arr(D.str()))],
        );
        assert!(validate_model(&schema).is_ok());
    }

    #[test]
    fn validate_model_empty_name_err() {
        let schema = D.schema("", vec![D.field("x", D.num())]);
        assert_eq!(validate_model(&schema), Err(SchemaError::EmptyName));
    }

    #[test]
    fn validate_model_empty_key_err() {
        let schema = D.schema("Token", vec![D.field("", D.str())]);
        assert_eq!(
            validate_model(&schema),
            Err(SchemaError::EmptyKey("Token".into()))
        );
    }

    #[test]
    fn validate_model_duplicate_key_err() {
        let schema = D.schema(
            "Token",
            vec![D.field("token", D.str()), D.field("token", D.num())],
        );
        assert_eq!(
            validate_model(&schema),
            Err(SchemaError::DuplicateKey("Token".into(), "token".into()))
        );
    }

    #[test]
    fn validate_model_propagates_descriptor_error() {
        let schema = D.schema("Token", vec![D.field("kind", D.enum_(""))]);
        assert_eq!(validate_model(&schema), Err(SchemaError::EmptyRef));
    }

    #[test]
    fn validate_model_with_no_fields_ok() {
        // Update-style payloads can declare every field elsewhere.
        assert!(validate_model(&D.schema("Empty", vec![])).is_ok());
    }

    // -- Enum validation --

    #[test]
    fn validate_enum_ok() {
        let e = D.enumeration("Status", ["pending", "running"]);
        assert!(validate_enum(&e).is_ok());
    }

    #[test]
    fn validate_enum_empty_name_err() {
        let e = D.enumeration("", ["a"]);
        assert_eq!(validate_enum(&e), Err(SchemaError::EmptyName));
    }

    #[test]
    fn validate_enum_empty_values_err() {
        let e = EnumSchema::new("Status", Vec::<String>::new());
        assert_eq!(validate_enum(&e), Err(SchemaError::EmptyEnum("Status".into())));
    }

    #[test]
    fn validate_enum_duplicate_value_err() {
        let e = D.enumeration("Status", ["running", "running"]);
        assert_eq!(
            validate_enum(&e),
            Err(SchemaError::DuplicateValue("Status".into(), "running".into()))
        );
    }
}
