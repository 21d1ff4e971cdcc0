//! Type descriptors — the shape vocabulary of wire values.

use std::fmt;

/// Describes the shape expected for a single wire value.
///
/// The vocabulary is the finite set a REST API description needs: JSON
/// primitives, ISO-8601 dates, opaque payloads, homogeneous sequences,
/// string-keyed maps, and named references to registered model or enum
/// schemas. Nested shapes compose by boxing the inner descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// Untyped payload; conversion passes the value through unchanged.
    Any,
    /// JSON string.
    Str,
    /// JSON number.
    Num,
    /// JSON boolean.
    Bool,
    /// ISO-8601 timestamp carried as a string on the wire.
    Date,
    /// Opaque binary-ish payload; conversion passes it through unchanged.
    Blob,
    /// Ordered sequence whose elements all match the inner descriptor.
    Arr(Box<Descriptor>),
    /// String-keyed mapping whose values all match the inner descriptor.
    Map(Box<Descriptor>),
    /// Reference, by registered name, to a composite model schema.
    Model(String),
    /// Reference, by registered name, to a closed set of string literals.
    Enum(String),
}

impl Descriptor {
    /// Returns the "kind" string identifier for this descriptor.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Str => "str",
            Self::Num => "num",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Blob => "blob",
            Self::Arr(_) => "arr",
            Self::Map(_) => "map",
            Self::Model(_) => "model",
            Self::Enum(_) => "enum",
        }
    }

    /// The referenced schema name, for `Model`/`Enum` descriptors.
    pub fn ref_name(&self) -> Option<&str> {
        match self {
            Self::Model(name) | Self::Enum(name) => Some(name),
            _ => None,
        }
    }

    /// The element/value descriptor, for `Arr`/`Map` descriptors.
    pub fn inner(&self) -> Option<&Descriptor> {
        match self {
            Self::Arr(inner) | Self::Map(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_returns_correct_strings() {
        assert_eq!(Descriptor::Any.kind(), "any");
        assert_eq!(Descriptor::Str.kind(), "str");
        assert_eq!(Descriptor::Num.kind(), "num");
        assert_eq!(Descriptor::Bool.kind(), "bool");
        assert_eq!(Descriptor::Date.kind(), "date");
        assert_eq!(Descriptor::Blob.kind(), "blob");
        assert_eq!(Descriptor::Arr(Box::new(Descriptor::Str)).kind(), "arr");
        assert_eq!(Descriptor::Map(Box::new(Descriptor::Num)).kind(), "map");
        assert_eq!(Descriptor::Model("User".into()).kind(), "model");
        assert_eq!(Descriptor::Enum("Status".into()).kind(), "enum");
    }

    #[test]
    fn ref_name_only_for_references() {
        assert_eq!(Descriptor::Model("User".into()).ref_name(), Some("User"));
        assert_eq!(Descriptor::Enum("Status".into()).ref_name(), Some("Status"));
        assert_eq!(Descriptor::Str.ref_name(), None);
        assert_eq!(Descriptor::Arr(Box::new(Descriptor::Str)).ref_name(), None);
    }

    #[test]
    fn inner_only_for_containers() {
        let arr = Descriptor::Arr(Box::new(Descriptor::Num));
        assert_eq!(arr.inner(), Some(&Descriptor::Num));
        let map = Descriptor::Map(Box::new(Descriptor::Bool));
        assert_eq!(map.inner(), Some(&Descriptor::Bool));
        assert_eq!(Descriptor::Date.inner(), None);
        assert_eq!(Descriptor::Model("User".into()).inner(), None);
    }

    #[test]
    fn nested_containers_compose() {
        let d = Descriptor::Map(Box::new(Descriptor::Arr(Box::new(Descriptor::Str))));
        assert_eq!(d.kind(), "map");
        assert_eq!(d.inner().map(Descriptor::kind), Some("arr"));
        assert_eq!(
            d.inner().and_then(Descriptor::inner).map(Descriptor::kind),
            Some("str")
        );
    }

    #[test]
    fn display_matches_kind() {
        assert_eq!(format!("{}", Descriptor::Date), "date");
        assert_eq!(format!("{}", Descriptor::Model("User".into())), "model");
    }
}
