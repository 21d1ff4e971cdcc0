//! Descriptor tree walker.

use crate::descriptor::Descriptor;
use crate::model::ModelSchema;

/// Walks every node in a descriptor tree, calling the visitor for each node.
pub struct Walker;

impl Walker {
    /// Walk the tree rooted at `descriptor`, calling `on_descriptor` for
    /// every node, parents before children.
    pub fn walk(descriptor: &Descriptor, on_descriptor: &mut dyn FnMut(&Descriptor)) {
        on_descriptor(descriptor);
        match descriptor {
            Descriptor::Arr(inner) | Descriptor::Map(inner) => {
                Self::walk(inner, on_descriptor);
            }
            Descriptor::Any
            | Descriptor::Str
            | Descriptor::Num
            | Descriptor::Bool
            | Descriptor::Date
            | Descriptor::Blob
            | Descriptor::Model(_)
            | Descriptor::Enum(_) => {}
        }
    }

    /// Walk every field descriptor of a model schema, in declaration order.
    pub fn walk_model(schema: &ModelSchema, on_descriptor: &mut dyn FnMut(&Descriptor)) {
        for field in &schema.fields {
            Self::walk(&field.descriptor, on_descriptor);
        }
    }
}
