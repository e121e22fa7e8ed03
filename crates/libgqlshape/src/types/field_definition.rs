use crate::naming;
use crate::types::TypeDescriptor;

/// A single declared field on an [`ObjectType`](crate::types::ObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub(super) name: String,
    pub(super) type_descriptor: TypeDescriptor,
}
impl FieldDefinition {
    pub fn new(name: impl Into<String>, type_descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
        }
    }

    /// Indicates whether `segment` refers to this field, either by its local
    /// identifier or by its remote (camelCase) name.
    pub fn matches_name(&self, segment: &str) -> bool {
        self.name == segment || self.remote_name() == segment
    }

    /// The local identifier of this field.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of this field under the remote naming convention.
    pub fn remote_name(&self) -> String {
        naming::to_remote_name(&self.name)
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }
}
