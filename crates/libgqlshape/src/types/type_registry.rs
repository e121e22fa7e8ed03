use crate::types::ObjectType;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// The read-only metadata table describing every object and enum type of the
/// local object model.
///
/// A [`TypeRegistry`] is built once (see
/// [`TypeRegistryBuilder`](crate::types::TypeRegistryBuilder)) and then only
/// ever read, so a single registry may back any number of concurrent
/// compilations.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRegistry {
    pub(super) enums: IndexSet<String>,
    pub(super) object_types: IndexMap<String, ObjectType>,
}
impl TypeRegistry {
    /// Names of all enum types, in the order they were registered.
    pub fn enums(&self) -> &IndexSet<String> {
        &self.enums
    }

    pub fn has_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.object_types.get(name)
    }

    /// All object types, in the order they were registered.
    pub fn object_types(&self) -> &IndexMap<String, ObjectType> {
        &self.object_types
    }
}
