use crate::types::FieldDefinition;

/// A named, composite type on the local object model along with its fields in
/// declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(super) fields: Vec<FieldDefinition>,
    pub(super) name: String,
}
impl ObjectType {
    /// Look up a field by its local identifier or its remote name.
    ///
    /// An exact match on the local identifier wins over a remote-name match
    /// so that fields differing only in the case of their first character
    /// stay addressable.
    pub fn field(&self, segment: &str) -> Option<&FieldDefinition> {
        self.fields.iter()
            .find(|field| field.name() == segment)
            .or_else(|| self.fields.iter().find(|field| field.matches_name(segment)))
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Remote names of every directly selectable (leaf) field on this type, in
    /// declaration order. Collections of leaves count as leaves.
    pub fn leaf_fields(&self) -> Vec<String> {
        self.fields.iter()
            .filter(|field| field.type_descriptor().unwrap_collection().is_leaf())
            .map(FieldDefinition::remote_name)
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
