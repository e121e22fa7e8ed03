use crate::naming;
use crate::types::FieldDefinition;
use crate::types::ObjectType;
use crate::types::TypeDescriptor;
use crate::types::TypeRegistryBuildError;

type Result<T> = std::result::Result<T, TypeRegistryBuildError>;

/// Incrementally assembles an [`ObjectType`], rejecting malformed or
/// duplicate field names as they are added.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeBuilder {
    fields: Vec<FieldDefinition>,
    name: String,
}
impl ObjectTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: vec![],
            name: name.into(),
        }
    }

    /// Add a field after any previously added fields. Declaration order is
    /// preserved and determines the order of default field selections.
    pub fn add_field(
        mut self,
        field_name: impl Into<String>,
        type_descriptor: TypeDescriptor,
    ) -> Result<Self> {
        let field_name = field_name.into();
        if !naming::is_valid_graphql_name(&field_name) {
            return Err(TypeRegistryBuildError::InvalidFieldName {
                field_name,
                type_name: self.name,
            });
        }

        if self.fields.iter().any(|field| field.name() == field_name) {
            return Err(TypeRegistryBuildError::DuplicateFieldDefinition {
                field_name,
                type_name: self.name,
            });
        }

        self.fields.push(FieldDefinition::new(field_name, type_descriptor));
        Ok(self)
    }

    pub fn build(self) -> Result<ObjectType> {
        if !naming::is_valid_graphql_name(&self.name) {
            return Err(TypeRegistryBuildError::InvalidTypeName {
                type_name: self.name,
            });
        }

        Ok(ObjectType {
            fields: self.fields,
            name: self.name,
        })
    }
}
