use crate::naming;
use crate::types::ObjectType;
use crate::types::ScalarKind;
use crate::types::TypeDescriptor;
use crate::types::TypeRegistry;
use indexmap::IndexMap;
use indexmap::IndexSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypeRegistryBuildError>;

const BUILTIN_SCALAR_KINDS: [ScalarKind; 5] = [
    ScalarKind::Boolean,
    ScalarKind::Float,
    ScalarKind::Id,
    ScalarKind::Int,
    ScalarKind::String,
];

/// Assembles a [`TypeRegistry`] and validates that every type reference in it
/// resolves.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistryBuilder {
    enums: IndexSet<String>,
    object_types: IndexMap<String, ObjectType>,
}
impl TypeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enum(mut self, enum_name: impl Into<String>) -> Result<Self> {
        let enum_name = enum_name.into();
        self.check_type_name_available(&enum_name)?;
        self.enums.insert(enum_name);
        Ok(self)
    }

    pub fn add_object_type(mut self, object_type: ObjectType) -> Result<Self> {
        self.check_type_name_available(object_type.name())?;
        self.object_types.insert(object_type.name().to_string(), object_type);
        Ok(self)
    }

    /// Consume this [`TypeRegistryBuilder`] to produce a [`TypeRegistry`].
    ///
    /// Every field's declared type must name a registered object or enum type;
    /// all dangling references are reported together.
    pub fn build(self) -> Result<TypeRegistry> {
        let mut errors = vec![];
        for object_type in self.object_types.values() {
            for field in object_type.fields() {
                let referenced_name = match field.type_descriptor()
                    .unwrap_collection()
                    .unwrap_optional() {
                    TypeDescriptor::Enum(name) if !self.enums.contains(name)
                        => name,
                    TypeDescriptor::Object(name) if !self.object_types.contains_key(name)
                        => name,
                    _ => continue,
                };

                errors.push(TypeRegistryBuildError::UndefinedTypeReference {
                    field_name: field.name().to_string(),
                    referenced_type: referenced_name.to_string(),
                    type_name: object_type.name().to_string(),
                });
            }
        }

        if !errors.is_empty() {
            return Err(TypeRegistryBuildError::TypeValidationErrors { errors });
        }

        Ok(TypeRegistry {
            enums: self.enums,
            object_types: self.object_types,
        })
    }

    fn check_type_name_available(&self, type_name: &str) -> Result<()> {
        if !naming::is_valid_graphql_name(type_name) {
            return Err(TypeRegistryBuildError::InvalidTypeName {
                type_name: type_name.to_string(),
            });
        }

        let is_builtin = BUILTIN_SCALAR_KINDS.iter()
            .any(|kind| kind.default_graphql_name() == type_name);
        if is_builtin
            || self.enums.contains(type_name)
            || self.object_types.contains_key(type_name) {
            return Err(TypeRegistryBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeRegistryBuildError {
    #[error("Field `{field_name}` is defined more than once on type `{type_name}`")]
    DuplicateFieldDefinition {
        field_name: String,
        type_name: String,
    },

    #[error("Type `{type_name}` is defined more than once (or shadows a built-in scalar)")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("`{field_name}` on type `{type_name}` is not a valid GraphQL field name")]
    InvalidFieldName {
        field_name: String,
        type_name: String,
    },

    #[error("`{type_name}` is not a valid GraphQL type name")]
    InvalidTypeName {
        type_name: String,
    },

    #[error("Invalid type definitions: {errors:?}")]
    TypeValidationErrors {
        errors: Vec<TypeRegistryBuildError>,
    },

    #[error(
        "Field `{type_name}.{field_name}` references undefined type \
        `{referenced_type}`"
    )]
    UndefinedTypeReference {
        field_name: String,
        referenced_type: String,
        type_name: String,
    },
}
