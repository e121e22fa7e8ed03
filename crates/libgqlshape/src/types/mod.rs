mod field_definition;
mod object_type;
mod object_type_builder;
mod scalar_kind;
mod type_descriptor;
mod type_registry;
mod type_registry_builder;

pub use field_definition::FieldDefinition;
pub use object_type::ObjectType;
pub use object_type_builder::ObjectTypeBuilder;
pub use scalar_kind::ScalarKind;
pub use type_descriptor::TypeDescriptor;
pub use type_registry::TypeRegistry;
pub use type_registry_builder::TypeRegistryBuilder;
pub use type_registry_builder::TypeRegistryBuildError;

#[cfg(test)]
mod tests;
