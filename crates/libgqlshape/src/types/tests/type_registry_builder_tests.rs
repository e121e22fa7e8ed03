use crate::types::ObjectTypeBuilder;
use crate::types::ScalarKind;
use crate::types::TypeDescriptor;
use crate::types::TypeRegistryBuildError;
use crate::types::TypeRegistryBuilder;

type Result<T> = std::result::Result<T, TypeRegistryBuildError>;

#[test]
fn registry_resolves_cross_references() -> Result<()> {
    let registry = TypeRegistryBuilder::new()
        .add_enum("Mode")?
        .add_object_type(
            ObjectTypeBuilder::new("Route")
                .add_field("Mode", TypeDescriptor::enum_("Mode"))?
                .add_field("Stops", TypeDescriptor::list(TypeDescriptor::object("Stop")))?
                .build()?,
        )?
        .add_object_type(
            ObjectTypeBuilder::new("Stop")
                .add_field("Routes", TypeDescriptor::list(TypeDescriptor::object("Route")))?
                .build()?,
        )?
        .build()?;

    assert!(registry.has_enum("Mode"));
    assert!(!registry.has_enum("Route"));
    assert_eq!(
        registry.object_types().keys().collect::<Vec<_>>(),
        vec!["Route", "Stop"],
    );
    assert_eq!(registry.object_type("Route").unwrap().leaf_fields(), vec!["mode"]);
    assert!(registry.object_type("Trip").is_none());
    Ok(())
}

#[test]
fn dangling_references_are_all_reported() -> Result<()> {
    let result = TypeRegistryBuilder::new()
        .add_object_type(
            ObjectTypeBuilder::new("Route")
                .add_field("Mode", TypeDescriptor::enum_("Mode"))?
                .add_field(
                    "Agency",
                    TypeDescriptor::optional(TypeDescriptor::object("Agency")),
                )?
                .add_field("Name", TypeDescriptor::scalar(ScalarKind::String))?
                .build()?,
        )?
        .build();

    assert_eq!(result, Err(TypeRegistryBuildError::TypeValidationErrors {
        errors: vec![
            TypeRegistryBuildError::UndefinedTypeReference {
                field_name: "Mode".to_string(),
                referenced_type: "Mode".to_string(),
                type_name: "Route".to_string(),
            },
            TypeRegistryBuildError::UndefinedTypeReference {
                field_name: "Agency".to_string(),
                referenced_type: "Agency".to_string(),
                type_name: "Route".to_string(),
            },
        ],
    }));
    Ok(())
}

#[test]
fn type_names_must_be_unique() -> Result<()> {
    let builder = TypeRegistryBuilder::new().add_enum("Mode")?;
    let result = builder.add_object_type(ObjectTypeBuilder::new("Mode").build()?);

    assert!(matches!(
        result,
        Err(TypeRegistryBuildError::DuplicateTypeDefinition { type_name })
            if type_name == "Mode",
    ));
    Ok(())
}

#[test]
fn builtin_scalar_names_cannot_be_shadowed() {
    for name in ["String", "Int", "Float", "Boolean", "ID"] {
        assert_eq!(
            TypeRegistryBuilder::new().add_enum(name).map(|_| ()),
            Err(TypeRegistryBuildError::DuplicateTypeDefinition {
                type_name: name.to_string(),
            }),
        );
    }
}

#[test]
fn invalid_enum_name_is_rejected() {
    assert!(matches!(
        TypeRegistryBuilder::new().add_enum("Transit Mode"),
        Err(TypeRegistryBuildError::InvalidTypeName { .. }),
    ));
}
