use anyhow::Context;
use libgqlshape::types::ObjectTypeBuilder;
use libgqlshape::types::TypeDescriptor;
use libgqlshape::types::TypeRegistry;
use libgqlshape::types::TypeRegistryBuilder;
use std::path::Path;

/// On-disk description of the local object model.
///
/// ```json
/// {
///   "enums": ["Mode"],
///   "objects": [
///     {"name": "Trip", "fields": [{"name": "GtfsId", "type": {"Scalar": "String"}}]}
///   ]
/// }
/// ```
#[derive(Debug, serde::Deserialize)]
pub(crate) struct TypesFile {
    #[serde(default)]
    enums: Vec<String>,
    objects: Vec<ObjectTypeEntry>,
}
impl TypesFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failure reading types file {path:#?}"))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failure parsing types file {path:#?}"))
    }

    pub fn into_registry(self) -> anyhow::Result<TypeRegistry> {
        let mut builder = TypeRegistryBuilder::new();
        for enum_name in self.enums {
            builder = builder.add_enum(enum_name)?;
        }
        for object in self.objects {
            let mut object_builder = ObjectTypeBuilder::new(object.name);
            for field in object.fields {
                object_builder = object_builder.add_field(field.name, field.type_descriptor)?;
            }
            builder = builder.add_object_type(object_builder.build()?)?;
        }
        Ok(builder.build()?)
    }
}

#[derive(Debug, serde::Deserialize)]
struct ObjectTypeEntry {
    fields: Vec<FieldEntry>,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct FieldEntry {
    name: String,
    #[serde(rename = "type")]
    type_descriptor: TypeDescriptor,
}
