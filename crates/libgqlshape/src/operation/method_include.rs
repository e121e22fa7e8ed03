use crate::types::TypeDescriptor;
use crate::Value;
use indexmap::IndexMap;

/// Describes a parameterized relation: a navigable field whose remote
/// resolution takes arguments.
///
/// When an include path reaches a field whose name and declared type match
/// the [`MethodInclude`] currently at the compilation's
/// [`MethodIncludeCursor`](crate::operation::MethodIncludeCursor), the field
/// is rendered with this descriptor's parameters bound as query variables.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MethodInclude {
    name: String,
    #[serde(default)]
    parameters: IndexMap<String, Value>,
    return_type: TypeDescriptor,
}
impl MethodInclude {
    pub fn new(name: impl Into<String>, return_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            parameters: IndexMap::new(),
            return_type,
        }
    }

    /// Add a parameter after any previously added parameters. `null`
    /// parameters are kept here but never rendered.
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Value> {
        &self.parameters
    }

    pub fn return_type(&self) -> &TypeDescriptor {
        &self.return_type
    }
}
