/// The built-in scalar types a [`TypeDescriptor`](crate::types::TypeDescriptor)
/// or argument [`Value`](crate::Value) may carry.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum ScalarKind {
    Boolean,
    Float,
    Id,
    Int,
    String,
}
impl ScalarKind {
    /// The name GraphQL uses for this scalar when no override is configured.
    pub fn default_graphql_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Id => "ID",
            Self::Int => "Int",
            Self::String => "String",
        }
    }
}
impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_graphql_name())
    }
}
