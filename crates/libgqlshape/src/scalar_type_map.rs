use crate::types::ScalarKind;
use crate::Value;
use std::collections::HashMap;

/// Maps runtime argument [`Value`]s onto the names of the remote GraphQL
/// types they are declared as in a query's variable definitions.
///
/// Built-in scalars default to their standard GraphQL names and may be
/// overridden per [`ScalarKind`] (e.g. when the remote schema declares 64-bit
/// integers as `Long`). Enum values always map to their enum type's name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalarTypeMap {
    overrides: HashMap<ScalarKind, String>,
}
impl ScalarTypeMap {
    /// Declare the remote type name to use for `kind`.
    pub fn with_name(mut self, kind: ScalarKind, graphql_name: impl Into<String>) -> Self {
        self.overrides.insert(kind, graphql_name.into());
        self
    }

    pub fn name_of(&self, kind: ScalarKind) -> &str {
        self.overrides
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_graphql_name())
    }

    /// The remote type name for `value`, or `None` when no mapping exists.
    ///
    /// Lists map to `[Inner]` when every non-null element maps to the same
    /// inner type; empty, all-null, and mixed lists have no mapping. `null`
    /// has no mapping on its own.
    pub fn graphql_type_of(&self, value: &Value) -> Option<String> {
        match value {
            Value::Enum { enum_type, .. } => Some(enum_type.to_string()),
            Value::Null => None,
            Value::List(values) => {
                let mut element_types = values.iter()
                    .filter(|value| !value.is_null())
                    .map(|value| self.graphql_type_of(value));
                let first = element_types.next()??;
                for element_type in element_types {
                    if element_type.as_ref() != Some(&first) {
                        return None;
                    }
                }
                Some(format!("[{first}]"))
            },
            scalar => scalar.scalar_kind().map(|kind| self.name_of(kind).to_string()),
        }
    }
}
