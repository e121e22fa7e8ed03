use crate::operation::QueryCompileError;
use crate::ScalarTypeMap;
use crate::Value;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, QueryCompileError>;

/// A variable declared in a compiled query's header (`$name: Type`) along
/// with the value bound to it.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    graphql_type: String,
    name: String,
    value: Value,
}
impl VariableDefinition {
    pub fn graphql_type(&self) -> &str {
        self.graphql_type.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
impl std::fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}: {}", self.name, self.graphql_type)
    }
}

/// The ordered set of variables collected during one compilation.
#[derive(Clone, Debug, Default)]
pub(crate) struct VariableDefinitions {
    definitions: IndexMap<String, VariableDefinition>,
}
impl VariableDefinitions {
    /// Declare `name` bound to the (non-null) `value`, typed via
    /// `scalar_types`. `argument_name` is reported if the value has no
    /// remote type.
    pub fn declare(
        &mut self,
        argument_name: &str,
        name: String,
        value: &Value,
        scalar_types: &ScalarTypeMap,
    ) -> Result<()> {
        if self.definitions.contains_key(&name) {
            return Err(QueryCompileError::DuplicateVariableName {
                variable_name: name,
            });
        }

        let graphql_type = scalar_types.graphql_type_of(value).ok_or_else(
            || QueryCompileError::UnmappedArgumentType {
                argument_name: argument_name.to_string(),
                value_kind: value.kind(),
            },
        )?;

        log::trace!("Declared variable `${name}: {graphql_type}`.");
        self.definitions.insert(name.clone(), VariableDefinition {
            graphql_type,
            name,
            value: value.clone(),
        });
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Drop every definition declared after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        for (name, _) in self.definitions.drain(len..) {
            log::trace!("Dropped unused variable `${name}`.");
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariableDefinition> {
        self.definitions.values()
    }

    pub fn into_values(self) -> IndexMap<String, Value> {
        self.definitions
            .into_iter()
            .map(|(name, definition)| (name, definition.value))
            .collect()
    }
}
