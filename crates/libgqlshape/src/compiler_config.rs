use crate::ScalarTypeMap;

/// How a field is rendered when it resolves to an object type that has no
/// leaf fields and no deeper include covers it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EmptySelectionPolicy {
    /// Drop the field from the selection entirely.
    Omit,

    /// Fail compilation with
    /// [`QueryCompileError::EmptySelectionSet`](crate::operation::QueryCompileError::EmptySelectionSet).
    #[default]
    Reject,

    /// Render the field with an empty `{ }` block. The resulting document is
    /// not valid GraphQL and will be rejected by most servers.
    RenderEmpty,
}

/// Options for a [`QueryCompiler`](crate::operation::QueryCompiler).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompilerConfig {
    empty_selection: EmptySelectionPolicy,
    scalar_types: ScalarTypeMap,
}
impl CompilerConfig {
    pub fn empty_selection(&self) -> EmptySelectionPolicy {
        self.empty_selection
    }

    pub fn scalar_types(&self) -> &ScalarTypeMap {
        &self.scalar_types
    }

    pub fn with_empty_selection(mut self, policy: EmptySelectionPolicy) -> Self {
        self.empty_selection = policy;
        self
    }

    pub fn with_scalar_types(mut self, scalar_types: ScalarTypeMap) -> Self {
        self.scalar_types = scalar_types;
        self
    }
}
