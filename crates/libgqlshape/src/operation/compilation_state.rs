use crate::operation::Include;
use crate::operation::MethodIncludeCursor;
use crate::operation::VariableDefinitions;

/// Mutable state scoped to exactly one compilation. Never shared between
/// compilations.
#[derive(Debug)]
pub(crate) struct CompilationState<'a> {
    pub cursor: MethodIncludeCursor<'a>,
    pub variables: VariableDefinitions,
}
impl<'a> CompilationState<'a> {
    pub fn new(includes: &'a [Include]) -> Self {
        Self {
            cursor: MethodIncludeCursor::new(includes),
            variables: VariableDefinitions::default(),
        }
    }
}
