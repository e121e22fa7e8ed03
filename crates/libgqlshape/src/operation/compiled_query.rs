use crate::Value;
use indexmap::IndexMap;

/// The output of one [`QueryCompiler::compile`] call: the query document, the
/// values bound to its variables, and the two serialized together as a
/// transport-ready JSON payload.
///
/// [`QueryCompiler::compile`]: crate::operation::QueryCompiler::compile
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledQuery {
    pub(super) document: String,
    pub(super) payload: String,
    pub(super) variables: IndexMap<String, Value>,
}
impl CompiledQuery {
    /// The GraphQL query document text.
    pub fn document(&self) -> &str {
        self.document.as_str()
    }

    /// JSON of the shape `{"query": <document>, "variables": {...}}`.
    pub fn payload(&self) -> &str {
        self.payload.as_str()
    }

    /// Variable values keyed by variable name (without the `$`), in the order
    /// they are declared in the document.
    pub fn variables(&self) -> &IndexMap<String, Value> {
        &self.variables
    }
}

#[derive(serde::Serialize)]
pub(super) struct QueryPayload<'a> {
    pub query: &'a str,
    pub variables: &'a IndexMap<String, Value>,
}
