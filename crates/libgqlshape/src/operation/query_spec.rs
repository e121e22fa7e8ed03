use crate::operation::Include;
use crate::operation::Selector;
use crate::Value;
use indexmap::IndexMap;

/// Everything needed to compile a single query: the remote operation, its
/// arguments, and the shape of the result to request.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct QuerySpec {
    #[serde(default)]
    arguments: IndexMap<String, Value>,
    #[serde(default)]
    includes: Vec<Include>,
    query_name: String,
    root_type: String,
    #[serde(default)]
    selector: Option<Selector>,
}
impl QuerySpec {
    /// `query_name` is the remote operation to call and `root_type` the name
    /// of the local [`ObjectType`](crate::types::ObjectType) it returns.
    pub fn new(query_name: impl Into<String>, root_type: impl Into<String>) -> Self {
        Self {
            arguments: IndexMap::new(),
            includes: vec![],
            query_name: query_name.into(),
            root_type: root_type.into(),
            selector: None,
        }
    }

    /// Add an argument after any previously added arguments. A `null` value
    /// leaves the argument out of the compiled query.
    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn with_include(mut self, include: Include) -> Self {
        self.includes.push(include);
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn includes(&self) -> &[Include] {
        &self.includes
    }

    pub fn query_name(&self) -> &str {
        self.query_name.as_str()
    }

    pub fn root_type(&self) -> &str {
        self.root_type.as_str()
    }

    pub fn selector(&self) -> Option<&Selector> {
        self.selector.as_ref()
    }
}
