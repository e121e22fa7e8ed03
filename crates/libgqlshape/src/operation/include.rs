use crate::operation::MethodInclude;

/// A navigation path (e.g. `route.agency.routes`) to expand in the selection,
/// along with the [`MethodInclude`]s for any parameterized relations on it.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Include {
    #[serde(default)]
    method_includes: Vec<MethodInclude>,
    path: String,
}
impl Include {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            method_includes: vec![],
            path: path.into(),
        }
    }

    /// Add a [`MethodInclude`] after any previously added ones.
    pub fn with_method_include(mut self, method_include: MethodInclude) -> Self {
        self.method_includes.push(method_include);
        self
    }

    pub fn method_includes(&self) -> &[MethodInclude] {
        &self.method_includes
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }
}
