/// A custom projection of the root object, replacing the default field
/// selection and any includes.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub enum Selector {
    /// Build a result from several independent chains, one aliased field per
    /// chain.
    Constructed(Vec<FieldChain>),

    /// Pick one nested field chain.
    SingleChain(FieldChain),
}
impl Selector {
    pub fn chains(&self) -> &[FieldChain] {
        match self {
            Self::Constructed(chains) => chains,
            Self::SingleChain(chain) => std::slice::from_ref(chain),
        }
    }
}

/// A chain of field accesses starting at the root type, e.g. `route.gtfsId`,
/// whose outermost field is renamed to `alias` in the result.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct FieldChain {
    alias: String,
    steps: Vec<String>,
}
impl FieldChain {
    pub fn new<S: Into<String>>(
        alias: impl Into<String>,
        steps: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            alias: alias.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a chain from a dot-delimited path.
    pub fn from_path(alias: impl Into<String>, path: &str) -> Self {
        Self::new(alias, path.split('.'))
    }

    pub fn alias(&self) -> &str {
        self.alias.as_str()
    }

    pub fn path(&self) -> String {
        self.steps.join(".")
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}
