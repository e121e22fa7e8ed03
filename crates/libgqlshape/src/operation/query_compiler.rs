use crate::naming;
use crate::operation::compiled_query::QueryPayload;
use crate::operation::ArgumentBinding;
use crate::operation::CompilationState;
use crate::operation::CompiledQuery;
use crate::operation::IncludeResolver;
use crate::operation::QueryCompileError;
use crate::operation::QuerySpec;
use crate::operation::SelectionNode;
use crate::operation::SelectorTranslator;
use crate::types::ObjectType;
use crate::types::TypeRegistry;
use crate::CompilerConfig;
use crate::EmptySelectionPolicy;
use std::sync::Arc;

type Result<T> = std::result::Result<T, QueryCompileError>;

/// The alias every compiled query reads its result from.
pub const RESULT_ALIAS: &str = "result";

/// Compiles [`QuerySpec`]s into [`CompiledQuery`]s against a fixed
/// [`TypeRegistry`].
///
/// A compiler holds no mutable state, so one instance may be shared across
/// threads and used for any number of compilations.
#[derive(Clone, Debug)]
pub struct QueryCompiler<'registry> {
    config: CompilerConfig,
    registry: &'registry TypeRegistry,
}
impl<'registry> QueryCompiler<'registry> {
    pub fn new(registry: &'registry TypeRegistry) -> Self {
        Self::with_config(registry, CompilerConfig::default())
    }

    pub fn with_config(
        registry: &'registry TypeRegistry,
        config: CompilerConfig,
    ) -> Self {
        Self {
            config,
            registry,
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile `spec` into a query document, its variables, and a JSON payload.
    ///
    /// Any failure aborts the whole compilation; partial documents are never
    /// returned.
    pub fn compile(&self, spec: &QuerySpec) -> Result<CompiledQuery> {
        log::debug!(
            "Compiling query `{}` returning `{}` ({} arguments, {} includes, \
            selector: {}).",
            spec.query_name(),
            spec.root_type(),
            spec.arguments().len(),
            spec.includes().len(),
            spec.selector().is_some(),
        );

        let query_name = naming::to_remote_name(spec.query_name());
        if !naming::is_valid_graphql_name(&query_name) {
            return Err(QueryCompileError::InvalidQueryName {
                query_name: spec.query_name().to_string(),
            });
        }

        let root_type = self.registry.object_type(spec.root_type()).ok_or_else(
            || QueryCompileError::UndefinedType {
                type_name: spec.root_type().to_string(),
            },
        )?;

        let mut state = CompilationState::new(spec.includes());
        let bindings = self.declare_arguments(spec, &mut state)?;
        let selection = self.build_selection(spec, root_type, &mut state)?;

        if !state.cursor.remaining().is_empty() {
            log::warn!(
                "{} method include(s) were not consumed by any include path \
                of query `{}`: {}",
                state.cursor.remaining().len(),
                spec.query_name(),
                state.cursor.remaining().iter()
                    .map(|method_include| format!("`{}`", method_include.name()))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        let document = self.render_document(&query_name, bindings, selection, &state);
        let variables = state.variables.into_values();
        let payload = serde_json::to_string(&QueryPayload {
            query: &document,
            variables: &variables,
        }).map_err(|e| QueryCompileError::PayloadSerialization(Arc::new(e)))?;

        log::trace!("Compiled query `{}`:\n{document}", spec.query_name());
        Ok(CompiledQuery {
            document,
            payload,
            variables,
        })
    }

    /// Declare a variable for each non-null argument and produce the matching
    /// call-site bindings. Null arguments are left out of both.
    fn declare_arguments(
        &self,
        spec: &QuerySpec,
        state: &mut CompilationState<'_>,
    ) -> Result<Vec<ArgumentBinding>> {
        let mut bindings = vec![];
        for (name, value) in spec.arguments() {
            if !naming::is_valid_graphql_name(name) {
                return Err(QueryCompileError::InvalidArgumentName {
                    argument_name: name.to_string(),
                });
            }
            if value.is_null() {
                log::trace!("Omitting null argument `{name}`.");
                continue;
            }
            state.variables.declare(
                name,
                name.to_string(),
                value,
                self.config.scalar_types(),
            )?;
            bindings.push(ArgumentBinding::new(name.as_str(), name.as_str()));
        }
        Ok(bindings)
    }

    /// The selector's output when one is given; otherwise the root type's leaf
    /// fields followed by every include, resolved against one shared method
    /// include cursor.
    fn build_selection(
        &self,
        spec: &QuerySpec,
        root_type: &ObjectType,
        state: &mut CompilationState<'_>,
    ) -> Result<Vec<SelectionNode>> {
        let selection = if let Some(selector) = spec.selector() {
            if !spec.includes().is_empty() {
                log::warn!(
                    "Ignoring {} include(s) on query `{}` because a selector \
                    was given.",
                    spec.includes().len(),
                    spec.query_name(),
                );
            }
            SelectorTranslator::new(self.registry, &self.config)
                .translate(root_type, selector)?
        } else {
            let resolver = IncludeResolver::new(self.registry, &self.config);
            let mut selection = SelectionNode::leaves_of(root_type);
            for include in spec.includes() {
                selection.append(&mut resolver.resolve(root_type, include, state)?);
            }
            selection
        };

        if selection.is_empty()
            && self.config.empty_selection() != EmptySelectionPolicy::RenderEmpty {
            return Err(QueryCompileError::EmptySelectionSet {
                path: String::new(),
                type_name: root_type.name().to_string(),
            });
        }
        Ok(selection)
    }

    fn render_document(
        &self,
        query_name: &str,
        bindings: Vec<ArgumentBinding>,
        selection: Vec<SelectionNode>,
        state: &CompilationState<'_>,
    ) -> String {
        let mut document = String::from("query");
        if !state.variables.is_empty() {
            let declarations = state.variables.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            document.push_str(&format!(" ({declarations})"));
        }
        document.push_str(" {\n");
        SelectionNode::composite(query_name, selection)
            .with_alias(RESULT_ALIAS)
            .with_arguments(bindings)
            .write_indented(&mut document, 1);
        document.push('}');
        document
    }
}
