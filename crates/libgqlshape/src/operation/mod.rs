mod compilation_state;
mod compiled_query;
mod include;
mod include_resolver;
mod method_include;
mod method_include_cursor;
mod query_compile_error;
mod query_compiler;
mod query_spec;
mod selection_node;
mod selector;
mod selector_translator;
mod variable_definitions;

pub(crate) use compilation_state::CompilationState;
pub use compiled_query::CompiledQuery;
pub use include::Include;
pub(crate) use include_resolver::IncludeResolver;
pub use method_include::MethodInclude;
pub use method_include_cursor::MethodIncludeCursor;
pub use query_compile_error::QueryCompileError;
pub use query_compile_error::QueryCompileErrorKind;
pub use query_compiler::QueryCompiler;
pub use query_compiler::RESULT_ALIAS;
pub use query_spec::QuerySpec;
pub use selection_node::ArgumentBinding;
pub use selection_node::SelectionNode;
pub use selector::FieldChain;
pub use selector::Selector;
pub use selector_translator::SelectorTranslator;
pub use variable_definitions::VariableDefinition;
pub(crate) use variable_definitions::VariableDefinitions;

#[cfg(test)]
mod tests;
