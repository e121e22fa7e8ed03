use crate::naming;
use crate::operation::ArgumentBinding;
use crate::operation::CompilationState;
use crate::operation::Include;
use crate::operation::QueryCompileError;
use crate::operation::SelectionNode;
use crate::types::FieldDefinition;
use crate::types::ObjectType;
use crate::types::TypeDescriptor;
use crate::types::TypeRegistry;
use crate::CompilerConfig;
use crate::EmptySelectionPolicy;

type Result<T> = std::result::Result<T, QueryCompileError>;

/// Expands [`Include`] paths into [`SelectionNode`] trees.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IncludeResolver<'a> {
    config: &'a CompilerConfig,
    registry: &'a TypeRegistry,
}
impl<'a> IncludeResolver<'a> {
    pub fn new(registry: &'a TypeRegistry, config: &'a CompilerConfig) -> Self {
        Self {
            config,
            registry,
        }
    }

    /// Resolve `include` starting at `root_type`.
    ///
    /// Yields one node for the first path segment (nesting the rest of the
    /// path beneath it), or no node if the whole path was dropped under
    /// [`EmptySelectionPolicy::Omit`].
    pub fn resolve(
        &self,
        root_type: &ObjectType,
        include: &Include,
        state: &mut CompilationState<'_>,
    ) -> Result<Vec<SelectionNode>> {
        if include.path().is_empty() {
            return Err(QueryCompileError::EmptyPathSegment {
                path: String::new(),
            });
        }
        self.resolve_segments(root_type, include.path(), include.path(), state)
    }

    fn resolve_segments(
        &self,
        object_type: &ObjectType,
        include_path: &str,
        remaining_path: &str,
        state: &mut CompilationState<'_>,
    ) -> Result<Vec<SelectionNode>> {
        if remaining_path.is_empty() {
            return Ok(SelectionNode::leaves_of(object_type));
        }

        let (segment, rest) = match remaining_path.split_once('.') {
            Some((segment, rest)) => (segment, Some(rest)),
            None => (remaining_path, None),
        };
        if segment.is_empty() || rest == Some("") {
            return Err(QueryCompileError::EmptyPathSegment {
                path: include_path.to_string(),
            });
        }

        let field = object_type.field(segment).ok_or_else(
            || QueryCompileError::UndefinedField {
                path: include_path.to_string(),
                segment: segment.to_string(),
                type_name: object_type.name().to_string(),
            },
        )?;
        let declared_before = state.variables.len();
        let arguments = self.bind_relation_arguments(field, state)?;
        log::trace!(
            "Resolved include segment `{segment}` of `{include_path}` to \
            `{}.{}: {}`.",
            object_type.name(),
            field.name(),
            field.type_descriptor(),
        );

        let element_type = field.type_descriptor().unwrap_collection();
        if element_type.is_leaf() {
            if let Some(rest) = rest {
                return Err(QueryCompileError::PathContinuesPastLeaf {
                    path: include_path.to_string(),
                    remaining: rest.to_string(),
                    segment: segment.to_string(),
                    type_name: object_type.name().to_string(),
                });
            }
            return Ok(vec![
                SelectionNode::leaf(field.remote_name()).with_arguments(arguments),
            ]);
        }

        let child_type = self.object_type_of(element_type)?;
        let children = self.resolve_segments(
            child_type,
            include_path,
            rest.unwrap_or(""),
            state,
        )?;
        let node = wrap_selection(
            self.config.empty_selection(),
            field,
            arguments,
            children,
            include_path,
            child_type,
        )?;
        if node.is_none() {
            // An omitted field must not leave unused variables in the header.
            state.variables.truncate(declared_before);
        }
        Ok(node.into_iter().collect())
    }

    /// If `field` is the parameterized relation described by the method
    /// include at the cursor, consume that descriptor and bind its non-null
    /// parameters to freshly declared, position-suffixed variables.
    fn bind_relation_arguments(
        &self,
        field: &FieldDefinition,
        state: &mut CompilationState<'_>,
    ) -> Result<Vec<ArgumentBinding>> {
        let Some(method_include) = state.cursor.peek() else {
            return Ok(vec![]);
        };
        if !field.matches_name(method_include.name())
            || method_include.return_type() != field.type_descriptor() {
            return Ok(vec![]);
        }

        let position = state.cursor.advance();
        log::trace!(
            "Consumed method include #{position} (`{}`).",
            method_include.name(),
        );

        let mut arguments = vec![];
        for (param_name, value) in method_include.parameters() {
            if !naming::is_valid_graphql_name(param_name) {
                return Err(QueryCompileError::InvalidArgumentName {
                    argument_name: param_name.to_string(),
                });
            }
            if value.is_null() {
                continue;
            }
            let variable_name = format!("{param_name}{position}");
            state.variables.declare(
                param_name,
                variable_name.clone(),
                value,
                self.config.scalar_types(),
            )?;
            arguments.push(ArgumentBinding::new(param_name.as_str(), variable_name));
        }
        Ok(arguments)
    }

    pub fn object_type_of(&self, type_descriptor: &TypeDescriptor) -> Result<&'a ObjectType> {
        object_type_of(self.registry, type_descriptor)
    }
}

/// Look up the object type behind a non-leaf descriptor.
pub(crate) fn object_type_of<'r>(
    registry: &'r TypeRegistry,
    type_descriptor: &TypeDescriptor,
) -> Result<&'r ObjectType> {
    let type_name = type_descriptor.object_name().ok_or_else(
        || QueryCompileError::UndefinedType {
            type_name: type_descriptor.to_string(),
        },
    )?;
    registry.object_type(type_name).ok_or_else(
        || QueryCompileError::UndefinedType {
            type_name: type_name.to_string(),
        },
    )
}

/// Nest `children` beneath `field`, applying `policy` when nothing was
/// selected on the field's type.
pub(crate) fn wrap_selection(
    policy: EmptySelectionPolicy,
    field: &FieldDefinition,
    arguments: Vec<ArgumentBinding>,
    children: Vec<SelectionNode>,
    path: &str,
    child_type: &ObjectType,
) -> Result<Option<SelectionNode>> {
    if children.is_empty() {
        match policy {
            EmptySelectionPolicy::Omit => {
                log::debug!(
                    "Omitting `{}` from `{path}`: type `{}` has no selectable \
                    fields.",
                    field.remote_name(),
                    child_type.name(),
                );
                return Ok(None);
            },
            EmptySelectionPolicy::Reject =>
                return Err(QueryCompileError::EmptySelectionSet {
                    path: path.to_string(),
                    type_name: child_type.name().to_string(),
                }),
            EmptySelectionPolicy::RenderEmpty => (),
        }
    }

    Ok(Some(
        SelectionNode::composite(field.remote_name(), children)
            .with_arguments(arguments),
    ))
}
