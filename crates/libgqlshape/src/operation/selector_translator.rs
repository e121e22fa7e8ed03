use crate::naming;
use crate::operation::include_resolver;
use crate::operation::FieldChain;
use crate::operation::QueryCompileError;
use crate::operation::SelectionNode;
use crate::operation::Selector;
use crate::types::FieldDefinition;
use crate::types::ObjectType;
use crate::types::TypeRegistry;
use crate::CompilerConfig;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, QueryCompileError>;

/// Translates a [`Selector`] into aliased [`SelectionNode`]s. Include
/// directives play no part in a selector's translation.
#[derive(Clone, Copy, Debug)]
pub struct SelectorTranslator<'a> {
    config: &'a CompilerConfig,
    registry: &'a TypeRegistry,
}
impl<'a> SelectorTranslator<'a> {
    pub fn new(registry: &'a TypeRegistry, config: &'a CompilerConfig) -> Self {
        Self {
            config,
            registry,
        }
    }

    /// Translate `selector` over `root_type`, producing one top-level node per
    /// chain in order.
    pub fn translate(
        &self,
        root_type: &ObjectType,
        selector: &Selector,
    ) -> Result<Vec<SelectionNode>> {
        if let Selector::Constructed(chains) = selector {
            if chains.is_empty() {
                return Err(QueryCompileError::UnsupportedSelector {
                    reason: "a constructed selector needs at least one field chain"
                        .to_string(),
                });
            }

            let mut seen_aliases = HashSet::new();
            for chain in chains {
                if !seen_aliases.insert(chain.alias()) {
                    return Err(QueryCompileError::DuplicateSelectorAlias {
                        alias: chain.alias().to_string(),
                    });
                }
            }
        }

        let mut nodes = vec![];
        for chain in selector.chains() {
            if let Some(node) = self.translate_chain(root_type, chain)? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    /// Translate a single chain. The innermost step is expanded one level if
    /// it is composite, every outer step wraps the step inside it, and the
    /// outermost step carries the chain's alias.
    pub fn translate_chain(
        &self,
        root_type: &ObjectType,
        chain: &FieldChain,
    ) -> Result<Option<SelectionNode>> {
        if !naming::is_valid_graphql_name(chain.alias()) {
            return Err(QueryCompileError::InvalidAlias {
                alias: chain.alias().to_string(),
            });
        }
        let path = chain.path();
        let Some((innermost_step, outer_steps)) = chain.steps().split_last() else {
            return Err(QueryCompileError::UnsupportedSelector {
                reason: format!(
                    "field chain aliased `{}` selects no fields",
                    chain.alias(),
                ),
            });
        };

        // Resolve the field behind every step but the innermost.
        let mut current_type = root_type;
        let mut outer_fields: Vec<&FieldDefinition> = vec![];
        for (idx, step) in outer_steps.iter().enumerate() {
            let field = lookup_field(current_type, &path, step)?;
            let element_type = field.type_descriptor().unwrap_collection();
            if element_type.is_leaf() {
                return Err(QueryCompileError::PathContinuesPastLeaf {
                    path,
                    remaining: chain.steps()[idx + 1..].join("."),
                    segment: step.to_string(),
                    type_name: current_type.name().to_string(),
                });
            }
            current_type = include_resolver::object_type_of(self.registry, element_type)?;
            outer_fields.push(field);
        }

        let innermost_field = lookup_field(current_type, &path, innermost_step)?;
        let element_type = innermost_field.type_descriptor().unwrap_collection();
        let mut node = if element_type.is_leaf() {
            SelectionNode::leaf(innermost_field.remote_name())
        } else {
            let child_type =
                include_resolver::object_type_of(self.registry, element_type)?;
            match include_resolver::wrap_selection(
                self.config.empty_selection(),
                innermost_field,
                vec![],
                SelectionNode::leaves_of(child_type),
                &path,
                child_type,
            )? {
                Some(node) => node,
                None => return Ok(None),
            }
        };

        for field in outer_fields.into_iter().rev() {
            node = SelectionNode::composite(field.remote_name(), vec![node]);
        }

        let node = node.with_alias(chain.alias());
        log::trace!("Translated selector chain `{path}` to `{node}`.");
        Ok(Some(node))
    }
}

fn lookup_field<'t>(
    object_type: &'t ObjectType,
    path: &str,
    step: &str,
) -> Result<&'t FieldDefinition> {
    object_type.field(step).ok_or_else(|| QueryCompileError::UndefinedField {
        path: path.to_string(),
        segment: step.to_string(),
        type_name: object_type.name().to_string(),
    })
}
