use crate::types::ObjectType;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Binds a field argument to a query variable (`argument: $variable`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArgumentBinding {
    argument_name: String,
    variable_name: String,
}
impl ArgumentBinding {
    pub fn new(
        argument_name: impl Into<String>,
        variable_name: impl Into<String>,
    ) -> Self {
        Self {
            argument_name: argument_name.into(),
            variable_name: variable_name.into(),
        }
    }

    pub fn argument_name(&self) -> &str {
        self.argument_name.as_str()
    }

    pub fn variable_name(&self) -> &str {
        self.variable_name.as_str()
    }
}
impl std::fmt::Display for ArgumentBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: ${}", self.argument_name, self.variable_name)
    }
}

/// One field of a selection, built as a tree before being rendered to text.
///
/// A node with no selection set is a leaf. A node with `Some(vec![])` is a
/// composite field with nothing selected, which renders as `field { }`.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionNode {
    alias: Option<String>,
    arguments: Vec<ArgumentBinding>,
    field_name: String,
    selection_set: Option<Vec<SelectionNode>>,
}
impl SelectionNode {
    pub fn leaf(field_name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            field_name: field_name.into(),
            selection_set: None,
        }
    }

    pub fn composite(
        field_name: impl Into<String>,
        selection_set: Vec<SelectionNode>,
    ) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            field_name: field_name.into(),
            selection_set: Some(selection_set),
        }
    }

    /// Leaf nodes for every leaf field of `object_type`, in declaration order.
    pub fn leaves_of(object_type: &ObjectType) -> Vec<SelectionNode> {
        object_type.leaf_fields()
            .into_iter()
            .map(SelectionNode::leaf)
            .collect()
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<ArgumentBinding>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &[ArgumentBinding] {
        &self.arguments
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    pub fn is_leaf(&self) -> bool {
        self.selection_set.is_none()
    }

    pub fn selection_set(&self) -> Option<&[SelectionNode]> {
        self.selection_set.as_deref()
    }

    /// Append this node to `out` as indented, multi-line text starting at
    /// `depth` levels of indentation, one field per line.
    pub fn write_indented(&self, out: &mut String, depth: usize) {
        let indent = INDENT.repeat(depth);
        out.push_str(&indent);
        self.write_head(out);
        match &self.selection_set {
            None => out.push('\n'),
            Some(children) if children.is_empty() => out.push_str(" { }\n"),
            Some(children) => {
                out.push_str(" {\n");
                for child in children {
                    child.write_indented(out, depth + 1);
                }
                out.push_str(&indent);
                out.push_str("}\n");
            },
        }
    }

    /// Render a list of sibling nodes as indented text.
    pub fn render_all(nodes: &[SelectionNode], depth: usize) -> String {
        let mut out = String::new();
        for node in nodes {
            node.write_indented(&mut out, depth);
        }
        out
    }

    fn write_head(&self, out: &mut String) {
        if let Some(alias) = &self.alias {
            out.push_str(alias);
            out.push_str(": ");
        }
        out.push_str(&self.field_name);
        if !self.arguments.is_empty() {
            let arguments = self.arguments.iter()
                .map(ArgumentBinding::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            // Writing into a String cannot fail.
            let _ = write!(out, "({arguments})");
        }
    }
}

/// Compact, single-line rendering, e.g. `RouteId: route { gtfsId }`.
impl std::fmt::Display for SelectionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut head = String::new();
        self.write_head(&mut head);
        f.write_str(&head)?;
        match &self.selection_set {
            None => Ok(()),
            Some(children) if children.is_empty() => f.write_str(" { }"),
            Some(children) => {
                f.write_str(" {")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(" }")
            },
        }
    }
}
