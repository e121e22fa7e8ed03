use crate::ValueKind;
use std::sync::Arc;
use thiserror::Error;

/// Broad classes of [`QueryCompileError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryCompileErrorKind {
    /// An include path, selector, or name in the [`QuerySpec`] does not fit
    /// the type metadata.
    ///
    /// [`QuerySpec`]: crate::operation::QuerySpec
    Configuration,

    /// The variables payload could not be serialized.
    Serialization,

    /// An argument value has no corresponding remote type.
    TypeMapping,
}

#[derive(Clone, Debug, Error)]
pub enum QueryCompileError {
    #[error("Selector alias `{alias}` is used by more than one field chain")]
    DuplicateSelectorAlias {
        alias: String,
    },

    #[error("Variable `${variable_name}` would be declared more than once")]
    DuplicateVariableName {
        variable_name: String,
    },

    #[error("Path `{path}` contains an empty segment")]
    EmptyPathSegment {
        path: String,
    },

    #[error(
        "Path `{path}` reaches type `{type_name}`, which has no selectable \
        fields"
    )]
    EmptySelectionSet {
        path: String,
        type_name: String,
    },

    #[error("`{alias}` is not a valid GraphQL alias")]
    InvalidAlias {
        alias: String,
    },

    #[error("`{argument_name}` is not a valid GraphQL argument name")]
    InvalidArgumentName {
        argument_name: String,
    },

    #[error("`{query_name}` is not a valid GraphQL field name")]
    InvalidQueryName {
        query_name: String,
    },

    #[error(
        "Path `{path}` continues past leaf field `{segment}` on type \
        `{type_name}` (unresolved remainder: `{remaining}`)"
    )]
    PathContinuesPastLeaf {
        path: String,
        remaining: String,
        segment: String,
        type_name: String,
    },

    #[error("Failure serializing the query payload: {0}")]
    PayloadSerialization(Arc<serde_json::Error>),

    #[error(
        "Segment `{segment}` of path `{path}` does not name a field on type \
        `{type_name}`"
    )]
    UndefinedField {
        path: String,
        segment: String,
        type_name: String,
    },

    #[error("Type `{type_name}` is not defined in the type registry")]
    UndefinedType {
        type_name: String,
    },

    #[error(
        "Argument `{argument_name}` has a {value_kind} value with no \
        corresponding remote type"
    )]
    UnmappedArgumentType {
        argument_name: String,
        value_kind: ValueKind,
    },

    #[error("Unsupported selector: {reason}")]
    UnsupportedSelector {
        reason: String,
    },
}
impl QueryCompileError {
    pub fn kind(&self) -> QueryCompileErrorKind {
        match self {
            Self::PayloadSerialization(_) => QueryCompileErrorKind::Serialization,
            Self::UnmappedArgumentType { .. } => QueryCompileErrorKind::TypeMapping,
            Self::DuplicateSelectorAlias { .. }
            | Self::DuplicateVariableName { .. }
            | Self::EmptyPathSegment { .. }
            | Self::EmptySelectionSet { .. }
            | Self::InvalidAlias { .. }
            | Self::InvalidArgumentName { .. }
            | Self::InvalidQueryName { .. }
            | Self::PathContinuesPastLeaf { .. }
            | Self::UndefinedField { .. }
            | Self::UndefinedType { .. }
            | Self::UnsupportedSelector { .. }
                => QueryCompileErrorKind::Configuration,
        }
    }
}
