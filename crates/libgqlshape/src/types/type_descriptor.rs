use crate::types::ScalarKind;

/// Describes the declared type of a field on the local object model.
///
/// Descriptors are plain data: they name object and enum types rather than
/// pointing at them, so a [`TypeRegistry`](crate::types::TypeRegistry) can
/// hold every type without self-references.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum TypeDescriptor {
    Enum(String),
    List(Box<TypeDescriptor>),
    Object(String),
    Optional(Box<TypeDescriptor>),
    Scalar(ScalarKind),
}
impl TypeDescriptor {
    pub fn enum_(name: impl Into<String>) -> Self {
        Self::Enum(name.into())
    }

    pub fn list(inner: TypeDescriptor) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::Object(name.into())
    }

    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }

    /// Strip any [`TypeDescriptor::Optional`] layers.
    pub fn unwrap_optional(&self) -> &TypeDescriptor {
        match self {
            Self::Optional(inner) => inner.unwrap_optional(),
            other => other,
        }
    }

    /// Indicates whether this type is a leaf: a scalar or an enum (after
    /// unwrapping optionality) with no further selectable sub-fields.
    ///
    /// Collections are not leaves; use [`TypeDescriptor::unwrap_collection`]
    /// first to classify their element type.
    pub fn is_leaf(&self) -> bool {
        matches!(self.unwrap_optional(), Self::Enum(_) | Self::Scalar(_))
    }

    /// Indicates whether this type is (possibly an optional) list.
    pub fn is_collection(&self) -> bool {
        matches!(self.unwrap_optional(), Self::List(_))
    }

    /// Recursively unwrap list types (and any optionality wrapped around
    /// them) and return the innermost element type. Non-collection types are
    /// returned unchanged.
    pub fn unwrap_collection(&self) -> &TypeDescriptor {
        match self.unwrap_optional() {
            Self::List(inner) => inner.unwrap_collection(),
            _ => self,
        }
    }

    /// The name of the object type behind this descriptor once collections
    /// and optionality are unwrapped, if it is an object type at all.
    pub fn object_name(&self) -> Option<&str> {
        match self.unwrap_collection().unwrap_optional() {
            Self::Object(name) => Some(name.as_str()),
            _ => None,
        }
    }
}
impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enum(name) | Self::Object(name) => f.write_str(name),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Optional(inner) => write!(f, "{inner}?"),
            Self::Scalar(kind) => write!(f, "{kind}"),
        }
    }
}
