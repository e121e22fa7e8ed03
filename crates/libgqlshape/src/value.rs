use crate::types::ScalarKind;
use thiserror::Error;

/// A runtime value supplied as a query argument or as a parameter of a
/// [`MethodInclude`](crate::operation::MethodInclude).
///
/// Values serialize into the variables payload as plain JSON. Enum values are
/// written by their symbolic name, never a numeric code.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum Value {
    Boolean(bool),
    Enum {
        enum_type: String,
        name: String,
    },
    Float(f64),
    Id(String),
    Int(i64),
    List(Vec<Value>),
    Null,
    String(String),
}
impl Value {
    pub fn enum_value(enum_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Enum {
            enum_type: enum_type.into(),
            name: name.into(),
        }
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Enum { .. } => ValueKind::Enum,
            Self::Float(_) => ValueKind::Float,
            Self::Id(_) => ValueKind::Id,
            Self::Int(_) => ValueKind::Int,
            Self::List(_) => ValueKind::List,
            Self::Null => ValueKind::Null,
            Self::String(_) => ValueKind::String,
        }
    }

    /// The built-in scalar this value is an instance of, if any.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            Self::Boolean(_) => Some(ScalarKind::Boolean),
            Self::Float(_) => Some(ScalarKind::Float),
            Self::Id(_) => Some(ScalarKind::Id),
            Self::Int(_) => Some(ScalarKind::Int),
            Self::String(_) => Some(ScalarKind::String),
            Self::Enum { .. } | Self::List(_) | Self::Null => None,
        }
    }
}
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self {
            Self::Boolean(value) => serializer.serialize_bool(*value),
            Self::Enum { name, .. } => serializer.serialize_str(name),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Id(value) | Self::String(value) => serializer.serialize_str(value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::List(values) => serializer.collect_seq(values),
            Self::Null => serializer.serialize_unit(),
        }
    }
}
impl std::convert::TryFrom<serde_json::Value> for Value {
    type Error = ValueFromJsonError;

    /// Read a [`Value`] from plain JSON. Enum values are written as
    /// `{"enum": "<EnumType>", "value": "<NAME>"}` and IDs as `{"id": "..."}`;
    /// any other JSON object is rejected.
    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Boolean(value),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Self::Int(int)
                } else if let Some(float) = number.as_f64() {
                    Self::Float(float)
                } else {
                    return Err(ValueFromJsonError::UnrepresentableNumber(
                        number.to_string(),
                    ));
                }
            },
            serde_json::Value::String(value) => Self::String(value),
            serde_json::Value::Array(values) => Self::List(
                values.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            serde_json::Value::Object(ref entries) => {
                let field = |key: &str| entries.get(key).and_then(|v| v.as_str());
                match (field("enum"), field("value"), field("id"), entries.len()) {
                    (Some(enum_type), Some(name), None, 2) =>
                        Self::enum_value(enum_type, name),
                    (None, None, Some(id), 1) =>
                        Self::id(id),
                    _ => return Err(ValueFromJsonError::UnsupportedObject(
                        json.to_string(),
                    )),
                }
            },
        })
    }
}
impl std::convert::From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}
impl std::convert::From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl<T: Into<Value>> std::convert::From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
impl<T: Into<Value>> std::convert::From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Coarse classification of a [`Value`], used when reporting values that
/// cannot be mapped onto a remote type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    Boolean,
    Enum,
    Float,
    Id,
    Int,
    List,
    Null,
    String,
}
impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Float => "float",
            Self::Id => "id",
            Self::Int => "int",
            Self::List => "list",
            Self::Null => "null",
            Self::String => "string",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValueFromJsonError {
    #[error("Number `{0}` cannot be represented as an Int or a Float")]
    UnrepresentableNumber(String),

    #[error(
        "Unsupported JSON object `{0}`: expected `{{\"enum\": .., \"value\": ..}}` \
        or `{{\"id\": ..}}`"
    )]
    UnsupportedObject(String),
}

#[cfg(test)]
mod tests {
    use super::Value;
    use super::ValueFromJsonError;

    #[test]
    fn enum_values_serialize_by_name() {
        let value = Value::List(vec![
            Value::enum_value("Mode", "BUS"),
            Value::enum_value("Mode", "RAIL"),
        ]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"["BUS","RAIL"]"#);
    }

    #[test]
    fn scalars_serialize_as_plain_json() {
        assert_eq!(serde_json::to_string(&Value::Int(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Value::Boolean(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Value::id("abc")).unwrap(), r#""abc""#);
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
    }

    #[test]
    fn reads_tagged_enum_and_id_objects() {
        let value: Value = serde_json::from_str(
            r#"[{"enum": "Mode", "value": "BUS"}, {"id": "1:2"}, 2.5, 7, null]"#,
        ).unwrap();
        assert_eq!(value, Value::List(vec![
            Value::enum_value("Mode", "BUS"),
            Value::id("1:2"),
            Value::Float(2.5),
            Value::Int(7),
            Value::Null,
        ]));
    }

    #[test]
    fn rejects_untagged_objects() {
        let json = serde_json::json!({"lat": 1.0, "lon": 2.0});
        assert!(matches!(
            Value::try_from(json),
            Err(ValueFromJsonError::UnsupportedObject(_)),
        ));
    }

    #[test]
    fn options_map_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }
}
