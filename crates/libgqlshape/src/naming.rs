//! Helpers for mapping local identifiers onto remote GraphQL names.

/// Render a local (PascalCase) identifier under the remote naming convention:
/// the first character is lower-cased and the rest is preserved as-is.
///
/// ```
/// use libgqlshape::naming::to_remote_name;
///
/// assert_eq!(to_remote_name("GtfsId"), "gtfsId");
/// assert_eq!(to_remote_name("routes"), "routes");
/// ```
pub fn to_remote_name(ident: &str) -> String {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Indicates whether `name` is a valid GraphQL
/// [Name](https://spec.graphql.org/October2021/#Name).
pub fn is_valid_graphql_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(b'_' | b'a'..=b'z' | b'A'..=b'Z') => (),
        _ => return false,
    }
    bytes.all(|b| matches!(b, b'_' | b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9'))
}
