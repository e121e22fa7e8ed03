//! Compiles typed navigation paths and custom projections over a local object
//! model into GraphQL query documents and request payloads.
//!
//! The entry point is [`operation::QueryCompiler`]: given a
//! [`types::TypeRegistry`] describing the local object model and an
//! [`operation::QuerySpec`] describing what to fetch, it produces an
//! [`operation::CompiledQuery`] containing the query document, its variables,
//! and a JSON payload ready to hand to a transport.

mod compiler_config;
pub mod naming;
pub mod operation;
mod scalar_type_map;
pub mod types;
mod value;

pub use compiler_config::CompilerConfig;
pub use compiler_config::EmptySelectionPolicy;
pub use scalar_type_map::ScalarTypeMap;
pub use value::Value;
pub use value::ValueFromJsonError;
pub use value::ValueKind;
