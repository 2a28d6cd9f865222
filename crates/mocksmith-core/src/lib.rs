//! Core contracts for mocksmith.
//!
//! This crate defines the canonical schema types (columns, semantic types,
//! validation constraints), the generated value/record model, and the schema
//! precondition checks shared by the generation engine and its callers.

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;
pub mod value;

pub use error::{Error, Result};
pub use schema::{Column, TableSchema, ValidationConstraints};
pub use types::SemanticType;
pub use validation::validate_schema;
pub use value::{Record, Value};

/// Current contract version for serialized schema artifacts.
pub const SCHEMA_VERSION: &str = "0.1";
