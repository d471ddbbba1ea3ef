//! Schema validation error types.

use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("unknown schema '{0}'")]
    UnknownSchema(String),

    /// The instance violates the named schema.
    #[error("{schema} failed schema validation ({} violation(s)): {}", errors.len(), errors.join("; "))]
    Invalid {
        schema: String,
        /// One message per violation, prefixed with its JSON pointer.
        errors: Vec<String>,
    },

    /// A generated schema could not be compiled into a validator.
    #[error("schema '{schema}' does not compile: {reason}")]
    Compile { schema: String, reason: String },
}
