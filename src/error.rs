//! Error types for validator generation

use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Validator generation errors
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Unresolved reference: {name} (referenced from {origin})")]
    UnresolvedReference { name: String, origin: String },

    #[error("Name collision: {identifier} is generated by both {first} and {second}")]
    NameCollision {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("Malformed status code {key:?} on endpoint {endpoint}")]
    MalformedStatusCode { key: String, endpoint: String },

    #[error("Empty union in {origin}")]
    EmptyUnion { origin: String },

    #[error("Model lint failed: {0}")]
    Lint(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
