//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `FlowError` as one
//! variant via `#[from]`, so a validation failure raised here surfaces
//! unchanged at the CLI.

use thiserror::Error;

/// The base error type for `flow-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A configuration value was rejected at build time (e.g. a penetration
    /// rate outside `(0, 1)`).
    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `flow-*` crates.
pub type FlowResult<T> = Result<T, FlowError>;
