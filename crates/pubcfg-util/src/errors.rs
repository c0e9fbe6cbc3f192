use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pubcfg operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PublishingError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The build description could not be read or parsed.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check your Publishing.toml for syntax errors and value types"))]
    Config { message: String },

    /// A field required before publishing is unset or empty.
    #[error("Configuration incomplete: {message}")]
    #[diagnostic(help("Set the missing fields in Publishing.toml or through the builder API"))]
    ConfigIncomplete { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type PublishingResult<T> = miette::Result<T>;
