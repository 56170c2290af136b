//! Unified error types for boilerkit.

use thiserror::Error;

/// All errors that can occur during boilerkit operations.
#[derive(Error, Debug)]
pub enum BoilerkitError {
    /// A filesystem I/O error, e.g. the literal boilerplate file could not be
    /// read. Propagated unchanged from the underlying read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Handlebars rendering failed (invalid template or, in strict mode, a
    /// variable missing from the data context).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, BoilerkitError>`.
pub type Result<T> = std::result::Result<T, BoilerkitError>;
