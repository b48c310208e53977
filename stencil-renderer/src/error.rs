//! Error types for stencil-renderer.

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The engine rejected the dialect configuration.
    #[error("template syntax configuration error: {0}")]
    Syntax(#[source] minijinja::Error),

    /// The template source is not valid for the dialect.
    #[error("template parse error: {0}")]
    Parse(#[source] minijinja::Error),

    /// Evaluation failed (undefined variable, filter misuse).
    #[error("template render error: {0}")]
    Render(#[source] minijinja::Error),
}
