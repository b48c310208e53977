//! # stencil-renderer
//!
//! Jinja-dialect template engine for generated files: `#%` line statements,
//! `##` line comments, a `format_each` filter, and a `generated_file_notice`
//! context function that stamps outputs with a fixed warning banner.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stencil_renderer::Renderer;
//!
//! fn render(source: &str) {
//!     if let Ok(renderer) = Renderer::new() {
//!         match renderer.render(source) {
//!             Ok(output) => print!("{output}"),
//!             Err(e) => eprintln!("{e}"),
//!         }
//!     }
//! }
//! ```

pub mod engine;
pub mod error;
pub mod filters;
pub mod notice;

pub use engine::{Renderer, LINE_COMMENT_PREFIX, LINE_STATEMENT_PREFIX};
pub use error::RenderError;
pub use notice::generated_file_notice;
