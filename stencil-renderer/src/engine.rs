//! Jinja-dialect engine — [`Renderer`] and the generated-file dialect.
//!
//! # Dialect
//!
//! | Prefix | Meaning                                              |
//! |--------|------------------------------------------------------|
//! | `#%`   | rest of the line is a control directive              |
//! | `##`   | rest of the line is a comment, dropped from output   |
//!
//! Both are recognized only as the first non-whitespace token on a line.

use minijinja::syntax::SyntaxConfig;
use minijinja::{context, Environment, UndefinedBehavior, Value};

use crate::error::RenderError;
use crate::filters;
use crate::notice;

/// Prefix turning the remainder of a line into a control directive.
pub const LINE_STATEMENT_PREFIX: &str = "#%";

/// Prefix turning the remainder of a line into a discarded comment.
pub const LINE_COMMENT_PREFIX: &str = "##";

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Jinja-dialect renderer for generated-file templates.
///
/// Create once with [`Renderer::new`] and reuse; rendering itself is
/// stateless. Undefined variables are errors, and a trailing newline in the
/// template survives into the output unchanged.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Construct a new [`Renderer`] with the generated-file dialect and the
    /// `format_each` filter installed.
    pub fn new() -> Result<Self, RenderError> {
        let syntax = SyntaxConfig::builder()
            .line_statement_prefix(LINE_STATEMENT_PREFIX)
            .line_comment_prefix(LINE_COMMENT_PREFIX)
            .build()
            .map_err(RenderError::Syntax)?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_filter("format_each", filters::format_each);
        Ok(Renderer { env })
    }

    /// Render `source` and return the rendered string.
    ///
    /// The render context holds a single entry, `generated_file_notice`,
    /// callable from the template with the name of the file the output is
    /// generated from.
    pub fn render(&self, source: &str) -> Result<String, RenderError> {
        let template = self
            .env
            .template_from_str(source)
            .map_err(RenderError::Parse)?;
        template
            .render(context! {
                generated_file_notice => Value::from_function(|filename: String| {
                    notice::generated_file_notice(&filename)
                }),
            })
            .map_err(RenderError::Render)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
