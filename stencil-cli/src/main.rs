//! stencil — render a generated-file template from stdin to stdout.
//!
//! # Usage
//!
//! ```text
//! stencil < template.jinja > generated.hpp
//! ```

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use stencil_renderer::Renderer;

// Zero arguments by contract: anything on the command line, `-h` and
// `--version` included, is a usage error.
#[derive(Parser, Debug)]
#[command(
    name = "stencil",
    about = "Render a generated-file template from stdin to stdout",
    disable_help_flag = true,
    disable_version_flag = true,
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("failed to read template from stdin")?;

    let renderer = Renderer::new()?;
    let rendered = renderer.render(&source)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write rendered output")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
