//! Render the download page for one or more parametric projects.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use param_catalog::write_catalog;
use param_cli::{init_logging, InputSpec};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "param-html",
    about = "Generate a download page for OpenSCAD parametric variations"
)]
struct Cli {
    /// Parameter documents, as `path:project`
    #[arg(required = true, value_name = "PATH:PROJECT")]
    inputs: Vec<InputSpec>,

    /// Output file
    #[arg(long = "Output", short = 'O', default_value = "index.html")]
    output: PathBuf,

    /// Accepted for compatibility; the page is always regenerated
    #[arg(long = "ForceWrite", short = 'F')]
    force_write: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    debug!(force_write = cli.force_write, "regenerating catalog");

    let documents = cli
        .inputs
        .iter()
        .map(|input| {
            input
                .load()
                .with_context(|| format!("loading {}", input.path))
        })
        .collect::<Result<Vec<_>>>()?;

    write_catalog(&documents, &cli.output)?;
    Ok(())
}
