//! Write per-variant parameter files for the model build.

use anyhow::{Context, Result};
use clap::Parser;
use param_cli::{init_logging, InputSpec};
use tracing::debug;
use variant_writer::{build_targets, format_targets, VariantWriter};

#[derive(Parser, Debug)]
#[command(
    name = "param-variants",
    about = "Generate OpenSCAD compatible parametric variations"
)]
struct Cli {
    /// Parameter documents, as `path` or `path:project`
    #[arg(required = true, value_name = "PATH[:PROJECT]")]
    inputs: Vec<InputSpec>,

    /// Write only this parameter set
    #[arg(long = "WriteSingle", short = 'S', value_name = "SET")]
    write_single: Option<String>,

    /// Write every parameter set
    #[arg(long = "WriteAll", short = 'A')]
    write_all: bool,

    /// Print build targets as `project:set:path:scad`
    #[arg(long = "PrintTarget", short = 'T')]
    print_targets: bool,

    /// Write even when nothing changed
    #[arg(long = "ForceWrite", short = 'F')]
    force_write: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let writer = VariantWriter::default();

    // A single set name applies to every input document.
    for input in &cli.inputs {
        let doc = input
            .load()
            .with_context(|| format!("loading {}", input.path))?;
        debug!(path = %input.path, project = %doc.project, sets = doc.parameter_sets.len(), "document loaded");

        if let Some(set_name) = &cli.write_single {
            let status = writer.write_single(
                &doc.parameter_sets,
                &doc.project,
                set_name,
                cli.force_write,
            )?;
            println!("{set_name} {status}");
        } else if cli.write_all {
            writer.write_all(
                &doc.parameter_sets,
                &doc.project,
                cli.force_write,
                |set_name, status| println!("{set_name} {status}"),
            )?;
        }

        if cli.print_targets {
            println!("{}", format_targets(&build_targets(&doc, &input.path)));
        }
    }

    Ok(())
}
