//! outfit CLI: previews outfit components and button classes.
//!
//! - `outfit classes --variant destructive --size sm` prints the resolved
//!   class string
//! - `outfit render button --label Save` prints component markup, optionally
//!   as a standalone document (`--document`) or as JSON with the requested
//!   animations (`--json`)
//!
//! `--theme <file>` layers a YAML theme over the built-in variant table.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use outfit::Renderer;
use tracing::debug;

mod commands;
mod environment;
mod tracing_setup;

use commands::{RenderArgs, StyleArgs};

#[derive(Parser, Debug)]
#[command(
    name = "outfit",
    version,
    about = "Render outfit components and button classes from the command line"
)]
struct Cli {
    /// YAML theme overriding entries of the button variant table
    #[arg(long, global = true, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the class string for a button variant, size and effect
    Classes(StyleArgs),

    /// Print the markup of a component
    Render(RenderArgs),
}

fn run(cli: Cli) -> Result<String> {
    let variants = commands::load_variants(cli.theme.as_deref())?;
    match cli.command {
        Commands::Classes(args) => commands::classes(&variants, &args),
        Commands::Render(args) => {
            debug!(component = ?args.component, "rendering");
            let rendered = commands::render(Renderer::with_variants(variants), &args)?;
            commands::format_output(&rendered, &args)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = tracing_setup::init_tracing(cli.debug) {
        eprintln!("{} {err:#}", style("warning:").yellow().bold());
    }

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
