//! boilerkit CLI — license boilerplate headers for generated source files.
//!
//! A thin front-end over [`boilerkit_core`]: `generate` resolves the header
//! and writes it to its destination, `path` prints the default destination.
//! The boilerplate flags live in [`BoilerplateArgs`] so that larger
//! scaffolding CLIs can `#[command(flatten)]` them into their own parsers.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "boilerkit",
    about = "Copyright/license boilerplate headers for generated source files",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the boilerplate header and write it to its destination
    Generate {
        #[command(flatten)]
        boilerplate: BoilerplateArgs,

        /// Print the resolved header to stdout instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Print the default boilerplate destination path
    Path,
}

/// Boilerplate flags, designed to be flattened into a caller's own flag set.
#[derive(Args, Clone, Debug)]
pub struct BoilerplateArgs {
    /// Destination path for the boilerplate file
    #[arg(long, default_value = "")]
    pub path: String,

    /// License to use for the boilerplate. May be one of apache2,none
    #[arg(long, default_value = "apache2")]
    pub license: String,

    /// Owner to add to the copyright
    #[arg(long, default_value = "")]
    pub owner: String,

    /// Copyright year (defaults to the current year)
    #[arg(long, default_value = "")]
    pub year: String,

    /// Read literal boilerplate text from this file, bypassing template selection
    #[arg(long)]
    pub boilerplate_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate {
            boilerplate,
            stdout,
        } => {
            commands::generate::run(&boilerplate, stdout)?;
        }
        Commands::Path => {
            commands::path::run()?;
        }
    }

    Ok(())
}
