//! schemaform - edit schema-described applet configuration in the terminal
//!
//! Loads a field schema, mounts one editor per field and writes the
//! resulting flat config when the session ends.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::{ConfigSubcommand, FormArgs};
use std::path::PathBuf;

/// schemaform - edit schema-described applet configuration in the terminal
#[derive(Parser, Debug)]
#[command(name = "schemaform")]
#[command(about = "Edit schema-described applet configuration in the terminal", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Edit field values interactively
    Edit {
        #[command(flatten)]
        form: FormArgs,

        /// Write the resulting values here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Print how each field resolves, without a terminal UI
    Inspect {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = cli::init_logging(args.debug);

    // Print log file location to stderr before starting TUI (so it doesn't interfere)
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    match args.command {
        Command::Edit { form, output } => cli::handle_edit_command(form, output).await,
        Command::Inspect { form } => cli::handle_inspect_command(form).await,
        Command::Config { subcommand } => cli::handle_config_command(subcommand),
        Command::Version => {
            cli::display_version();
            Ok(())
        }
    }
}
