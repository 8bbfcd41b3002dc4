//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use rulesort::output::OutputMode;

/// rulesort - sort filter-list rules by their underlying content
#[derive(Parser, Debug)]
#[command(
    name = "rulesort",
    version,
    about = "Sort AdGuard/uBlock filter-list rules by their underlying content",
    long_about = "Sort filter-list rules alphabetically while ignoring leading\n\
                  syntax markers (*, ||, @@||, @@), so rules group by domain\n\
                  rather than by punctuation.\n\n\
                  Comment lines (!) sort by their own literal text. Blank lines\n\
                  are dropped."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort rules from a file or stdin
    Sort {
        /// Input file; omit or pass "-" to read stdin
        file: Option<PathBuf>,

        /// Write the sorted rules to this file instead of stdout
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Rewrite the input file in place
        #[arg(short, long, requires = "file")]
        in_place: bool,
    },

    /// Check whether rules are already sorted (exit 1 if not)
    Check {
        /// Input file; omit or pass "-" to read stdin
        file: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Parse arguments and dispatch to the selected command
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Sort {
            file,
            output,
            in_place,
        }) => commands::sort(file.as_deref(), output.as_deref(), in_place, output_mode),
        Some(Command::Check { file }) => commands::check(file.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("rulesort v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("rulesort v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'rulesort --help' for usage");
                println!("Run 'rulesort sort <file>' to sort a rule list");
            }
            Ok(())
        },
    }
}
