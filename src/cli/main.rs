//! roster-cli: export, inspect and pit shinobi from a roster file against each other

use anyhow::Result;
use clap::{Parser, Subcommand};
use shinobi_roster::cli::commands::export::{ExportArgs, handle_export};
use shinobi_roster::cli::commands::fight::{FightArgs, handle_fight};
use shinobi_roster::cli::commands::show::{ShowArgs, handle_show};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "roster-cli")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Export and inspect a shinobi roster described in TOML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Export every character and mission in one format
    Export {
        /// Roster configuration file (`-` for stdin)
        input: String,
        /// json, xml, text or spreadsheet
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Destination name; the extension is added when missing
        #[arg(short, long)]
        output: Option<String>,
        /// Directory relative destinations resolve against
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },
    /// Print the roster, or the members of one village
    Show {
        /// Roster configuration file (`-` for stdin)
        input: String,
        #[arg(short, long)]
        village: Option<String>,
    },
    /// Resolve a fight between two characters
    Fight {
        /// Roster configuration file (`-` for stdin)
        input: String,
        attacker: String,
        defender: String,
        /// Train this character once before the fight (repeatable)
        #[arg(long)]
        train: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Export {
            input,
            format,
            output,
            base_dir,
        } => handle_export(&ExportArgs {
            input,
            format,
            output,
            base_dir,
        })?,
        Commands::Show { input, village } => handle_show(&ShowArgs { input, village })?,
        Commands::Fight {
            input,
            attacker,
            defender,
            train,
        } => handle_fight(&FightArgs {
            input,
            attacker,
            defender,
            train,
        })?,
    };

    println!("{}", output);
    Ok(())
}
