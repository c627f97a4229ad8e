//! psdkeep CLI - keeps PSD assets archived and previewed
//!
//! Usage: psdkeep <COMMAND> [ROOT]
//!
//! Commands:
//!   fix     Archive every PSD, generate missing previews, remove originals
//!   audit   Report non-compliant files (alias: test)

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use psdkeep::presentation::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fix { root, dry_run } => {
            commands::fix::cmd_fix(root.as_deref(), dry_run, cli.json, cli.verbose, cli.color)
        }
        Commands::Audit { root, fail_fast } => {
            commands::audit::cmd_audit(root.as_deref(), fail_fast, cli.json, cli.verbose, cli.color)
        }
    }
}
