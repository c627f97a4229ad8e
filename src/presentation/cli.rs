//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// psdkeep - keeps PSD assets archived and previewed
#[derive(Parser, Debug)]
#[command(name = "psdkeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Archive every PSD, generate missing previews, and remove originals
    Fix {
        /// Directory to reconcile (defaults to the current directory)
        root: Option<PathBuf>,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Report PSD files that are not archived and previewed (exits non-zero on violations)
    #[command(alias = "test")]
    Audit {
        /// Directory to audit (defaults to the current directory)
        root: Option<PathBuf>,

        /// Stop at the first violation
        #[arg(long)]
        fail_fast: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_fix_defaults() {
        let cli = Cli::try_parse_from(["psdkeep", "fix"]).unwrap();
        if let Commands::Fix { root, dry_run } = cli.command {
            assert_eq!(root, None);
            assert!(!dry_run);
        } else {
            panic!("Expected Fix command");
        }
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_fix_root_and_dry_run() {
        let cli = Cli::try_parse_from(["psdkeep", "fix", "design", "--dry-run"]).unwrap();
        if let Commands::Fix { root, dry_run } = cli.command {
            assert_eq!(root, Some(PathBuf::from("design")));
            assert!(dry_run);
        } else {
            panic!("Expected Fix command");
        }
    }

    #[test]
    fn test_cli_parse_audit() {
        let cli = Cli::try_parse_from(["psdkeep", "audit", "--fail-fast"]).unwrap();
        if let Commands::Audit { root, fail_fast } = cli.command {
            assert_eq!(root, None);
            assert!(fail_fast);
        } else {
            panic!("Expected Audit command");
        }
    }

    #[test]
    fn test_cli_parse_test_alias() {
        let cli = Cli::try_parse_from(["psdkeep", "test", "art"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Audit { root: Some(_), fail_fast: false }
        ));
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["psdkeep", "audit", "--json", "-vv", "--color", "never"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["psdkeep"]).is_err());
    }

    #[test]
    fn test_cli_rejects_dry_run_on_audit() {
        assert!(Cli::try_parse_from(["psdkeep", "audit", "--dry-run"]).is_err());
    }
}
