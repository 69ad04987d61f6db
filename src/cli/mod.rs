//! Command-line interface for `iss`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use issues_core::{SortOrder, Status, StatusFilter};

use crate::config::CliOverrides;
use crate::logging;

/// `iss` - local-first issue tracker over a flat issue file.
#[derive(Parser, Debug)]
#[command(name = "iss")]
#[command(
    author,
    version,
    about = "Local-first issue tracker over a flat issue file",
    long_about = None,
    after_help = "Edits are kept in a local slot; the source file is never rewritten."
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Flat issue file to load
    #[arg(long, global = true, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Directory holding the persisted collection
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Append diagnostics to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            source: self.source.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an issues workspace
    Init(InitArgs),

    /// List issues through a view (search, status, sort)
    List(ListArgs),

    /// Show issue details
    Show(ShowArgs),

    /// Create a new issue
    Create(CreateArgs),

    /// Update an existing issue
    Update(UpdateArgs),

    /// Report how each line of the issue file was parsed
    Parse(ParseArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Case-insensitive title search
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Status filter: all, open, in_progress, closed
    #[arg(long)]
    pub status: Option<StatusFilter>,

    /// Sort by last update: asc or desc
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Starting location, e.g. "/?q=login&sort=asc"
    #[arg(long, default_value = "/")]
    pub location: String,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Issue ID
    pub id: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Issue title
    pub title: String,

    /// Issue description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Issue ID
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New status: open, in_progress, closed
    #[arg(long)]
    pub status: Option<Status>,

    /// New description
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ParseArgs {
    /// File to parse (defaults to the configured source)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let overrides = cli.overrides();
    let json = cli.json;

    match cli.command {
        Some(Commands::Init(args)) => commands::init::execute(&args, &overrides)?,
        Some(Commands::List(args)) => commands::list::execute(&args, &overrides, json)?,
        Some(Commands::Show(args)) => commands::show::execute(&args, &overrides, json)?,
        Some(Commands::Create(args)) => commands::create::execute(&args, &overrides, json)?,
        Some(Commands::Update(args)) => commands::update::execute(&args, &overrides, json)?,
        Some(Commands::Parse(args)) => commands::parse::execute(&args, &overrides, json)?,
        Some(Commands::Completions(args)) => commands::completions::execute(&args),
        Some(Commands::Version) => commands::version::execute(json)?,
        None => println!("iss - local-first issue tracker. Use --help for usage."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_flags_parse_into_view_types() {
        let cli = Cli::try_parse_from([
            "iss", "list", "--status", "in_progress", "--sort", "asc", "--search", "login",
        ])
        .unwrap();
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.status, Some(StatusFilter::Only(Status::InProgress)));
        assert_eq!(args.sort, Some(SortOrder::Asc));
        assert_eq!(args.search.as_deref(), Some("login"));
        assert_eq!(args.location, "/");
    }

    #[test]
    fn invalid_sort_rejected() {
        assert!(Cli::try_parse_from(["iss", "list", "--sort", "sideways"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["iss", "show", "3", "--json", "--source", "x.dat"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.overrides().source, Some(PathBuf::from("x.dat")));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn log_file_flag_is_global() {
        let cli = Cli::try_parse_from(["iss", "list", "--log-file", "iss.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("iss.log")));
    }
}
