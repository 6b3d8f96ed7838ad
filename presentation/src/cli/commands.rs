//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use judging_domain::QueryStatus;
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for judging_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => judging_domain::OutputFormat::Table,
            OutputFormat::Json => judging_domain::OutputFormat::Json,
        }
    }
}

/// Status filter accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    NotAssigned,
    InProgress,
    Completed,
}

impl From<StatusArg> for QueryStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::NotAssigned => QueryStatus::NotAssigned,
            StatusArg::InProgress => QueryStatus::InProgress,
            StatusArg::Completed => QueryStatus::Completed,
        }
    }
}

/// CLI arguments for sbs-judge
#[derive(Parser, Debug)]
#[command(name = "sbs-judge")]
#[command(author, version, about = "Side-by-side judging: query status and judge assignment")]
#[command(long_about = r#"
sbs-judge labels the queries of a side-by-side judging experiment and plans
bulk judge assignments.

Query status is derived from each query's assignments and the experiment's
query set selection (first matching rule wins):
  Uploaded, restricted judging
      no assignments          -> Not Assigned
      every assignment done   -> Completed
      otherwise               -> In Progress
  Uploaded, anyone may judge
      any assignment done     -> Completed
      otherwise               -> In Progress
  Ad-hoc query set            -> always Completed
  Any other selection
      assignments, all done   -> Completed
      some done               -> In Progress
      nothing done            -> Not Assigned

Configuration files are loaded from (in priority order):
1. SBS_JUDGE_* environment variables
2. --config <path>         Explicit config file
3. ./sbs-judge.toml        Project-level config
4. ~/.config/sbs-judge/config.toml   Global config

Example:
  sbs-judge queries --status in-progress
  sbs-judge conflicts -q q-101 -q q-102
  sbs-judge assign -q q-101 -q q-104 -j u-002 -j u-003 --dry-run
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Experiment snapshot to load (JSON)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub experiment: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List queries with their derived status
    Queries {
        /// Only show queries in this status
        #[arg(short, long, value_enum)]
        status: Option<StatusArg>,

        /// Only show queries of this task type (case-insensitive)
        #[arg(short, long, value_name = "TYPE")]
        task_type: Option<String>,
    },

    /// Show per-status counts for the experiment
    Summary,

    /// Show which judges already hold the selected queries
    Conflicts {
        /// Selected query IDs (repeatable)
        #[arg(short, long = "query", value_name = "ID", required = true)]
        queries: Vec<String>,
    },

    /// Assign judges to the selected queries, skipping duplicates
    Assign {
        /// Selected query IDs (repeatable)
        #[arg(short, long = "query", value_name = "ID", required = true)]
        queries: Vec<String>,

        /// Judge IDs to assign (repeatable)
        #[arg(short, long = "judge", value_name = "ID", required = true)]
        judges: Vec<String>,

        /// Report the impact without applying it
        #[arg(long)]
        dry_run: bool,
    },

    /// Check the experiment snapshot for inconsistencies
    Validate,
}

impl Default for Command {
    fn default() -> Self {
        Self::Queries {
            status: None,
            task_type: None,
        }
    }
}
