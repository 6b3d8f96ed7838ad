//! CLI entrypoint for sbs-judge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use judging_application::{
    AuditLogger, BulkAssignInput, BulkAssignUseCase, LabelQueriesUseCase,
    LoadExperimentUseCase, LoadedExperiment, PlanAssignmentUseCase,
};
use judging_domain::{JudgeId, QueryFilter, QueryId};
use judging_infrastructure::{ConfigLoader, FileConfig, JsonlAuditLogger, experiment_source};
use judging_presentation::{Cli, Command, ConsoleFormatter, JsonFormatter, OutputFormatter};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_file = cli.log_file.clone().or_else(|| config.logging.file());
    // Held until exit so buffered log lines are flushed
    let _log_guard = init_tracing(cli.verbose, log_file.as_deref())?;

    info!("Starting sbs-judge");

    for issue in config.validate() {
        warn!("{}", issue);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let source = experiment_source(
        cli.experiment.clone().or_else(|| config.experiment.data_path()),
        config.experiment.use_sample_fallback,
    );
    info!("Experiment source: {}", source.describe());

    let loaded = LoadExperimentUseCase::new(source)
        .execute()
        .await
        .context("Failed to load experiment")?;

    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter: Box<dyn OutputFormatter> = match format {
        judging_domain::OutputFormat::Table => Box::new(ConsoleFormatter),
        judging_domain::OutputFormat::Json => Box::new(JsonFormatter),
    };

    let LoadedExperiment {
        mut experiment,
        issues,
    } = loaded;

    match cli.command.clone().unwrap_or_default() {
        Command::Queries { status, task_type } => {
            let mut filter = QueryFilter::default();
            if let Some(status) = status {
                filter = filter.with_status(status.into());
            }
            if let Some(task_type) = task_type {
                filter = filter.with_task_type(task_type);
            }
            let output = LabelQueriesUseCase::new().execute(&experiment, &filter);
            print!("{}", formatter.format_queries(&output));
        }
        Command::Summary => {
            let output = LabelQueriesUseCase::new().execute(&experiment, &QueryFilter::default());
            print!("{}", formatter.format_summary(&output));
        }
        Command::Conflicts { queries } => {
            let plan = PlanAssignmentUseCase::new().execute(&experiment, &query_ids(&queries))?;
            print!("{}", formatter.format_plan(&plan));
        }
        Command::Assign {
            queries,
            judges,
            dry_run,
        } => {
            let mut input = BulkAssignInput::new(
                query_ids(&queries),
                judges.iter().map(JudgeId::new).collect(),
            );
            if dry_run {
                input = input.dry_run();
            }

            let mut use_case = BulkAssignUseCase::new();
            if let Some(audit) = audit_logger(&config) {
                use_case = use_case.with_audit_logger(audit);
            }

            let result = use_case.execute(&mut experiment, input)?;
            print!("{}", formatter.format_assign(&result, &experiment));
        }
        Command::Validate => {
            print!("{}", formatter.format_issues(&issues));
            let errors = issues.iter().filter(|issue| issue.is_error()).count();
            if errors > 0 {
                bail!("experiment '{}' has {} validation errors", experiment.id, errors);
            }
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level; `RUST_LOG` takes precedence
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn audit_logger(config: &FileConfig) -> Option<Arc<dyn AuditLogger>> {
    let path = config.audit.log_path()?;
    let logger = JsonlAuditLogger::open(&path)?;
    info!("Audit log: {}", logger.path().display());
    Some(Arc::new(logger))
}

fn query_ids(raw: &[String]) -> Vec<QueryId> {
    raw.iter().map(QueryId::new).collect()
}
