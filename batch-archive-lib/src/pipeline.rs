use crate::action_log::{ActionLog, DEFAULT_LOG_PATH};
use crate::command_runner::CommandRunner;
use crate::confirmation::{confirm, Summary};
use crate::executor::{execute, ExecutionPlan, ExecutionReport, DEFAULT_PARALLEL};
use crate::gh_client::RepoService;
use crate::object_model::Action;
use crate::pattern_filter::PatternFilter;
use crate::result::BatchArchiveResult;
use crate::selector::Selector;
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_LIMIT: usize = 1000;

/// Settings for one invocation, fixed before anything runs
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Defaults to the authenticated user
    pub owner: Option<String>,
    pub action: Action,
    pub dry_run: bool,
    pub pattern: Option<String>,
    pub interactive: bool,
    pub parallel: usize,
    pub log_path: PathBuf,
    pub limit: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            owner: None,
            action: Action::Archive,
            dry_run: false,
            pattern: None,
            interactive: false,
            parallel: DEFAULT_PARALLEL,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// How a run ended; none of these are errors
#[derive(Debug)]
pub enum RunOutcome {
    NoRepositories,
    NoMatches,
    NothingSelected,
    Cancelled,
    Completed(ExecutionReport),
}

/// Lists, filters, selects, confirms and then executes
pub async fn run<I, W>(
    config: &RunConfig,
    service: Arc<dyn RepoService>,
    selector: &Selector,
    runner: &dyn CommandRunner,
    input: &mut I,
    output: &mut W,
) -> BatchArchiveResult<RunOutcome>
where
    I: BufRead,
    W: Write,
{
    service.ensure_ready().await?;

    let owner = match &config.owner {
        Some(owner) => owner.clone(),
        None => service.current_user().await?.login,
    };

    writeln!(
        output,
        "Fetching repositories for {}...",
        owner.as_str().bold()
    )?;
    let all = service
        .list_repos(&owner, config.action.source_archived(), config.limit)
        .await?;
    info!("listed {} repositories for {owner}", all.len());
    if all.is_empty() {
        writeln!(
            output,
            "{}",
            format!("No repositories to {} for {owner}.", config.action)
                .as_str()
                .yellow()
        )?;
        return Ok(RunOutcome::NoRepositories);
    }

    let filtered = PatternFilter::new(config.pattern.as_deref()).apply(&all);
    info!("{} repositories after filtering", filtered.len());
    if filtered.is_empty() {
        writeln!(
            output,
            "{}",
            format!(
                "No repositories match pattern {:?}.",
                config.pattern.as_deref().unwrap_or_default()
            )
            .as_str()
            .yellow()
        )?;
        return Ok(RunOutcome::NoMatches);
    }

    let selected = selector.select(&filtered, runner, input, output).await?;
    if selected.is_empty() {
        writeln!(output, "{}", "No repositories selected.".yellow())?;
        return Ok(RunOutcome::NothingSelected);
    }

    let summary = Summary {
        action: config.action,
        dry_run: config.dry_run,
        owner: &owner,
        repos: &selected,
    };
    if !confirm(&summary, input, output)? {
        writeln!(output, "{}", "Cancelled. No changes made.".yellow())?;
        return Ok(RunOutcome::Cancelled);
    }
    output.flush()?;

    let log = Arc::new(ActionLog::open(&config.log_path)?);
    let plan = ExecutionPlan {
        action: config.action,
        dry_run: config.dry_run,
        parallel: config.parallel,
    };
    let report = execute(plan, selected, service, log.clone()).await?;

    let done = config.action.past_tense().to_lowercase();
    let result_line = if config.dry_run {
        format!(
            "Dry run complete: {} repositories would be {done}.",
            report.skipped()
        )
        .as_str()
        .green()
    } else if report.failed() == 0 {
        format!("Done: {} {done}.", report.succeeded())
            .as_str()
            .green()
    } else {
        format!(
            "Done: {} {done}, {} failed.",
            report.succeeded(),
            report.failed()
        )
        .as_str()
        .red()
    };
    writeln!(output)?;
    writeln!(output, "{result_line}")?;
    writeln!(output, "Log written to {}", log.path().display())?;

    Ok(RunOutcome::Completed(report))
}
