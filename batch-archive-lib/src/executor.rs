use crate::action_log::ActionLog;
use crate::error::BatchArchiveError;
use crate::gh_client::RepoService;
use crate::object_model::{Action, Outcome, RepoRef};
use crate::result::BatchArchiveResult;
use anyhow::anyhow;
use colored::Colorize;
use futures_util::future::join_all;
use log::{debug, error};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

pub const DEFAULT_PARALLEL: usize = 4;

/// Read-only settings shared by every worker
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExecutionPlan {
    pub action: Action,
    pub dry_run: bool,
    pub parallel: usize,
}

#[derive(Debug, Default)]
pub struct ExecutionReport {
    /// In completion order
    pub outcomes: Vec<(RepoRef, Outcome)>,
}

impl ExecutionReport {
    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Success))
    }

    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failure)
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::SkippedDryRun))
    }

    fn count<F>(&self, f: F) -> usize
    where
        F: Fn(&Outcome) -> bool,
    {
        self.outcomes.iter().filter(|(_, o)| f(o)).count()
    }
}

/// Attempts `plan.action` on every repository exactly once using
/// `plan.parallel` workers
///
/// A failure on one repository is recorded and does not stop the others.
pub async fn execute(
    plan: ExecutionPlan,
    repos: Vec<RepoRef>,
    service: Arc<dyn RepoService>,
    log: Arc<ActionLog>,
) -> BatchArchiveResult<ExecutionReport> {
    let worker_count = plan.parallel.max(1);
    let (tx, rx) = mpsc::channel::<RepoRef>(worker_count);
    let rx = Arc::new(Mutex::new(rx));

    let workers = (0..worker_count)
        .map(|id| {
            let rx = rx.clone();
            let service = service.clone();
            let log = log.clone();
            tokio::spawn(async move {
                let mut done = Vec::new();
                loop {
                    let next = rx.lock().await.recv().await;
                    let Some(repo) = next else {
                        break;
                    };
                    debug!("worker {id} took {repo}");
                    let outcome = process(plan, &repo, service.as_ref(), &log).await;
                    done.push((repo, outcome));
                }
                done
            })
        })
        .collect::<Vec<_>>();

    for repo in repos {
        if tx.send(repo).await.is_err() {
            break;
        }
    }
    drop(tx);

    let mut report = ExecutionReport::default();
    for result in join_all(workers).await {
        let done = result.map_err(|e| BatchArchiveError::Other(anyhow!("worker failed: {e}")))?;
        report.outcomes.extend(done);
    }
    Ok(report)
}

async fn process(
    plan: ExecutionPlan,
    repo: &RepoRef,
    service: &dyn RepoService,
    log: &ActionLog,
) -> Outcome {
    let outcome = if plan.dry_run {
        println!("{} Would {} {}", "[DRY RUN]".yellow(), plan.action, repo);
        Outcome::SkippedDryRun
    } else {
        match service.set_archived(repo, plan.action).await {
            Ok(()) => {
                println!("{} {} {}", "✓".green(), plan.action.past_tense(), repo);
                Outcome::Success
            }
            Err(e) => {
                println!("{} Failed to {} {}: {}", "✗".red(), plan.action, repo, e);
                Outcome::Failure(e.to_string())
            }
        }
    };

    if let Err(e) = log.record(plan.action, repo, &outcome) {
        error!("could not write log record for {repo} to {}: {e}", log.path().display());
    }

    outcome
}
