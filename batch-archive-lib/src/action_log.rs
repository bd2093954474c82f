use crate::error::BatchArchiveError;
use crate::object_model::{Action, Outcome, RepoRef};
use crate::result::BatchArchiveResult;
use anyhow::anyhow;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const DEFAULT_LOG_PATH: &str = "gh-batch-archive.log";

/// Append-only record of every attempted action
///
/// Safe to share between workers: each record is written as one complete
/// line while the file lock is held.
pub struct ActionLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl ActionLog {
    pub fn open<P>(path: P) -> BatchArchiveResult<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                BatchArchiveError::Other(anyhow!("cannot open log {}: {e}", path.display()))
            })?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(
        &self,
        action: Action,
        repo: &RepoRef,
        outcome: &Outcome,
    ) -> BatchArchiveResult<()> {
        let line = format!(
            "[{}] {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            format_entry(action, repo, outcome)
        );
        let mut file = self
            .file
            .lock()
            .map_err(|_| BatchArchiveError::Other(anyhow!("log lock poisoned")))?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

fn format_entry(action: Action, repo: &RepoRef, outcome: &Outcome) -> String {
    let verb = action.label().to_uppercase();
    match outcome {
        Outcome::SkippedDryRun => format!("[DRY RUN] {verb}: {repo} - WOULD {verb}"),
        Outcome::Success => format!("{verb}: {repo} - SUCCESS"),
        Outcome::Failure(message) => {
            // Keep one record per line whatever the upstream error looks like
            let message = message.split_whitespace().collect::<Vec<_>>().join(" ");
            format!("{verb}: {repo} - FAILED: {message}")
        }
    }
}
