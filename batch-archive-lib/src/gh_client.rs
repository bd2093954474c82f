use crate::command_runner::{CommandOutput, CommandRunner};
use crate::error::BatchArchiveError;
use crate::object_model::{Account, Action, Repo, RepoRef};
use crate::result::BatchArchiveResult;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub const DEFAULT_GH_PROGRAM: &str = "gh";

/// Operations the pipeline needs from the hosting service
#[async_trait::async_trait]
pub trait RepoService: Send + Sync {
    /// Fails if the service cannot be used at all
    async fn ensure_ready(&self) -> BatchArchiveResult<()>;

    async fn current_user(&self) -> BatchArchiveResult<Account>;

    async fn list_repos(
        &self,
        owner: &str,
        archived: bool,
        limit: usize,
    ) -> BatchArchiveResult<Vec<RepoRef>>;

    async fn set_archived(&self, repo: &RepoRef, action: Action) -> BatchArchiveResult<()>;
}

/// [`RepoService`] backed by the GitHub CLI
pub struct GhClient {
    program: String,
    runner: Arc<dyn CommandRunner>,
}

impl GhClient {
    pub fn new<R>(runner: R) -> Self
    where
        R: CommandRunner + 'static,
    {
        Self::with_program(DEFAULT_GH_PROGRAM, runner)
    }

    pub fn with_program<R>(program: &str, runner: R) -> Self
    where
        R: CommandRunner + 'static,
    {
        Self {
            program: String::from(program),
            runner: Arc::new(runner),
        }
    }

    async fn gh(&self, args: &[&str]) -> BatchArchiveResult<(String, CommandOutput)> {
        let args = args.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let command = format!("{} {}", self.program, args.join(" "));
        let output = self.runner.run(&self.program, &args, None).await?;
        Ok((command, output))
    }

    async fn gh_checked(&self, args: &[&str]) -> BatchArchiveResult<String> {
        let (command, output) = self.gh(args).await?;
        if !output.success {
            return Err(BatchArchiveError::Upstream {
                command,
                message: output.error_message(),
            });
        }
        Ok(output.stdout)
    }

    async fn gh_json<T>(&self, args: &[&str]) -> BatchArchiveResult<T>
    where
        T: DeserializeOwned,
    {
        let stdout = self.gh_checked(args).await?;
        serde_json::from_str::<T>(&stdout).map_err(|e| BatchArchiveError::Upstream {
            command: format!("{} {}", self.program, args.join(" ")),
            message: format!("unexpected output: {e}"),
        })
    }
}

#[async_trait::async_trait]
impl RepoService for GhClient {
    async fn ensure_ready(&self) -> BatchArchiveResult<()> {
        which::which(&self.program).map_err(|_| BatchArchiveError::DependencyMissing {
            program: self.program.clone(),
        })?;

        let (_, output) = self.gh(&["auth", "status"]).await?;
        if !output.success {
            return Err(BatchArchiveError::Authentication(output.error_message()));
        }

        Ok(())
    }

    async fn current_user(&self) -> BatchArchiveResult<Account> {
        self.gh_json::<Account>(&["api", "user"]).await
    }

    async fn list_repos(
        &self,
        owner: &str,
        archived: bool,
        limit: usize,
    ) -> BatchArchiveResult<Vec<RepoRef>> {
        let limit = limit.to_string();
        let state_flag = if archived {
            "--archived"
        } else {
            "--no-archived"
        };
        let repos = self
            .gh_json::<Vec<Repo>>(&[
                "repo",
                "list",
                owner,
                "--limit",
                limit.as_str(),
                state_flag,
                "--json",
                "nameWithOwner",
            ])
            .await?;
        Ok(repos
            .into_iter()
            .map(|r| RepoRef::new(r.name_with_owner))
            .collect())
    }

    async fn set_archived(&self, repo: &RepoRef, action: Action) -> BatchArchiveResult<()> {
        self.gh_checked(&["repo", action.subcommand(), repo.as_str(), "--yes"])
            .await?;
        Ok(())
    }
}
