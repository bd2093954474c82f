use crate::error::BatchArchiveError;
use crate::gh_client::RepoService;
use crate::object_model::{Account, Action, RepoRef};
use crate::result::BatchArchiveResult;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub(crate) fn repos(names: &[&str]) -> Vec<RepoRef> {
    names.iter().map(|s| RepoRef::from(*s)).collect()
}

/// In-memory hosting service recording every call made against it
pub(crate) struct FakeService {
    login: String,
    listed: Vec<RepoRef>,
    failing: Vec<RepoRef>,
    ready_error: Mutex<Option<BatchArchiveError>>,
    delay: Option<Duration>,
    listings: Mutex<Vec<(String, bool, usize)>>,
    mutations: Mutex<Vec<(RepoRef, Action)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeService {
    pub(crate) fn new(listed: &[&str]) -> Self {
        Self {
            login: String::from("octocat"),
            listed: repos(listed),
            failing: Vec::new(),
            ready_error: Mutex::new(None),
            delay: None,
            listings: Mutex::new(Vec::new()),
            mutations: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(mut self, names: &[&str]) -> Self {
        self.failing = repos(names);
        self
    }

    pub(crate) fn not_ready(self, e: BatchArchiveError) -> Self {
        *self.ready_error.lock().unwrap() = Some(e);
        self
    }

    pub(crate) fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay = Some(Duration::from_millis(ms));
        self
    }

    pub(crate) fn listings(&self) -> Vec<(String, bool, usize)> {
        self.listings.lock().unwrap().clone()
    }

    pub(crate) fn mutations(&self) -> Vec<(RepoRef, Action)> {
        self.mutations.lock().unwrap().clone()
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RepoService for FakeService {
    async fn ensure_ready(&self) -> BatchArchiveResult<()> {
        match self.ready_error.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn current_user(&self) -> BatchArchiveResult<Account> {
        Ok(Account {
            login: self.login.clone(),
        })
    }

    async fn list_repos(
        &self,
        owner: &str,
        archived: bool,
        limit: usize,
    ) -> BatchArchiveResult<Vec<RepoRef>> {
        self.listings
            .lock()
            .unwrap()
            .push((String::from(owner), archived, limit));
        Ok(self.listed.iter().take(limit).cloned().collect())
    }

    async fn set_archived(&self, repo: &RepoRef, action: Action) -> BatchArchiveResult<()> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.mutations.lock().unwrap().push((repo.clone(), action));
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.contains(repo) {
            return Err(BatchArchiveError::Upstream {
                command: format!("gh repo {} {repo} --yes", action.subcommand()),
                message: String::from("HTTP 403: Must have admin rights to Repository."),
            });
        }
        Ok(())
    }
}
