use serde::Deserialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Fully-qualified `owner/name` repository reference
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RepoRef(String);

impl RepoRef {
    pub fn new<S>(s: S) -> Self
    where
        S: Into<String>,
    {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RepoRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepoRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Entry as emitted by `gh repo list --json nameWithOwner`
#[derive(Deserialize)]
pub(crate) struct Repo {
    #[serde(rename = "nameWithOwner")]
    pub(crate) name_with_owner: String,
}

