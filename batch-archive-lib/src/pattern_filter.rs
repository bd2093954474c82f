use crate::object_model::RepoRef;
use log::warn;
use regex::Regex;

/// Matches repository references against an operator-supplied pattern
///
/// The pattern is compiled as a regular expression. A pattern that does not
/// compile is matched as a literal substring instead.
#[derive(Debug)]
pub enum PatternFilter {
    All,
    Regex(Regex),
    Literal(String),
}

impl PatternFilter {
    pub fn new(pattern: Option<&str>) -> Self {
        let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
            return Self::All;
        };

        match Regex::new(pattern) {
            Ok(regex) => Self::Regex(regex),
            Err(e) => {
                warn!("pattern {pattern:?} is not a valid regex ({e}), matching literally");
                Self::Literal(String::from(pattern))
            }
        }
    }

    pub fn is_match(&self, repo: &RepoRef) -> bool {
        match self {
            Self::All => true,
            Self::Regex(regex) => regex.is_match(repo.as_str()),
            Self::Literal(s) => repo.as_str().contains(s.as_str()),
        }
    }

    pub fn apply(&self, repos: &[RepoRef]) -> Vec<RepoRef> {
        repos
            .iter()
            .filter(|repo| self.is_match(repo))
            .cloned()
            .collect()
    }
}
