use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    Archive,
    Unarchive,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Unarchive => "unarchive",
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Archive => "Archived",
            Self::Unarchive => "Unarchived",
        }
    }

    /// `gh repo` subcommand performing this action
    pub fn subcommand(&self) -> &'static str {
        self.label()
    }

    /// Whether repositories eligible for this action are currently archived
    pub fn source_archived(&self) -> bool {
        matches!(self, Self::Unarchive)
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}
