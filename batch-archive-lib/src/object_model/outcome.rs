#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Success,
    Failure(String),
    SkippedDryRun,
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
