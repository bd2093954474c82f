use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchArchiveError {
    #[error("required program `{program}` not found on PATH")]
    DependencyMissing { program: String },

    #[error("not authenticated with GitHub: {0}")]
    Authentication(String),

    #[error("`{command}` failed: {message}")]
    Upstream { command: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
