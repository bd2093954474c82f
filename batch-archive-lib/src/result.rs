use crate::error::BatchArchiveError;

pub type BatchArchiveResult<T> = std::result::Result<T, BatchArchiveError>;
