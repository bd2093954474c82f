mod action_log;
mod command_runner;
mod confirmation;
mod error;
mod executor;
mod gh_client;
mod logging_runner;
mod object_model;
mod pattern_filter;
mod pipeline;
mod result;
mod selector;

#[cfg(test)]
mod testutil;

pub use self::action_log::{ActionLog, DEFAULT_LOG_PATH};
pub use self::command_runner::{CommandOutput, CommandRunner, ProcessRunner};
pub use self::confirmation::{confirm, is_affirmative, Summary};
pub use self::error::BatchArchiveError;
pub use self::executor::{execute, ExecutionPlan, ExecutionReport, DEFAULT_PARALLEL};
pub use self::gh_client::{GhClient, RepoService, DEFAULT_GH_PROGRAM};
pub use self::logging_runner::LoggingRunner;
pub use self::object_model::{Account, Action, Outcome, RepoRef};
pub use self::pattern_filter::PatternFilter;
pub use self::pipeline::{run, RunConfig, RunOutcome, DEFAULT_LIMIT};
pub use self::result::BatchArchiveResult;
pub use self::selector::{parse_selection, Selector, FUZZY_FINDER_PROGRAM};
