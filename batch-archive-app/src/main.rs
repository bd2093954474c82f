mod args;

use crate::args::Args;
use anyhow::Result;
use batch_archive_lib::{
    run, BatchArchiveError, GhClient, LoggingRunner, ProcessRunner, RunOutcome, Selector,
};
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::{info, Level};
use std::io::{stdin, stdout};
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Args::parse().into_config();

    let service = Arc::new(GhClient::new(LoggingRunner::new(
        ProcessRunner::new(),
        Level::Debug,
    )));
    let runner = LoggingRunner::new(ProcessRunner::new(), Level::Debug);
    let selector = Selector::detect(config.interactive);
    info!("using selector {selector:?}");

    let mut input = stdin().lock();
    let mut output = stdout();

    match run(&config, service, &selector, &runner, &mut input, &mut output).await {
        Ok(RunOutcome::Completed(report)) => {
            info!(
                "{} succeeded, {} failed, {} previewed",
                report.succeeded(),
                report.failed(),
                report.skipped()
            );
            Ok(ExitCode::SUCCESS)
        }
        Ok(outcome) => {
            info!("stopped early: {outcome:?}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            match e {
                BatchArchiveError::DependencyMissing { .. } => {
                    eprintln!("Install the GitHub CLI from https://cli.github.com/");
                }
                BatchArchiveError::Authentication(_) => {
                    eprintln!("Run `gh auth login` first");
                }
                _ => {}
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
