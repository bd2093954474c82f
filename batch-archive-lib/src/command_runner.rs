use crate::error::BatchArchiveError;
use crate::result::BatchArchiveResult;
use anyhow::anyhow;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Clone, Debug, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Trimmed stderr, or the exit code when stderr is empty
    pub fn error_message(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.code {
            Some(code) => format!("exited with status {code}"),
            None => String::from("terminated by signal"),
        }
    }
}

#[async_trait::async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<String>,
    ) -> BatchArchiveResult<CommandOutput>;
}

/// Runs real subprocesses
///
/// Stdin is closed unless input is supplied. Output is always captured, so
/// interactive programs must draw on the controlling terminal directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<String>,
    ) -> BatchArchiveResult<CommandOutput> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|e| match e.kind() {
            ErrorKind::NotFound => BatchArchiveError::DependencyMissing {
                program: program.to_string(),
            },
            _ => BatchArchiveError::Io(e),
        })?;

        if let Some(input) = stdin {
            let mut pipe = child.stdin.take().ok_or_else(|| {
                BatchArchiveError::Other(anyhow!("stdin of {program} unavailable"))
            })?;
            match pipe.write_all(input.as_bytes()).await {
                // The child may exit before consuming all of its input
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
                result => result?,
            }
            drop(pipe);
        }

        let output = child.wait_with_output().await?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
