use crate::command_runner::{CommandOutput, CommandRunner};
use crate::result::BatchArchiveResult;
use log::{log, Level};

pub struct LoggingRunner<R> {
    inner: R,
    level: Level,
}

impl<R> LoggingRunner<R> {
    pub fn new(inner: R, level: Level) -> Self {
        Self { inner, level }
    }
}

#[async_trait::async_trait]
impl<R> CommandRunner for LoggingRunner<R>
where
    R: CommandRunner,
{
    async fn run(
        &self,
        program: &str,
        args: &[String],
        stdin: Option<String>,
    ) -> BatchArchiveResult<CommandOutput> {
        log!(self.level, "begin command {} {}", program, args.join(" "));
        let result = self.inner.run(program, args, stdin).await;
        match result.as_ref() {
            Ok(output) => {
                log!(
                    self.level,
                    "command exited {} ({:?})",
                    program,
                    output.code
                );
            }
            Err(e) => {
                log!(self.level, "command failed {} {:?}", program, e);
            }
        }
        result
    }
}
