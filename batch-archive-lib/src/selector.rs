use crate::command_runner::CommandRunner;
use crate::error::BatchArchiveError;
use crate::object_model::RepoRef;
use crate::result::BatchArchiveResult;
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};

pub const FUZZY_FINDER_PROGRAM: &str = "fzf";

// fzf exits with 1 when nothing matched and 130 when the operator aborts
const FUZZY_FINDER_NO_MATCH: i32 = 1;
const FUZZY_FINDER_ABORTED: i32 = 130;

/// How the operator narrows the filtered list down
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Selector {
    PassThrough,
    FuzzyFinder { program: String },
    NumberedMenu,
}

impl Selector {
    /// Picks the selector once, probing `PATH` for a fuzzy finder when
    /// interactive selection is requested
    pub fn detect(interactive: bool) -> Self {
        if !interactive {
            return Self::PassThrough;
        }

        match which::which(FUZZY_FINDER_PROGRAM) {
            Ok(path) => Self::FuzzyFinder {
                program: path.to_string_lossy().into_owned(),
            },
            Err(_) => {
                debug!("{FUZZY_FINDER_PROGRAM} not found, using numbered menu");
                Self::NumberedMenu
            }
        }
    }

    pub async fn select<I, W>(
        &self,
        repos: &[RepoRef],
        runner: &dyn CommandRunner,
        input: &mut I,
        output: &mut W,
    ) -> BatchArchiveResult<Vec<RepoRef>>
    where
        I: BufRead,
        W: Write,
    {
        match self {
            Self::PassThrough => Ok(repos.to_vec()),
            Self::FuzzyFinder { program } => fuzzy_select(program, repos, runner).await,
            Self::NumberedMenu => numbered_menu(repos, input, output),
        }
    }
}

async fn fuzzy_select(
    program: &str,
    repos: &[RepoRef],
    runner: &dyn CommandRunner,
) -> BatchArchiveResult<Vec<RepoRef>> {
    let args = [
        "--multi",
        "--prompt",
        "Select repositories> ",
        "--header",
        "TAB to select, ENTER to confirm",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect::<Vec<_>>();

    let list = repos
        .iter()
        .map(|r| format!("{r}\n"))
        .collect::<String>();

    let output = runner.run(program, &args, Some(list)).await?;
    if !output.success {
        return match output.code {
            Some(FUZZY_FINDER_NO_MATCH) | Some(FUZZY_FINDER_ABORTED) => Ok(Vec::new()),
            _ => Err(BatchArchiveError::Upstream {
                command: String::from(program),
                message: output.error_message(),
            }),
        };
    }

    let mut selected = Vec::new();
    for line in output.stdout.lines().map(str::trim) {
        let Some(repo) = repos.iter().find(|r| r.as_str() == line) else {
            continue;
        };
        if !selected.contains(repo) {
            selected.push(repo.clone());
        }
    }
    Ok(selected)
}

fn numbered_menu<I, W>(
    repos: &[RepoRef],
    input: &mut I,
    output: &mut W,
) -> BatchArchiveResult<Vec<RepoRef>>
where
    I: BufRead,
    W: Write,
{
    writeln!(output, "{}", "Available repositories:".bold())?;
    for (i, repo) in repos.iter().enumerate() {
        writeln!(output, "  {:>3}) {}", i + 1, repo)?;
    }
    write!(
        output,
        "Enter numbers of repositories to select (space-separated): "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_selection(&line, repos))
}

/// Maps 1-based indices back to references, skipping anything unusable
pub fn parse_selection(line: &str, repos: &[RepoRef]) -> Vec<RepoRef> {
    let mut selected = Vec::new();
    for token in line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let Some(repo) = token
            .parse::<usize>()
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| repos.get(i))
        else {
            debug!("ignoring selection token {token:?}");
            continue;
        };
        if !selected.contains(repo) {
            selected.push(repo.clone());
        }
    }
    selected
}
