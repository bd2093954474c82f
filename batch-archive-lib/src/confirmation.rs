use crate::object_model::{Action, RepoRef};
use crate::result::BatchArchiveResult;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What is about to happen, shown before anything is changed
pub struct Summary<'a> {
    pub action: Action,
    pub dry_run: bool,
    pub owner: &'a str,
    pub repos: &'a [RepoRef],
}

impl Summary<'_> {
    pub fn mode_label(&self) -> &'static str {
        if self.dry_run {
            "DRY RUN"
        } else {
            "ACTUAL"
        }
    }

    pub fn render<W>(&self, output: &mut W) -> BatchArchiveResult<()>
    where
        W: Write,
    {
        writeln!(output)?;
        writeln!(output, "{}", "Summary".bold())?;
        writeln!(output, "  Action: {}", self.action.label().yellow())?;
        writeln!(output, "  Owner:  {}", self.owner)?;
        writeln!(output, "  Count:  {}", self.repos.len())?;
        writeln!(output, "  Mode:   {}", self.mode_label())?;
        writeln!(output)?;
        for (i, repo) in self.repos.iter().enumerate() {
            writeln!(output, "  {:>3}. {}", i + 1, repo.as_str().cyan())?;
        }
        writeln!(output)?;
        Ok(())
    }
}

/// Only `y` and `yes`, in any case, count as approval
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Shows the summary and, unless previewing, waits for approval
pub fn confirm<I, W>(
    summary: &Summary<'_>,
    input: &mut I,
    output: &mut W,
) -> BatchArchiveResult<bool>
where
    I: BufRead,
    W: Write,
{
    summary.render(output)?;
    if summary.dry_run {
        return Ok(true);
    }

    write!(
        output,
        "Proceed to {} {} repositories? [y/N] ",
        summary.action,
        summary.repos.len()
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
