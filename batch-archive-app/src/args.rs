use batch_archive_lib::{Action, RunConfig, DEFAULT_LIMIT, DEFAULT_LOG_PATH, DEFAULT_PARALLEL};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "gh-batch-archive",
    version,
    about = "Archive or unarchive GitHub repositories in bulk using the GitHub CLI"
)]
pub struct Args {
    #[clap(
        value_name = "OWNER",
        help = "User or organization owning the repositories (default: authenticated user)"
    )]
    pub owner: Option<String>,

    #[clap(
        short = 'u',
        long = "unarchive",
        help = "Unarchive repositories instead of archiving them",
        default_value = "false"
    )]
    pub unarchive: bool,

    #[clap(
        short = 'n',
        long = "dry-run",
        help = "Show what would be done without changing anything",
        default_value = "false"
    )]
    pub dry_run: bool,

    #[clap(
        short = 'p',
        long = "pattern",
        value_name = "EXPR",
        help = "Only include repositories whose owner/name matches this regex"
    )]
    pub pattern: Option<String>,

    #[clap(
        short = 'i',
        long = "interactive",
        help = "Pick repositories interactively (fzf if installed, numbered menu otherwise)",
        default_value = "false"
    )]
    pub interactive: bool,

    #[clap(
        short = 'j',
        long = "parallel",
        value_name = "N",
        help = "Number of repositories processed concurrently",
        default_value_t = DEFAULT_PARALLEL,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub parallel: usize,

    #[clap(
        short = 'l',
        long = "log",
        value_name = "PATH",
        help = "File receiving one line per attempted repository",
        default_value = DEFAULT_LOG_PATH,
        env = "GH_BATCH_ARCHIVE_LOG"
    )]
    pub log: PathBuf,

    #[clap(
        long = "limit",
        value_name = "N",
        help = "Maximum number of repositories to list",
        default_value_t = DEFAULT_LIMIT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: usize,
}

impl Args {
    pub fn into_config(self) -> RunConfig {
        RunConfig {
            owner: self.owner,
            action: if self.unarchive {
                Action::Unarchive
            } else {
                Action::Archive
            },
            dry_run: self.dry_run,
            pattern: self.pattern,
            interactive: self.interactive,
            parallel: self.parallel,
            log_path: self.log,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = Args::try_parse_from(["gh-batch-archive"])
            .unwrap()
            .into_config();
        assert_eq!(None, config.owner);
        assert_eq!(Action::Archive, config.action);
        assert!(!config.dry_run);
        assert!(!config.interactive);
        assert_eq!(None, config.pattern);
        assert_eq!(4, config.parallel);
        assert_eq!(1000, config.limit);
    }

    #[test]
    fn all_flags() {
        let config = Args::try_parse_from([
            "gh-batch-archive",
            "acme",
            "--unarchive",
            "--dry-run",
            "--pattern",
            "^acme/old-",
            "--interactive",
            "--parallel",
            "8",
            "--log",
            "/tmp/archive.log",
            "--limit",
            "200",
        ])
        .unwrap()
        .into_config();
        assert_eq!(Some(String::from("acme")), config.owner);
        assert_eq!(Action::Unarchive, config.action);
        assert!(config.dry_run);
        assert!(config.interactive);
        assert_eq!(Some(String::from("^acme/old-")), config.pattern);
        assert_eq!(8, config.parallel);
        assert_eq!(PathBuf::from("/tmp/archive.log"), config.log_path);
        assert_eq!(200, config.limit);
    }

    #[test]
    fn zero_parallel_rejected() {
        assert!(Args::try_parse_from(["gh-batch-archive", "--parallel", "0"]).is_err());
    }
}
