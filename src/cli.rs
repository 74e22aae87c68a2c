use anyhow::Result;
use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hotfile")]
#[command(about = "Rank the files of a git repository by how often they change")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(flatten)]
    pub report: ReportArgs,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (repeatable)")]
    pub verbose: u8,

    #[arg(short, long, help = "Only log errors, overrides -v")]
    pub quiet: bool,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Only report files last changed at or after this commit or date (RFC3339, YYYY-MM-DD, or natural language)")]
    pub since: Option<String>,

    #[arg(long, help = "Ignore commits made after this commit or date (RFC3339, YYYY-MM-DD, or natural language)")]
    pub until: Option<String>,
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    #[arg(long, conflicts_with = "ndjson", help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,

    #[arg(long, short = 'n', help = "Show at most this many files")]
    pub limit: Option<usize>,

    #[arg(help = "Path prefix to analyze")]
    pub path: Option<String>,
}

impl ReportArgs {
    pub fn is_machine_readable(&self) -> bool {
        self.json || self.ndjson
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.verbose, self.quiet)?;
        crate::hot::exec(self.common, self.report, self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_a_valid_invocation() {
        let cli = Cli::try_parse_from(["hotfile"]).unwrap();
        assert!(cli.common.repo.is_none());
        assert!(cli.common.until.is_none());
        assert!(!cli.report.is_machine_readable());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_report_options() {
        let cli = Cli::try_parse_from([
            "hotfile", "-vv", "--json", "-n", "5", "--since", "2024-01-01", "src/",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.report.json);
        assert_eq!(cli.report.limit, Some(5));
        assert_eq!(cli.report.path.as_deref(), Some("src/"));
        assert_eq!(cli.common.since.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn json_and_ndjson_conflict() {
        assert!(Cli::try_parse_from(["hotfile", "--json", "--ndjson"]).is_err());
    }
}
