use super::{compute_files_stats, output_json, output_ndjson, output_table};
use crate::cli::{CommonArgs, ReportArgs};
use crate::git::{GitRepo, HistoryOptions};
use crate::util::filter_report;
use anyhow::Context;
use log::info;

pub fn exec(common: CommonArgs, report: ReportArgs, quiet: bool) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;

    let range = repo
        .resolve_range(common.since.as_deref(), common.until.as_deref())
        .context("Failed to resolve date range")?;

    // Keep the spinner off stdout-bound machine output
    let options = HistoryOptions {
        until: range.until,
        show_progress: !quiet && !report.is_machine_readable(),
    };

    let commits = repo
        .collect_commits(&options)
        .context("Failed to collect commits from repository")?;

    let ranked = compute_files_stats(&commits).context("Failed to compute file statistics")?;

    let mut files = filter_report(&ranked, report.path.as_deref(), &range);
    let total_files = files.len();
    if let Some(limit) = report.limit {
        files.truncate(limit);
    }
    info!("Reporting {} of {} files", files.len(), total_files);

    if report.json {
        output_json(&files, total_files, &repo, &common, report.path.as_deref())?;
    } else if report.ndjson {
        output_ndjson(&files)?;
    } else {
        output_table(&files, total_files)?;
    }

    Ok(())
}
