use crate::error::{HotfileError, Result};
use crate::model::{Change, Commit, DateRange};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use gix::object::tree::diff::ChangeDetached;
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Knobs for walking history.
#[derive(Debug, Clone, Default)]
pub struct HistoryOptions {
    /// Commits newer than this are left out.
    pub until: Option<DateTime<Utc>>,
    pub show_progress: bool,
}

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!("Opened repository at {}", path.display());

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn resolve_range(&self, since: Option<&str>, until: Option<&str>) -> Result<DateRange> {
        let mut range = DateRange::new();

        let since_dt = since.map(|s| self.parse_commit_or_date(s)).transpose()?;
        let until_dt = until.map(|u| self.parse_commit_or_date(u)).transpose()?;

        if let (Some(s), Some(u)) = (since_dt, until_dt) {
            if s > u {
                return Err(HotfileError::InvalidDate(format!(
                    "Invalid range: since ({}) is after until ({})",
                    s, u
                )));
            }
        }

        if let Some(s) = since_dt {
            range = range.with_since(s);
        }
        if let Some(u) = until_dt {
            range = range.with_until(u);
        }

        Ok(range)
    }

    fn parse_commit_or_date(&self, input: &str) -> Result<DateTime<Utc>> {
        if let Some(dt) = parse_date(input) {
            return Ok(dt);
        }

        if let Some(duration) = parse_natural_duration(input) {
            let target = SystemTime::now()
                .checked_sub(duration)
                .ok_or_else(|| HotfileError::InvalidDate(format!("Duration overflow for '{input}'")))?;
            return Ok(DateTime::<Utc>::from(target));
        }

        // Fallback to Git ref
        let id = self
            .repo
            .rev_parse_single(input)
            .map_err(|e| HotfileError::Parse(format!("Invalid commit or date '{input}': {e}")))?;

        let commit = id
            .object()?
            .try_into_commit()
            .map_err(|_| HotfileError::Parse(format!("Not a commit: {input}")))?;

        let secs = commit.time()?.seconds;
        timestamp_from_secs(secs)
    }

    /// The first-parent history of HEAD as lists of file changes, oldest first.
    ///
    /// Each commit, merges included, is diffed against its first parent and the root commit
    /// against the empty tree, so every diff starts from the tree the previous one produced.
    /// With `until` set the walk starts at the newest first-parent commit made at or before it.
    pub fn collect_commits(&self, options: &HistoryOptions) -> Result<Vec<Commit>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let pb = if options.show_progress {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} {pos}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Walking history...");

        let mut commits = Vec::new();
        let mut skipped = 0usize;
        let mut next = Some(head_commit.id);

        while let Some(commit_id) = next {
            let commit = self.repo.find_commit(commit_id)?;
            let timestamp = timestamp_from_secs(commit.time()?.seconds)?;
            let parent_id = commit.parent_ids().next().map(|id| id.detach());
            next = parent_id;

            if commits.is_empty() && options.until.is_some_and(|until| timestamp > until) {
                debug!("Skipping commit {commit_id} made after the until bound");
                skipped += 1;
                continue;
            }

            let changes = self.changes_against(commit_id, parent_id)?;
            commits.push(Commit::new(timestamp, changes).with_id(commit_id.to_string()));
            pb.inc(1);
        }

        pb.finish_and_clear();
        commits.reverse();

        info!(
            "Collected {} first-parent commits ({} newer than the until bound)",
            commits.len(),
            skipped
        );
        Ok(commits)
    }

    fn changes_against(&self, commit_id: ObjectId, parent_id: Option<ObjectId>) -> Result<Vec<Change>> {
        let commit_tree = self.repo.find_commit(commit_id)?.tree()?;
        let parent_tree = match parent_id {
            Some(id) => Some(self.repo.find_commit(id)?.tree()?),
            None => None,
        };

        let detached: Vec<ChangeDetached> =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&commit_tree), None)?;

        Ok(detached.into_iter().filter_map(classify).collect())
    }
}

/// Map a tree diff entry onto a [`Change`]; directory entries are dropped.
fn classify(change: ChangeDetached) -> Option<Change> {
    match change {
        ChangeDetached::Addition { location, entry_mode, .. } => {
            (!entry_mode.is_tree()).then(|| Change::addition(location.to_string()))
        }
        ChangeDetached::Deletion { location, entry_mode, .. } => {
            (!entry_mode.is_tree()).then(|| Change::deletion(location.to_string()))
        }
        ChangeDetached::Modification { location, entry_mode, .. } => {
            (!entry_mode.is_tree()).then(|| Change::update(location.to_string()))
        }
        ChangeDetached::Rewrite {
            source_location,
            location,
            entry_mode,
            copy,
            ..
        } => {
            if entry_mode.is_tree() {
                None
            } else if copy {
                Some(Change::addition(location.to_string()))
            } else {
                Some(Change::rename(source_location.to_string(), location.to_string()))
            }
        }
    }
}

fn timestamp_from_secs(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| HotfileError::InvalidDate(format!("Invalid timestamp: {secs}")))
}

fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    // YYYY-MM-DD
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| Utc.from_utc_datetime(&datetime))
}

fn parse_natural_duration(input: &str) -> Option<Duration> {
    let input = input.trim().to_lowercase();

    let units = [
        (" days ago", 86400),
        (" weeks ago", 7 * 86400),
        (" months ago", 30 * 86400),
    ];
    for (suffix, secs) in units {
        if let Some(n) = input.strip_suffix(suffix) {
            if let Ok(n) = n.trim().parse::<u64>() {
                return n.checked_mul(secs).map(Duration::from_secs);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_absolute_dates() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-03-01"), Some(expected));
        assert_eq!(parse_date("2024-03-01T00:00:00Z"), Some(expected));
        assert_eq!(parse_date("2024-03-01T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_date("yesterday-ish"), None);
    }

    #[test]
    fn parses_relative_durations() {
        assert_eq!(parse_natural_duration("3 days ago"), Some(Duration::from_secs(3 * 86400)));
        assert_eq!(parse_natural_duration("2 Weeks Ago"), Some(Duration::from_secs(14 * 86400)));
        assert_eq!(parse_natural_duration("1 months ago"), Some(Duration::from_secs(30 * 86400)));
        assert_eq!(parse_natural_duration("soon"), None);
        assert_eq!(parse_natural_duration("x days ago"), None);
    }

    #[test]
    fn oversized_durations_are_rejected() {
        assert_eq!(parse_natural_duration("999999999999999999 days ago"), None);
        assert_eq!(parse_natural_duration("18446744073709551615 weeks ago"), None);
    }
}
