use crate::error::{HotfileError, Result};
use crate::model::{Change, Commit, FileStats};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Fold a chronologically ordered history (oldest first) into ranked per-file statistics.
///
/// Additions and updates bump the counter of their path, a rename moves the accumulated
/// counter to the new path and a deletion drops the path entirely. A rename whose source
/// was never seen aborts the whole computation; no partial result is returned.
pub fn compute_files_stats(commits: &[Commit]) -> Result<Vec<FileStats>> {
    let mut stats_by_file: HashMap<String, FileStats> = HashMap::new();

    for (index, commit) in commits.iter().enumerate() {
        for change in &commit.changes {
            apply_change(&mut stats_by_file, change, commit, index)?;
        }
    }

    debug!(
        "Aggregated {} commits into {} tracked files",
        commits.len(),
        stats_by_file.len()
    );

    let mut entries: Vec<_> = stats_by_file.into_values().collect();
    rank(&mut entries);
    Ok(entries)
}

fn apply_change(
    stats_by_file: &mut HashMap<String, FileStats>,
    change: &Change,
    commit: &Commit,
    index: usize,
) -> Result<()> {
    match change {
        Change::Addition { file } | Change::Update { file } => {
            stats_by_file
                .entry(file.clone())
                .or_insert_with(|| FileStats::new(file.clone(), commit.timestamp))
                .record_change(commit.timestamp);
        }
        Change::Rename { original, file } => {
            // remove first so a rename onto the same path keeps its entry
            let previous = stats_by_file.remove(original).ok_or_else(|| {
                HotfileError::UnknownRenameSource {
                    original: original.clone(),
                    target: file.clone(),
                    commit: commit.label(index),
                }
            })?;
            trace!(
                "{} -> {} carries {} changes",
                original,
                file,
                previous.total_of_changes
            );
            stats_by_file.insert(
                file.clone(),
                FileStats {
                    filename: file.clone(),
                    total_of_changes: previous.total_of_changes,
                    last_change_time: commit.timestamp,
                },
            );
        }
        Change::Deletion { file } => {
            if stats_by_file.remove(file).is_none() {
                trace!("Ignoring deletion of untracked file {}", file);
            }
        }
    }
    Ok(())
}

/// Most changed first; equal counts fall back to the filename so the order is total.
pub fn compare_by_changes(a: &FileStats, b: &FileStats) -> Ordering {
    b.total_of_changes
        .cmp(&a.total_of_changes)
        .then_with(|| a.filename.cmp(&b.filename))
}

pub fn rank(entries: &mut [FileStats]) {
    entries.sort_by(compare_by_changes);
}
