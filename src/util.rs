use crate::model::{DateRange, FileStats};

pub fn files_matching<'a>(
    files: &'a [FileStats],
    path_prefix: Option<&'a str>,
) -> impl Iterator<Item = &'a FileStats> + 'a {
    files.iter().filter(move |fs| {
        if let Some(prefix) = path_prefix {
            fs.filename.starts_with(prefix)
        } else {
            true
        }
    })
}

/// Narrow a ranked report to a path prefix and to files touched within `range`.
/// Ranking order is preserved.
pub fn filter_report(
    files: &[FileStats],
    path_prefix: Option<&str>,
    range: &DateRange,
) -> Vec<FileStats> {
    files_matching(files, path_prefix)
        .filter(|fs| range.contains(&fs.last_change_time))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn entry(filename: &str, total_of_changes: u64, secs: i64) -> FileStats {
        FileStats {
            filename: filename.to_string(),
            total_of_changes,
            last_change_time: DateTime::from_timestamp(secs, 0).unwrap(),
        }
    }

    #[test]
    fn filters_by_prefix_keeping_order() {
        let files = vec![entry("src/b.rs", 5, 1), entry("docs/a.md", 4, 1), entry("src/a.rs", 2, 1)];

        let names: Vec<_> = filter_report(&files, Some("src/"), &DateRange::new())
            .into_iter()
            .map(|fs| fs.filename)
            .collect();

        assert_eq!(names, vec!["src/b.rs", "src/a.rs"]);
    }

    #[test]
    fn filters_by_last_change() {
        let files = vec![entry("old", 9, 10), entry("new", 1, 30)];
        let range = DateRange::new().with_since(DateTime::from_timestamp(20, 0).unwrap());

        assert_eq!(filter_report(&files, None, &range), vec![entry("new", 1, 30)]);
    }
}
