use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// A single file-level change recorded by a commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Change {
    Addition { file: String },
    Deletion { file: String },
    Update { file: String },
    Rename { original: String, file: String },
}

impl Change {
    pub fn addition(file: impl Into<String>) -> Self {
        Change::Addition { file: non_empty(file.into()) }
    }

    pub fn deletion(file: impl Into<String>) -> Self {
        Change::Deletion { file: non_empty(file.into()) }
    }

    pub fn update(file: impl Into<String>) -> Self {
        Change::Update { file: non_empty(file.into()) }
    }

    pub fn rename(original: impl Into<String>, file: impl Into<String>) -> Self {
        Change::Rename {
            original: non_empty(original.into()),
            file: non_empty(file.into()),
        }
    }

    /// Target path of the change; for a rename this is the new name.
    pub fn file(&self) -> &str {
        match self {
            Change::Addition { file }
            | Change::Deletion { file }
            | Change::Update { file }
            | Change::Rename { file, .. } => file,
        }
    }

    /// Path before a rename, `None` for every other kind.
    pub fn original_file(&self) -> Option<&str> {
        match self {
            Change::Rename { original, .. } => Some(original),
            _ => None,
        }
    }

    pub fn is_addition(&self) -> bool {
        matches!(self, Change::Addition { .. })
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self, Change::Deletion { .. })
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Change::Update { .. })
    }

    pub fn is_rename(&self) -> bool {
        matches!(self, Change::Rename { .. })
    }
}

fn non_empty(file: String) -> String {
    debug_assert!(!file.is_empty(), "change path must not be empty");
    file
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub changes: Vec<Change>,
}

impl Commit {
    pub fn new(timestamp: DateTime<Utc>, changes: Vec<Change>) -> Self {
        Self {
            id: None,
            timestamp,
            changes,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Short label used in diagnostics: the commit id when known, otherwise its position.
    pub fn label(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("#{index}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub filename: String,
    pub total_of_changes: u64,
    pub last_change_time: DateTime<Utc>,
}

impl FileStats {
    pub fn new(filename: String, last_change_time: DateTime<Utc>) -> Self {
        Self {
            filename,
            total_of_changes: 0,
            last_change_time,
        }
    }

    pub fn record_change(&mut self, timestamp: DateTime<Utc>) {
        self.total_of_changes += 1;
        self.last_change_time = timestamp;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub since: Option<String>,
    pub until: Option<String>,
    pub path_prefix: Option<String>,
    pub total_files: usize,
    pub entries: Vec<FileStats>,
}

#[derive(Debug, Clone)]
pub struct DateRange {
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new() -> Self {
        Self { since: None, until: None }
    }

    pub fn with_since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        if let Some(since) = self.since {
            if timestamp < &since {
                return false;
            }
        }
        if let Some(until) = self.until {
            if timestamp > &until {
                return false;
            }
        }
        true
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}
