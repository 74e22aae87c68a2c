use crate::cli::CommonArgs;
use crate::git::GitRepo;
use crate::model::{FileStats, HotOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{Local, Utc};
use console::style;

pub fn output_json(
    files: &[FileStats],
    total_files: usize,
    repo: &GitRepo,
    common: &CommonArgs,
    path_prefix: Option<&str>,
) -> Result<()> {
    let output = HotOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        since: common.since.clone(),
        until: common.until.clone(),
        path_prefix: path_prefix.map(str::to_string),
        total_files,
        entries: files.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(files: &[FileStats]) -> Result<()> {
    for entry in files {
        println!("{}", serde_json::to_string(entry)?);
    }
    Ok(())
}

pub fn output_table(files: &[FileStats], total_files: usize) -> Result<()> {
    if files.is_empty() {
        println!("No files to display");
        return Ok(());
    }

    let width = files
        .iter()
        .map(|e| e.filename.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(4, 80);

    println!(
        "{:<width$} {:>8}  {}",
        style("File").bold(),
        style("Changes").bold(),
        style("Last change").bold(),
    );
    println!("{}", "─".repeat(width + 36));
    for e in files {
        println!(
            "{:<width$} {:>8}  {}",
            e.filename,
            e.total_of_changes,
            e.last_change_time
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S %z"),
        );
    }
    if total_files > files.len() {
        println!("\n... and {} more files", total_files - files.len());
    }
    Ok(())
}
