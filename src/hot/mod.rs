pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{compare_by_changes, compute_files_stats, rank};
pub use exec::exec;
pub use output::{output_json, output_ndjson, output_table};
