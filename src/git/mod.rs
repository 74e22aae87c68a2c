mod repo;

pub use repo::{GitRepo, HistoryOptions};
