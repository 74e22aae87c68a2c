pub mod cli;
pub mod error;
pub mod git;
pub mod hot;
pub mod logging;
pub mod model;
pub mod util;
