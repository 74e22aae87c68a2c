use thiserror::Error;

pub type Result<T> = std::result::Result<T, HotfileError>;

#[derive(Error, Debug)]
pub enum HotfileError {
    #[error("Rename source '{original}' is not tracked (renamed to '{target}' in commit {commit})")]
    UnknownRenameSource {
        original: String,
        target: String,
        commit: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Diff tree to tree error: {0}")]
    DiffTreeToTree(#[from] Box<gix::repository::diff_tree_to_tree::Error>),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
}

// gix errors are boxed; convert from the unboxed forms returned by `?`
impl From<gix::object::find::existing::Error> for HotfileError {
    fn from(err: gix::object::find::existing::Error) -> Self {
        HotfileError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for HotfileError {
    fn from(err: gix::object::commit::Error) -> Self {
        HotfileError::Commit(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for HotfileError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        HotfileError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for HotfileError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        HotfileError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for HotfileError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        HotfileError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for HotfileError {
    fn from(err: gix::objs::decode::Error) -> Self {
        HotfileError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::repository::diff_tree_to_tree::Error> for HotfileError {
    fn from(err: gix::repository::diff_tree_to_tree::Error) -> Self {
        HotfileError::DiffTreeToTree(Box::new(err))
    }
}

impl From<gix::discover::Error> for HotfileError {
    fn from(err: gix::discover::Error) -> Self {
        HotfileError::GitDiscover(Box::new(err))
    }
}
