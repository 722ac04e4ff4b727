mod error;
mod repository;
mod storage;

pub use error::RepositoryError;
pub use repository::Repository;
pub use storage::{Entries, Handle, Storage};
