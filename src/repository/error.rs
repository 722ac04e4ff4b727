use std::fmt;

/// Failure outcomes of the `Result`-returning repository operations.
///
/// The boolean `add`/`remove` API reports the same two conditions as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A document with this id is already stored.
    DuplicateId(u32),
    /// No stored document has this id.
    NotFound(u32),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::DuplicateId(id) => {
                write!(f, "document {} is already stored", id)
            }
            RepositoryError::NotFound(id) => write!(f, "document {} not found", id),
        }
    }
}

impl std::error::Error for RepositoryError {}
