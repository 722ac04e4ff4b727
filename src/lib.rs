mod catalog;
mod document;
mod documents;
mod index;
mod repository;
mod table;

pub use catalog::{
    sample_documents, Catalog, CatalogConfig, ConfigError, IdSequence, PLACEHOLDER_AUTHOR,
};
pub use document::Document;
pub use documents::{DocumentRepository, IndexStats};
pub use index::MultiIndex;
pub use repository::{Entries, Handle, Repository, RepositoryError, Storage};
pub use table::{Column, DocumentTable, SortOrder, DEFAULT_DATE_FORMAT};
