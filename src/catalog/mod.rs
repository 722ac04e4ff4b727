//! Catalog - the service a list/detail front end drives.
//!
//! Wraps a [`DocumentRepository`](crate::DocumentRepository) with the id
//! sequence, the add/edit/delete workflows and table snapshots.

mod catalog;
mod config;
mod seed;
mod sequence;

pub use catalog::{Catalog, PLACEHOLDER_AUTHOR};
pub use config::{CatalogConfig, ConfigError};
pub use seed::sample_documents;
pub use sequence::IdSequence;
