//! Documents - the indexed research document repository.
//!
//! ## Example
//!
//! ```
//! use research_db::{Document, DocumentRepository, Repository};
//!
//! let mut repo = DocumentRepository::new();
//! assert!(repo.add(&Document::new(0, "Edwin Dusty", "A Title", "Document Text")));
//! assert!(!repo.add(&Document::new(0, "Someone", "Other", "")));
//!
//! assert_eq!(repo.find_many_by_author("Edwin Dusty").len(), 1);
//! assert!(repo.remove(&Document::new(0, "", "", "")));
//! assert!(repo.find_one_by_id(0).is_none());
//! ```

mod repository;

pub use repository::{DocumentRepository, IndexStats};
