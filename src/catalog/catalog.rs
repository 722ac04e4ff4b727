use tracing::{debug, info};

use super::config::CatalogConfig;
use super::seed::sample_documents;
use super::sequence::IdSequence;
use crate::document::Document;
use crate::documents::DocumentRepository;
use crate::repository::{Repository, RepositoryError};
use crate::table::DocumentTable;

/// Author placed on a freshly drafted document.
pub const PLACEHOLDER_AUTHOR: &str = "New Author";

/// What a list/detail front end drives: a document repository plus the id
/// sequence that feeds it.
///
/// Views are rebuilt from snapshots after each change; nothing is pushed to them.
pub struct Catalog {
    documents: DocumentRepository,
    ids: IdSequence,
    config: CatalogConfig,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Self {
        let mut catalog = Self {
            documents: DocumentRepository::new(),
            ids: IdSequence::starting_at(config.first_id),
            config,
        };
        if catalog.config.seed_defaults {
            catalog.seed(sample_documents());
        }
        catalog
    }

    /// A catalog holding the eight sample documents, with ids continuing at 8.
    pub fn with_defaults() -> Self {
        Self::new(CatalogConfig::default().with_seed_defaults(true))
    }

    /// Add documents in bulk, skipping ids already present. Returns how many were added.
    pub fn seed<I>(&mut self, documents: I) -> usize
    where
        I: IntoIterator<Item = Document>,
    {
        let mut added = 0;
        for document in documents {
            if self.documents.add(&document) {
                self.ids.advance_past(document.id());
                added += 1;
            }
        }
        info!(added, total = self.documents.len(), "catalog seeded");
        added
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn repository(&self) -> &DocumentRepository {
        &self.documents
    }

    /// Id the next [`Catalog::draft`] will use, `None` once ids are exhausted.
    pub fn next_id(&self) -> Option<u32> {
        self.ids.peek()
    }

    /// A new, unsaved document with the next id and placeholder content.
    /// The id is consumed even if the draft is never inserted.
    pub fn draft(&mut self) -> Option<Document> {
        let id = self.ids.next()?;
        Some(Document::new(id, PLACEHOLDER_AUTHOR, "", ""))
    }

    /// Add a document, moving the id sequence past its id.
    pub fn insert(&mut self, document: &Document) -> Result<(), RepositoryError> {
        self.documents.try_add(document)?;
        self.ids.advance_past(document.id());
        Ok(())
    }

    /// Remove the document with this id, returning the stored copy.
    pub fn delete(&mut self, id: u32) -> Result<Document, RepositoryError> {
        self.documents
            .remove_by_id(id)
            .ok_or(RepositoryError::NotFound(id))
    }

    /// Edit a stored document: apply `change` to a copy, then remove the stored
    /// document and add the copy back.
    ///
    /// If the edited copy's id collides with another stored document, nothing is
    /// touched and `DuplicateId` is returned. On success the edited document moves
    /// to the end of the insertion order.
    pub fn edit<F>(&mut self, id: u32, change: F) -> Result<Document, RepositoryError>
    where
        F: FnOnce(&mut Document),
    {
        let mut edited = self
            .documents
            .find_one_by_id(id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))?;
        change(&mut edited);

        if edited.id() != id && self.documents.contains(edited.id()) {
            debug!(id, new_id = edited.id(), "edit rejected: duplicate id");
            return Err(RepositoryError::DuplicateId(edited.id()));
        }

        self.documents.remove_by_id(id);
        self.documents.try_add(&edited)?;

        self.ids.advance_past(edited.id());
        Ok(edited)
    }

    /// Table snapshot of every document, formatted with the configured date format.
    pub fn table(&self) -> DocumentTable {
        DocumentTable::with_date_format(self.documents.find_all(), self.config.date_format.clone())
    }
}
