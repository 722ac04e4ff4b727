use std::collections::BTreeMap;

use tracing::debug;

use crate::document::Document;
use crate::index::MultiIndex;
use crate::repository::{Handle, Repository, RepositoryError, Storage};

/// Entry counts of the canonical store and each index.
///
/// For a consistent repository `ids == documents`, `titles == documents`
/// and `authors` equals the sum of every stored document's author count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub documents: usize,
    pub ids: usize,
    pub authors: usize,
    pub titles: usize,
}

/// In-memory repository of [`Document`]s with id, author and title indexes.
///
/// The repository owns copies of everything added. Indexes hold [`Handle`]s into
/// the canonical storage and are updated in the same call as the storage, so
/// no caller ever observes them out of step.
///
/// References returned by the `find_*` methods borrow the repository and are
/// therefore valid until the next mutating call. Edits go through remove + add.
#[derive(Default)]
pub struct DocumentRepository {
    storage: Storage<Document>,
    by_id: BTreeMap<u32, Handle>,
    by_author: MultiIndex<String>,
    by_title: MultiIndex<String>,
}

impl DocumentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a document with this id is stored.
    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// The stored document with this id, if any.
    pub fn find_one_by_id(&self, id: u32) -> Option<&Document> {
        self.by_id.get(&id).and_then(|h| self.storage.get(*h))
    }

    /// Independent copies of every stored document, in insertion order.
    pub fn find_all(&self) -> Vec<Document> {
        self.storage.iter().cloned().collect()
    }

    /// Documents listing `author` among their authors (exact, case-sensitive).
    ///
    /// A document naming the same author twice is returned twice.
    pub fn find_many_by_author(&self, author: &str) -> Vec<&Document> {
        self.resolve(self.by_author.get(author))
    }

    /// Documents whose title equals `title` exactly.
    pub fn find_many_by_title(&self, title: &str) -> Vec<&Document> {
        self.resolve(self.by_title.get(title))
    }

    /// Distinct author names currently indexed, ascending.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.by_author.keys().map(String::as_str)
    }

    /// Distinct titles currently indexed, ascending.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.by_title.keys().map(String::as_str)
    }

    /// Like [`Repository::add`], reporting a duplicate id as an error.
    pub fn try_add(&mut self, document: &Document) -> Result<(), RepositoryError> {
        if self.add(document) {
            Ok(())
        } else {
            Err(RepositoryError::DuplicateId(document.id()))
        }
    }

    /// Like [`Repository::remove`], reporting a missing id as an error.
    pub fn try_remove(&mut self, document: &Document) -> Result<(), RepositoryError> {
        self.remove_by_id(document.id())
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(document.id()))
    }

    /// Remove the document with this id, handing back the stored copy.
    pub fn remove_by_id(&mut self, id: u32) -> Option<Document> {
        let Some(handle) = self.by_id.remove(&id) else {
            debug!(id, "remove skipped: no such document");
            return None;
        };

        // Index keys come from the stored copy; the caller's copy may have been edited since.
        if let Some(stored) = self.storage.get(handle) {
            for author in stored.authors() {
                self.by_author.remove(author.as_str(), handle);
            }
            self.by_title.remove(stored.title(), handle);
        }

        let removed = self.storage.remove(handle);
        debug!(id, remaining = self.storage.len(), "document removed");
        removed
    }

    /// Drop every document and index entry.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.by_id.clear();
        self.by_author.clear();
        self.by_title.clear();
    }

    /// Entry counts of the store and each index.
    pub fn index_stats(&self) -> IndexStats {
        IndexStats {
            documents: self.storage.len(),
            ids: self.by_id.len(),
            authors: self.by_author.entries(),
            titles: self.by_title.entries(),
        }
    }

    fn resolve(&self, handles: &[Handle]) -> Vec<&Document> {
        handles
            .iter()
            .filter_map(|h| self.storage.get(*h))
            .collect()
    }
}

impl Repository for DocumentRepository {
    type Item = Document;

    /// Store a copy of `document` and index it. Rejects an id that is already stored,
    /// leaving every structure untouched. Field contents are not validated.
    fn add(&mut self, document: &Document) -> bool {
        if self.by_id.contains_key(&document.id()) {
            debug!(id = document.id(), "add rejected: duplicate id");
            return false;
        }

        let handle = self.storage.insert(document.clone());
        self.by_id.insert(document.id(), handle);
        self.by_title.insert(document.title().to_string(), handle);
        for author in document.authors() {
            self.by_author.insert(author.clone(), handle);
        }

        debug!(
            id = document.id(),
            authors = document.authors().len(),
            "document added"
        );
        true
    }

    /// Remove the stored document whose id equals `document.id()`.
    /// Every other field of `document` is ignored.
    fn remove(&mut self, document: &Document) -> bool {
        self.remove_by_id(document.id()).is_some()
    }

    fn storage(&self) -> &Storage<Document> {
        &self.storage
    }
}

impl<'a> IntoIterator for &'a DocumentRepository {
    type Item = &'a Document;
    type IntoIter = crate::repository::Entries<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

/// Adds each document in turn; later documents with an already-stored id are skipped.
impl Extend<Document> for DocumentRepository {
    fn extend<I: IntoIterator<Item = Document>>(&mut self, iter: I) {
        for document in iter {
            self.add(&document);
        }
    }
}

impl FromIterator<Document> for DocumentRepository {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut repo = Self::new();
        repo.extend(iter);
        repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: u32, author: &str, title: &str) -> Document {
        Document::new(id, author, title, "c")
    }

    fn assert_consistent(repo: &DocumentRepository) {
        let stats = repo.index_stats();
        let author_entries: usize = repo.iter().map(|d| d.authors().len()).sum();
        assert_eq!(stats.ids, stats.documents);
        assert_eq!(stats.titles, stats.documents);
        assert_eq!(stats.authors, author_entries);
    }

    #[test]
    fn new() {
        let repo = DocumentRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.index_stats(), IndexStats::default());
    }

    #[test]
    fn add_stores_a_copy() {
        let mut repo = DocumentRepository::new();
        let mut original = doc(0, "a", "b");
        assert!(repo.add(&original));

        original.set_title("changed");
        original.authors_mut().push("x".into());

        let stored = repo.find_one_by_id(0).unwrap();
        assert_eq!(stored.title(), "b");
        assert_eq!(stored.authors().len(), 1);
        assert_eq!(repo.find_many_by_title("changed").len(), 0);
    }

    #[test]
    fn duplicate_author_names_get_one_entry_each() {
        let mut repo = DocumentRepository::new();
        let mut d = doc(0, "a", "t");
        d.authors_mut().push("a".into());
        d.authors_mut().push("b".into());
        repo.add(&d);

        assert_eq!(repo.index_stats().authors, 3);
        assert_eq!(repo.find_many_by_author("a").len(), 2);
        assert_consistent(&repo);

        assert!(repo.remove(&d));
        assert_eq!(repo.index_stats(), IndexStats::default());
    }

    #[test]
    fn empty_authors_and_title_are_accepted() {
        let mut repo = DocumentRepository::new();
        let mut d = doc(5, "a", "");
        d.authors_mut().clear();
        assert!(repo.add(&d));
        assert_eq!(repo.find_many_by_title("").len(), 1);
        assert_eq!(repo.index_stats().authors, 0);
        assert_consistent(&repo);
    }

    #[test]
    fn remove_uses_stored_keys_not_callers() {
        let mut repo = DocumentRepository::new();
        let mut d = doc(1, "Jarrod Otis", "A Title");
        repo.add(&d);

        d.set_title("Something Else");
        d.authors_mut()[0] = "Someone Else".into();
        assert!(repo.remove(&d));

        assert!(repo.find_many_by_author("Jarrod Otis").is_empty());
        assert!(repo.find_many_by_title("A Title").is_empty());
        assert_eq!(repo.authors().count(), 0);
        assert_eq!(repo.titles().count(), 0);
    }

    #[test]
    fn try_variants_report_errors() {
        let mut repo = DocumentRepository::new();
        let d = doc(3, "a", "b");
        assert_eq!(repo.try_add(&d), Ok(()));
        assert_eq!(repo.try_add(&d), Err(RepositoryError::DuplicateId(3)));
        assert_eq!(repo.try_remove(&d), Ok(()));
        assert_eq!(repo.try_remove(&d), Err(RepositoryError::NotFound(3)));
    }

    #[test]
    fn remove_by_id_returns_stored_copy() {
        let mut repo = DocumentRepository::new();
        repo.add(&doc(9, "a", "b"));
        let removed = repo.remove_by_id(9).unwrap();
        assert_eq!(removed.id(), 9);
        assert!(repo.remove_by_id(9).is_none());
    }

    #[test]
    fn slot_reuse_keeps_indexes_consistent() {
        let mut repo = DocumentRepository::new();
        repo.add(&doc(0, "a", "x"));
        repo.add(&doc(1, "b", "y"));
        repo.remove_by_id(0);
        repo.add(&doc(2, "a", "x"));

        let by_author: Vec<u32> = repo.find_many_by_author("a").iter().map(|d| d.id()).collect();
        assert_eq!(by_author, vec![2]);
        let order: Vec<u32> = repo.iter().map(Document::id).collect();
        assert_eq!(order, vec![1, 2]);
        assert_consistent(&repo);
    }

    #[test]
    fn from_iter_skips_duplicate_ids() {
        let repo: DocumentRepository = vec![doc(0, "a", "first"), doc(0, "b", "second"), doc(1, "c", "third")]
            .into_iter()
            .collect();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_one_by_id(0).unwrap().title(), "first");
        assert_consistent(&repo);
    }

    #[test]
    fn clear_resets_all_indexes() {
        let mut repo: DocumentRepository = (0..4).map(|i| doc(i, "a", "b")).collect();
        repo.clear();
        assert!(repo.is_empty());
        assert!(!repo.contains(0));
        assert_eq!(repo.index_stats(), IndexStats::default());
        assert!(repo.add(&doc(0, "a", "b")));
    }

    #[test]
    fn borrowing_iteration() {
        let repo: DocumentRepository = (0..3).map(|i| doc(i, "a", "b")).collect();
        let mut count = 0;
        for d in &repo {
            assert!(repo.contains(d.id()));
            count += 1;
        }
        assert_eq!(count, repo.find_all().len());
    }
}
