#![allow(dead_code)]

use research_db::{Document, DocumentRepository, Repository};

/// Shorthand for the single-author documents most tests use.
pub fn doc(id: u32, author: &str, title: &str) -> Document {
    Document::new(id, author, title, "c")
}

/// Builds a repository from documents that must all be accepted.
pub fn repo_with(documents: &[Document]) -> DocumentRepository {
    let mut repo = DocumentRepository::new();
    for document in documents {
        assert!(repo.add(document), "document {} rejected", document.id());
    }
    repo
}

/// Checks that every index agrees with the canonical store.
pub fn assert_consistent(repo: &DocumentRepository) {
    let stats = repo.index_stats();
    assert_eq!(stats.documents, repo.len());
    assert_eq!(stats.ids, stats.documents, "primary index out of step");
    assert_eq!(stats.titles, stats.documents, "title index out of step");

    let author_entries: usize = repo.iter().map(|d| d.authors().len()).sum();
    assert_eq!(stats.authors, author_entries, "author index out of step");

    for stored in repo.iter() {
        let by_id = repo.find_one_by_id(stored.id()).expect("stored id not indexed");
        assert_eq!(by_id, stored);
        assert!(repo
            .find_many_by_title(stored.title())
            .iter()
            .any(|d| d.id() == stored.id()));
        for author in stored.authors() {
            assert!(repo
                .find_many_by_author(author)
                .iter()
                .any(|d| d.id() == stored.id()));
        }
    }
}

pub fn ids(documents: &[Document]) -> Vec<u32> {
    documents.iter().map(Document::id).collect()
}
