use super::storage::{Entries, Storage};

/// Storage contract shared by entity-specific repositories.
///
/// Implementers own a [`Storage`] holding the canonical copies and decide what
/// `add` and `remove` consider a match or a duplicate; the trait imposes none.
/// Iteration walks the canonical store in insertion order.
pub trait Repository {
    type Item;

    /// Store a copy of `item`. Returns false when the implementation rejects it.
    fn add(&mut self, item: &Self::Item) -> bool;

    /// Remove the stored entity matching `item`. Returns false when nothing matched.
    fn remove(&mut self, item: &Self::Item) -> bool;

    /// The canonical insertion-ordered store.
    fn storage(&self) -> &Storage<Self::Item>;

    fn iter(&self) -> Entries<'_, Self::Item> {
        self.storage().iter()
    }

    fn len(&self) -> usize {
        self.storage().len()
    }

    fn is_empty(&self) -> bool {
        self.storage().is_empty()
    }
}
