//! Secondary indexes keyed by an entity attribute.
//!
//! A [`MultiIndex`] is an ordered multimap from key to [`Handle`]s into a
//! repository's canonical storage. One entry is kept per (key, handle) pair, so
//! a handle inserted twice under the same key is listed twice.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use crate::repository::Handle;

/// Ordered multi-valued index. Entries under one key keep insertion order.
#[derive(Debug, Clone)]
pub struct MultiIndex<K> {
    map: BTreeMap<K, Vec<Handle>>,
    entries: usize,
}

impl<K: Ord> Default for MultiIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> MultiIndex<K> {
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
            entries: 0,
        }
    }

    pub fn insert(&mut self, key: K, handle: Handle) {
        self.map.entry(key).or_default().push(handle);
        self.entries += 1;
    }

    /// Drop every entry of `handle` under `key`, pruning the key once empty.
    /// Returns how many entries were removed.
    pub fn remove<Q>(&mut self, key: &Q, handle: Handle) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(handles) = self.map.get_mut(key) else {
            return 0;
        };
        let before = handles.len();
        handles.retain(|h| *h != handle);
        let removed = before - handles.len();
        if handles.is_empty() {
            self.map.remove(key);
        }
        self.entries -= removed;
        removed
    }

    pub fn get<Q>(&self, key: &Q) -> &[Handle]
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    /// Total number of (key, handle) entries.
    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.entries = 0;
    }
}
