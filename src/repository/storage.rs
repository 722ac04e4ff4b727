//! Storage - the canonical, insertion-ordered arena behind a repository.
//!
//! Entities live in slots of a growable vector and are addressed by a [`Handle`]
//! (slot index plus generation). Indexes store handles instead of references, so
//! structural changes to the store never invalidate them; a handle to a removed
//! entity simply stops resolving, even after its slot is reused.

use std::iter::FusedIterator;
use std::slice;

/// Stable identifier of an entity held in a [`Storage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    index: usize,
    generation: u32,
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Insertion-ordered arena of owned entities.
pub struct Storage<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    order: Vec<Handle>,
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Storage<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Append an entity at the end of the insertion order.
    pub fn insert(&mut self, value: T) -> Handle {
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.value = Some(value);
                Handle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    value: Some(value),
                });
                Handle {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };
        self.order.push(handle);
        handle
    }

    /// Take an entity out of the store. Returns `None` for a stale or unknown handle.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.order.retain(|h| *h != handle);
        Some(value)
    }

    /// The entity behind `handle`, or `None` once it has been removed.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    /// Handle of the first entity (in insertion order) matching the predicate.
    pub fn position<F>(&self, predicate: F) -> Option<Handle>
    where
        F: Fn(&T) -> bool,
    {
        self.order
            .iter()
            .copied()
            .find(|h| self.get(*h).map(&predicate).unwrap_or(false))
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove every entity. Slots are kept and retired, so no earlier handle
    /// resolves again once they are reused.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index);
        }
        self.order.clear();
    }

    /// Walk the entities in insertion order.
    pub fn iter(&self) -> Entries<'_, T> {
        Entries {
            order: self.order.iter(),
            storage: self,
        }
    }
}

impl<'a, T> IntoIterator for &'a Storage<T> {
    type Item = &'a T;
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward-only, read-only walk over a [`Storage`] in insertion order.
///
/// Holds a shared borrow of the store, so no add or remove can happen mid-walk.
pub struct Entries<'a, T> {
    order: slice::Iter<'a, Handle>,
    storage: &'a Storage<T>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = *self.order.next()?;
        self.storage.get(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}
