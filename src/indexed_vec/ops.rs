use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice;
use crate::Handle;
use super::IndexedVec;

impl<T> Default for IndexedVec<T> {
    fn default() -> Self {
        IndexedVec::new()
    }
}

/// Unchecked access: the free list is not consulted.
///
/// # Panics
/// Panics if `handle` was never issued by the vector, or if its element has
/// been removed and the handle not yet recycled. A handle which has been
/// recycled silently resolves to the new element.
impl<T> Index<Handle> for IndexedVec<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &T {
        &self.data[self.slots[handle.index()]]
    }
}

impl<T> IndexMut<Handle> for IndexedVec<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.data[self.slots[handle.index()]]
    }
}

impl<'a, T> IntoIterator for &'a IndexedVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut IndexedVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for IndexedVec<T> {
    /// Insert every value, discarding the handles.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len() + lower);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for IndexedVec<T> {
    /// Build a keep-order `IndexedVec`. Handles can be recovered in insertion
    /// order with `handles()`.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = IndexedVec::new();
        vec.extend(iter);
        vec
    }
}
