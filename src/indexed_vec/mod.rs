//! A contiguous vector whose elements are addressed through stable handles.

mod ops;
mod test;

use log::{debug, trace};
use std::slice;
use crate::Handle;
use crate::errors::{HandleError, HandleErrorKind};

/// Marker stored in the slot table for a handle which is currently free.
const FREE: usize = usize::MAX;

#[derive(Clone, Debug)]
/// A growable, contiguous vector which hands out a `Handle` for each inserted
/// element.
///
/// Elements are stored densely: removing an element moves other elements
/// around, but every handle keeps resolving to the element it was issued for.
/// Two removal strategies are available, chosen once at construction:
/// * keep-order: the elements following the removed one are shifted down,
///   the relative order of the remaining elements is preserved, `O(n)`
/// * fast: the last element is moved into the hole, `O(1)`
///
/// Handles of removed elements are recycled, most recently freed first.
pub struct IndexedVec<T> {
    /// Removal strategy, fixed for the lifetime of the vector.
    keep_order: bool,

    /// The elements, in physical order.
    data: Vec<T>,

    /// Maps a handle to the physical position of its element, or `FREE`.
    slots: Vec<usize>,

    /// Maps a physical position to the handle owning it. Always as long as `data`.
    owners: Vec<Handle>,

    /// Released handles, reused in LIFO order.
    free: Vec<Handle>,
}

impl<T> IndexedVec<T> {
    /// Return an empty `IndexedVec` which preserves the order of its elements
    /// on removal.
    pub fn new() -> Self {
        IndexedVec::with_order(true)
    }

    /// Return an empty `IndexedVec` with the given removal strategy: if
    /// `keep_order` is `false`, removals swap the last element into the hole.
    pub fn with_order(keep_order: bool) -> Self {
        IndexedVec {
            keep_order,
            data: Vec::new(),
            slots: Vec::new(),
            owners: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Return an empty `IndexedVec` with the given removal strategy and room
    /// for at least `capacity` elements.
    pub fn with_capacity(keep_order: bool, capacity: usize) -> Self {
        let mut vec = IndexedVec::with_order(keep_order);
        vec.reserve(capacity);
        vec
    }

    /// Return `true` if removals preserve the relative order of elements.
    pub fn keeps_order(&self) -> bool {
        self.keep_order
    }

    /// Make room for `capacity` elements in total. The slot table only grows
    /// by what cannot be served by recycled handles.
    pub fn reserve(&mut self, capacity: usize) {
        debug!("reserving room for {} elements", capacity);

        let additional = capacity.saturating_sub(self.data.len());
        self.data.reserve(additional);
        self.owners.reserve(additional);

        let slots = capacity.saturating_sub(self.free.len());
        self.slots.reserve(slots.saturating_sub(self.slots.len()));
    }

    /// Number of elements the backing storage can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return `true` if there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append `value` and return a handle to it. The handle of the most
    /// recently removed element is reused if there is one.
    ///
    /// # Complexity
    /// Amortized `O(1)`.
    pub fn insert(&mut self, value: T) -> Handle {
        let position = self.data.len();
        let handle = match self.free.pop() {
            Some(handle) => {
                trace!("recycling {:?} for position {}", handle, position);
                handle
            }
            None => {
                let handle = Handle::new(self.slots.len());
                trace!("allocating {:?} for position {}", handle, position);
                self.slots.push(FREE);
                handle
            }
        };

        self.data.push(value);
        self.owners.push(handle);
        self.relink(position);
        handle
    }

    /// Remove the element referred to by `handle` and return it. The handle
    /// becomes invalid and may be reissued by a later insertion. All other
    /// handles keep referring to their element.
    ///
    /// Removing the last live element resets the vector, as with `clear`.
    ///
    /// Return an error and leave `self` untouched if `handle` is not valid.
    ///
    /// # Complexity
    /// `O(n - p)` where `p` is the position of the element if `self` keeps
    /// order, `O(1)` otherwise.
    pub fn remove(&mut self, handle: Handle) -> Result<T, HandleError> {
        let position = self.position(handle)?;

        let value = if self.keep_order {
            trace!("removing {:?} at position {}, shifting the tail", handle, position);
            self.owners.remove(position);
            let value = self.data.remove(position);
            for moved in position..self.data.len() {
                self.relink(moved);
            }
            value
        } else {
            trace!("removing {:?} at position {}, swapping the last element", handle, position);
            self.owners.swap_remove(position);
            let value = self.data.swap_remove(position);
            if position < self.data.len() {
                self.relink(position);
            }
            value
        };

        self.slots[handle.index()] = FREE;
        self.free.push(handle);

        if self.data.is_empty() {
            debug!("last element removed, resetting");
            self.reset();
        }

        Ok(value)
    }

    /// Remove every element and forget every handle. Handles issued after a
    /// clear may compare equal to handles issued before it.
    pub fn clear(&mut self) {
        debug!("clearing {} elements", self.data.len());
        self.reset();
    }

    /// Return a reference to the element referred to by `handle`.
    ///
    /// # Complexity
    /// `O(1)`.
    pub fn get(&self, handle: Handle) -> Result<&T, HandleError> {
        let position = self.position(handle)?;
        Ok(&self.data[position])
    }

    /// Return a mutable reference to the element referred to by `handle`.
    ///
    /// # Complexity
    /// `O(1)`.
    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut T, HandleError> {
        let position = self.position(handle)?;
        Ok(&mut self.data[position])
    }

    /// Check that `handle` refers to a live element, reporting why it does not
    /// otherwise.
    pub fn check(&self, handle: Handle) -> Result<(), HandleError> {
        self.position(handle).map(|_| ())
    }

    /// Return `true` if `handle` refers to a live element.
    ///
    /// # Complexity
    /// `O(1)`.
    pub fn is_valid(&self, handle: Handle) -> bool {
        self.check(handle).is_ok()
    }

    /// Return the physical position of the element referred to by `handle`.
    /// The handle is not validated: the result is meaningless if its element
    /// has been removed.
    ///
    /// # Panics
    /// Panics if `handle` was never issued by `self`.
    pub fn index_of(&self, handle: Handle) -> usize {
        self.slots[handle.index()]
    }

    /// Return the handle of the element at physical position `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn handle_at(&self, index: usize) -> Handle {
        self.owners[index]
    }

    /// Return the element at physical position `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn data_at(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Return the element at physical position `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn data_at_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }

    /// The elements, in physical order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The elements, in physical order. Values can be modified in place but
    /// not moved around.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterator over the elements, in physical order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutable iterator over the elements, in physical order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterator over the live handles, in physical order of their elements.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.owners.iter().cloned()
    }

    /// Iterator over the elements along with their handle, in physical order.
    pub fn entries(&self) -> impl Iterator<Item = (Handle, &T)> + '_ {
        self.owners.iter().cloned().zip(self.data.iter())
    }

    /// Resolve `handle` to a physical position, or explain why it cannot be.
    fn position(&self, handle: Handle) -> Result<usize, HandleError> {
        match self.slots.get(handle.index()) {
            None => Err(HandleError::new(handle, HandleErrorKind::OutOfRange)),
            Some(&FREE) => Err(HandleError::new(handle, HandleErrorKind::Freed)),
            Some(&position) => Ok(position),
        }
    }

    /// Point the slot of the handle owning `position` back at `position`.
    /// Every insertion and removal goes through here to keep `slots` and
    /// `owners` in agreement.
    fn relink(&mut self, position: usize) {
        let handle = self.owners[position];
        self.slots[handle.index()] = position;
    }

    fn reset(&mut self) {
        self.data.clear();
        self.slots.clear();
        self.owners.clear();
        self.free.clear();
    }
}
