//! Opaque handles to the elements of an `IndexedVec`.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
/// A stable identifier for an element of an `IndexedVec`.
///
/// A handle stays attached to the same logical element until that element is
/// removed, no matter how the element moves around in the backing storage.
/// Handles are recycled: once an element is removed, its handle may be
/// handed out again by a later insertion.
///
/// Handles only support equality. They carry no ownership and are only
/// meaningful for the container which issued them: using a handle on another
/// container is a logic error which is not detected.
pub struct Handle(usize);

impl Handle {
    /// A handle which is never issued and never valid.
    pub const INVALID: Handle = Handle(usize::MAX);

    pub(crate) fn new(index: usize) -> Self {
        Handle(index)
    }

    /// Position of this handle in the slot table.
    pub(crate) fn index(self) -> usize {
        self.0
    }

    /// Return `true` if `self` is the `INVALID` sentinel.
    pub fn is_invalid(self) -> bool {
        self == Handle::INVALID
    }

    /// Reset `self` to the `INVALID` sentinel.
    pub fn invalidate(&mut self) {
        *self = Handle::INVALID;
    }
}

impl Default for Handle {
    /// An unset handle, i.e. `Handle::INVALID`.
    fn default() -> Self {
        Handle::INVALID
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invalid() {
            write!(f, "Handle(invalid)")
        } else {
            write!(f, "Handle({})", self.0)
        }
    }
}
