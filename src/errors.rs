//! Errors reported when a handle does not refer to a live element.

use failure::{Fail, Context, Backtrace};
use std::fmt;
use crate::Handle;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Fail)]
/// Reason why a handle was rejected.
pub enum HandleErrorKind {
    #[fail(display = "handle out of bounds")]
    /// The handle was never issued by this container, or is `Handle::INVALID`.
    OutOfRange,

    #[fail(display = "the element with this handle has been removed")]
    /// The handle was issued but its element has since been removed.
    Freed,
}

#[derive(Debug)]
/// An error returned when a handle does not refer to a live element.
pub struct HandleError {
    handle: Handle,
    inner: Context<HandleErrorKind>,
}

impl Fail for HandleError {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for HandleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a valid handle: ", self.handle)?;
        fmt::Display::fmt(&self.inner, f)
    }
}

impl HandleError {
    pub(crate) fn new(handle: Handle, kind: HandleErrorKind) -> Self {
        HandleError {
            handle,
            inner: Context::new(kind),
        }
    }

    /// Why the handle was rejected.
    pub fn kind(&self) -> HandleErrorKind {
        *self.inner.get_context()
    }

    /// The rejected handle.
    pub fn handle(&self) -> Handle {
        self.handle
    }
}
