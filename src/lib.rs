//! A contiguous, growable vector handing out stable handles to its elements.
//!
//! Elements live in a single dense `Vec`, so iterating over them is as fast
//! as iterating over a slice. Each insertion returns a `Handle` which keeps
//! resolving to the same element until that element is removed, even though
//! removals of other elements move it around in memory.
//!
//! ```
//! # use idvec::IndexedVec;
//! let mut vec = IndexedVec::new();
//! let a = vec.insert("a");
//! let b = vec.insert("b");
//! let c = vec.insert("c");
//!
//! vec.remove(b).unwrap();
//! assert_eq!(vec.data(), &["a", "c"]);
//! assert_eq!(vec[c], "c");
//! assert!(!vec.is_valid(b));
//!
//! // The handle of `b` is recycled.
//! let d = vec.insert("d");
//! assert_eq!(d, b);
//! assert_eq!(vec.get(a).unwrap(), &"a");
//! ```
//!
//! The structure is not synchronized: sharing it between threads requires an
//! external lock around every mutation.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod handle;
pub mod errors;
pub mod indexed_vec;

pub use self::handle::Handle;
pub use self::errors::{HandleError, HandleErrorKind};
pub use self::indexed_vec::IndexedVec;
