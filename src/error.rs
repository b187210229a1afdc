//! Errors returned by the fallible container operations.

/// The error type for this crate.
///
/// Almost every operation here is infallible: a missing value or an empty
/// container is reported through `Option` or `bool`. Only positional
/// insertion into a [`LinkedList`](crate::LinkedList) can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A positional insert asked for an index past the end of the list.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },
}
