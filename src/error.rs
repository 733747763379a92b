//! Error types for fallible container operations.
//!
//! Both types derive [`thiserror::Error`] without relying on `std`, so they are usable from the
//! `no_std` core of the crate.
use core::alloc::Layout;

use thiserror::Error;

/// The error type for `try_reserve` methods.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TryReserveError {
    /// Error due to the computed capacity exceeding the collection's maximum (usually
    /// `isize::MAX` bytes).
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The memory allocator returned an error.
    #[error("memory allocation of {} bytes failed", layout.size())]
    AllocError {
        /// The layout of the allocation request that failed.
        layout: Layout,
    },
}

/// Returned by checked accessors such as [`Vector::at`](crate::Vector::at) when the index is not
/// below the container length.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index out of range: the len is {len} but the index is {index}")]
pub struct OutOfRange {
    /// Index that was requested.
    pub index: usize,
    /// Length of the container at the time of the access.
    pub len: usize,
}
