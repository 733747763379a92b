//! Allocator-aware containers with cursor-style iterators.
//!
//! The centrepiece is [`Vector`], a contiguous growable array that keeps raw storage ownership
//! (see [`allocator`]) separate from the lifetime of the elements living in it. [`List`] and
//! [`Array`] share the same cursor machinery ([`cursor`], [`reverse`]).
//!
//! ```rust
//! use std::mem::size_of;
//! use rcontainers::{vector, Vector};
//!
//! const WORD: usize = size_of::<usize>();
//!
//! assert_eq!(size_of::<Vector<u8>>(), 3 * WORD);
//!
//! let v = vector![1, 2, 3];
//! let back_to_front: Vec<i32> = v.walk_rev().copied().collect();
//! assert_eq!(back_to_front, [3, 2, 1]);
//! ```
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![no_std]
extern crate alloc;

// Module with internal macros used by other modules (needs to be included before other modules).
#[macro_use]
mod macros;

pub mod allocator;
pub mod array;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
mod raw_vec;
pub mod reverse;
pub mod slice;
pub mod vector;

pub use crate::allocator::{Allocator, Global};
pub use crate::array::Array;
pub use crate::cursor::{distance, BidirectionalCursor, Category, Cursor, RandomAccessCursor, Walk};
pub use crate::error::{OutOfRange, TryReserveError};
pub use crate::iter::{ConstVectorIterator, VectorIterator};
pub use crate::list::{List, ListIterator};
pub use crate::reverse::ReverseIterator;
pub use crate::vector::Vector;
