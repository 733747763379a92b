//! Conversions from slices into [`Vector`].
use alloc::boxed::Box;

use crate::vector::Vector;

/// Copies `s` into a new vector holding exactly `s.len()` slots.
///
/// ```
/// # use rcontainers::slice::to_vector;
/// let v = to_vector(&[1, 2, 3]);
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 3);
/// ```
pub fn to_vector<T: Clone>(s: &[T]) -> Vector<T> {
    let mut v = Vector::with_capacity(s.len());
    v.extend_from_slice(s);
    v
}

/// Converts a boxed slice into a vector without copying its elements.
pub fn into_vector<T>(b: Box<[T]>) -> Vector<T> {
    let len = b.len();
    let b = Box::into_raw(b);
    // SAFETY: a boxed slice is a block of `len` values allocated on the global heap with the
    // layout of `[T; len]`, which is exactly what `Global` hands out.
    unsafe { Vector::from_raw_parts(b as *mut T, len, len) }
}
