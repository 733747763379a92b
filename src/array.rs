//! A fixed-size array with checked access and raw-pointer cursors, written `Array<T, N>`.
//!
//! ```
//! use rcontainers::Array;
//!
//! let mut a = Array::from([3, 1, 2]);
//! assert_eq!(a.at(1), Ok(&1));
//! assert!(a.at(3).is_err());
//!
//! a.fill(9);
//! assert_eq!(a, Array::from([9, 9, 9]));
//! assert_eq!(a.walk_rev().count(), 3);
//! ```
use core::ops;

use crate::cursor::Walk;
use crate::error::OutOfRange;
use crate::reverse::ReverseIterator;

/// `N` values of `T` stored inline.
///
/// Cursors are plain `*const T` / `*mut T`, which are random-access cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Array<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Wraps `data`.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Array { data }
    }

    /// Returns `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the element at `index`, checking it against `N`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= N`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.data.get(index).ok_or(OutOfRange { index, len: N })
    }

    /// Mutable counterpart of [`at`](Array::at).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= N`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.data.get_mut(index).ok_or(OutOfRange { index, len: N })
    }

    /// Assigns a clone of `value` to every element.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value)
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[inline]
    pub fn front(&self) -> &T {
        match self.data.first() {
            Some(x) => x,
            None => zero_length("front"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        match self.data.first_mut() {
            Some(x) => x,
            None => zero_length("front_mut"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[inline]
    pub fn back(&self) -> &T {
        match self.data.last() {
            Some(x) => x,
            None => zero_length("back"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        match self.data.last_mut() {
            Some(x) => x,
            None => zero_length("back_mut"),
        }
    }

    /// Address of the underlying storage.
    #[inline]
    pub fn data(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable address of the underlying storage.
    #[inline]
    pub fn data_mut(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Cursor to the first element.
    #[inline]
    pub fn begin(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(&self) -> *const T {
        self.data.as_ptr_range().end
    }

    /// Mutable cursor to the first element.
    #[inline]
    pub fn begin_mut(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Mutable cursor one past the last element.
    #[inline]
    pub fn end_mut(&mut self) -> *mut T {
        self.data.as_mut_ptr_range().end
    }

    /// Reverse cursor to the last element.
    #[inline]
    pub fn rbegin(&self) -> ReverseIterator<*const T> {
        ReverseIterator::new(self.end())
    }

    /// Reverse cursor one before the first element.
    #[inline]
    pub fn rend(&self) -> ReverseIterator<*const T> {
        ReverseIterator::new(self.begin())
    }

    /// Borrowing iterator over `[begin(), end())`.
    #[inline]
    pub fn walk(&self) -> Walk<'_, *const T> {
        // SAFETY: the range covers the whole array, borrowed along with `self`.
        unsafe { Walk::with_len(self.begin(), self.end(), N) }
    }

    /// Borrowing iterator over `[rbegin(), rend())`.
    #[inline]
    pub fn walk_rev(&self) -> Walk<'_, ReverseIterator<*const T>> {
        unsafe { Walk::with_len(self.rbegin(), self.rend(), N) }
    }

    /// Unwraps the underlying array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

#[cold]
#[inline(never)]
fn zero_length(op: &str) -> ! {
    panic!("`{}` called on a zero-length array", op);
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Array {
            data: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> ops::Deref for Array<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> ops::DerefMut for Array<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Array { data }
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
