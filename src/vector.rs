//! A contiguous growable array type with allocator-provided storage, written `Vector<T, A>`.
//!
//! Storage ownership and element lifetime are kept apart: the private `RawVec` owns `capacity`
//! uninitialized slots, and the vector tracks how many leading slots (`len`) hold live values.
//! Values are constructed into and destroyed out of slots through the [`Allocator`] primitives.
//!
//! # Capacity and reallocation
//!
//! Growth triggered by an insertion is amortized: the first allocation holds 2 slots, every
//! later one `capacity + capacity / 2`, or exactly what the insertion needs if that is more.
//! [`Vector::reserve`] instead takes the *total* capacity wanted and reallocates to exactly that.
//! Capacity never shrinks, not even on [`Vector::clear`].
//!
//! ```
//! # use rcontainers::Vector;
//! let mut v = Vector::new();
//! let mut seen = Vec::new();
//! for i in 0..6 {
//!     v.push(i);
//!     seen.push(v.capacity());
//! }
//! assert_eq!(seen, [2, 2, 3, 4, 6, 6]);
//! ```
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{self, FusedIterator};
use core::mem::{self, ManuallyDrop};
use core::ops::{self, Index, IndexMut};
use core::ptr;
use core::slice::{self, SliceIndex};

use alloc::boxed::Box;

use crate::allocator::{Allocator, Global};
use crate::cursor::{slot, span, step, Walk};
use crate::error::{OutOfRange, TryReserveError};
use crate::iter::{ConstVectorIterator, VectorIterator};
use crate::raw_vec::RawVec;
use crate::reverse::ReverseIterator;

/// A contiguous growable array type, written `Vector<T>` but pronounced 'vector'.
///
/// # Examples
///
/// ```
/// # use rcontainers::{vector, Vector};
/// let mut v = Vector::new();
/// v.push(1);
/// v.push(2);
///
/// assert_eq!(v.len(), 2);
/// assert_eq!(v[0], 1);
///
/// assert_eq!(v.pop(), Some(2));
/// assert_eq!(v.len(), 1);
///
/// v[0] = 7;
/// v.extend([1, 2, 3].iter().copied());
/// assert_eq!(v, [7, 1, 2, 3]);
///
/// let it = v.insert(v.begin() + 1, 9);
/// assert_eq!(unsafe { *it.get() }, 9);
/// assert_eq!(v, vector![7, 9, 1, 2, 3]);
/// ```
pub struct Vector<T, A: Allocator<T> = Global> {
    buf: RawVec<T, A>,
    len: usize,
}

////////////////////////////////////////////////////////////////////////////////
// Inherent methods
////////////////////////////////////////////////////////////////////////////////

impl<T> Vector<T> {
    /// Constructs a new, empty `Vector<T>`.
    ///
    /// The vector will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::Vector;
    /// let v: Vector<i32> = Vector::new();
    /// assert_eq!(v.capacity(), 0);
    /// assert!(v.data().is_null());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Vector::new_in(Global)
    }

    /// Constructs a new, empty `Vector<T>` with exactly `capacity` slots.
    ///
    /// If `capacity` is 0, the vector will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::Vector;
    /// let mut v = Vector::with_capacity(10);
    ///
    /// // The vector contains no items, even though it has capacity for more
    /// assert_eq!(v.len(), 0);
    /// assert_eq!(v.capacity(), 10);
    ///
    /// // These are all done without reallocating...
    /// for i in 0..10 {
    ///     v.push(i);
    /// }
    /// assert_eq!(v.capacity(), 10);
    ///
    /// // ...but this makes the vector reallocate
    /// v.push(11);
    /// assert_eq!(v.capacity(), 15);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Vector::with_capacity_in(capacity, Global)
    }

    /// Creates a `Vector<T>` directly from the raw components of another vector.
    ///
    /// # Safety
    ///
    /// * `ptr` must have been obtained from `Global.allocate(capacity)` (or from the global heap
    ///   with the layout of `[T; capacity]`), or be dangling when `capacity` is 0.
    /// * `length` must be less than or equal to `capacity`, and the first `length` slots must
    ///   hold initialized values.
    ///
    /// The ownership of `ptr` is transferred to the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::{vector, Vector};
    /// use std::mem::ManuallyDrop;
    ///
    /// let v = ManuallyDrop::new(vector![1, 2, 3]);
    /// let (p, len, cap) = (v.as_ptr() as *mut i32, v.len(), v.capacity());
    ///
    /// let rebuilt = unsafe { Vector::from_raw_parts(p, len, cap) };
    /// assert_eq!(rebuilt, [1, 2, 3]);
    /// ```
    #[inline]
    pub unsafe fn from_raw_parts(ptr: *mut T, length: usize, capacity: usize) -> Self {
        Vector {
            buf: unsafe { RawVec::from_raw_parts_in(ptr, capacity, Global) },
            len: length,
        }
    }
}

impl<T, A: Allocator<T>> Vector<T, A> {
    /// Constructs a new, empty vector drawing its storage from `alloc`.
    #[inline]
    pub const fn new_in(alloc: A) -> Self {
        Vector {
            buf: RawVec::new_in(alloc),
            len: 0,
        }
    }

    /// Constructs a new, empty vector with exactly `capacity` slots drawn from `alloc`.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    #[inline]
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Vector {
            buf: RawVec::with_capacity_in(capacity, alloc),
            len: 0,
        }
    }

    /// Returns the number of slots currently allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::Vector;
    /// let v: Vector<i32> = Vector::with_capacity(10);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Returns the number of live elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the allocator backing this vector.
    #[inline]
    pub fn allocator(&self) -> &A {
        self.buf.alloc()
    }

    /// Makes sure the vector can hold `new_cap` elements in total.
    ///
    /// Does nothing if `new_cap <= capacity()`. Otherwise reallocates to exactly `new_cap` slots,
    /// moving every live element into the new block in index order. Capacity is never reduced.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1];
    /// v.reserve(10);
    /// assert_eq!(v.capacity(), 10);
    /// v.reserve(3);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.capacity() {
            self.buf.reserve_exact(self.len, new_cap - self.len);
        }
    }

    /// Tries to make sure the vector can hold `new_cap` elements in total.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, an error is returned and
    /// the vector is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::{TryReserveError, Vector};
    /// let mut v: Vector<u64> = Vector::new();
    /// assert_eq!(v.try_reserve(usize::MAX), Err(TryReserveError::CapacityOverflow));
    /// assert_eq!(v.try_reserve(4), Ok(()));
    /// assert_eq!(v.capacity(), 4);
    /// ```
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), TryReserveError> {
        if new_cap > self.capacity() {
            self.buf.try_reserve_exact(self.len, new_cap - self.len)
        } else {
            Ok(())
        }
    }

    /// Shortens the vector, keeping the first `len` elements and destroying the rest in index
    /// order.
    ///
    /// If `len` is greater than the vector's current length, this has no effect. Capacity is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 2, 3, 4, 5];
    /// v.truncate(2);
    /// assert_eq!(v, [1, 2]);
    /// assert_eq!(v.capacity(), 5);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }
        // A panicking destructor leaks the remaining tail instead of dropping it twice.
        self.len = len;
        let base = self.buf.ptr();
        for i in len..old_len {
            // SAFETY: slot `i` was live and is no longer counted by `len`.
            unsafe { self.buf.alloc().destroy(base.add(i)) }
        }
    }

    /// Destroys every element in index order. The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 2, 3];
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert_eq!(v.capacity(), 3);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    ///
    /// - `new_len` must be less than or equal to [`capacity()`](Vector::capacity).
    /// - The elements at `old_len..new_len` must be initialized.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = new_len;
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Extracts a mutable slice of the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Returns a raw pointer to the vector's buffer.
    ///
    /// Unlike [`data`](Vector::data), this is never null: a vector that has not allocated returns
    /// a dangling, well-aligned pointer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Returns an unsafe mutable pointer to the vector's buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// Address of the first element, or null when the vector is empty (even if it still has
    /// capacity).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1];
    /// assert_eq!(v.data(), v.as_ptr());
    /// v.clear();
    /// assert!(v.data().is_null());
    /// ```
    #[inline]
    pub fn data(&self) -> *const T {
        if self.len == 0 {
            ptr::null()
        } else {
            self.as_ptr()
        }
    }

    /// Mutable counterpart of [`data`](Vector::data).
    #[inline]
    pub fn data_mut(&mut self) -> *mut T {
        if self.len == 0 {
            ptr::null_mut()
        } else {
            self.as_mut_ptr()
        }
    }

    /// Returns the element at `index`, checking it against the length.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::{vector, OutOfRange};
    /// let v = vector![10, 40, 30];
    /// assert_eq!(v.at(1), Ok(&40));
    /// assert_eq!(v.at(3), Err(OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len;
        self.as_slice().get(index).ok_or(OutOfRange { index, len })
    }

    /// Mutable counterpart of [`at`](Vector::at).
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(OutOfRange { index, len })
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front(&self) -> &T {
        match self.first() {
            Some(x) => x,
            None => empty("front"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        match self.first_mut() {
            Some(x) => x,
            None => empty("front_mut"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back(&self) -> &T {
        match self.last() {
            Some(x) => x,
            None => empty("back"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        match self.last_mut() {
            Some(x) => x,
            None => empty("back_mut"),
        }
    }

    /// Appends an element to the back of the vector, constructing it in its final slot.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 2];
    /// v.push(3);
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.cap() {
            self.buf.reserve(self.len, 1);
        }
        // SAFETY: there is at least one spare slot at index `len`.
        unsafe {
            let end = self.buf.ptr().add(self.len);
            self.buf.alloc().construct(end, value);
        }
        self.len += 1;
    }

    /// Appends the value produced by `f` and returns a reference to it.
    ///
    /// Room is made before `f` runs, so the value is written straight into its final slot.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::Vector;
    /// let mut v = Vector::new();
    /// let s = v.emplace_back(|| String::from("hi"));
    /// s.push('!');
    /// assert_eq!(v[0], "hi!");
    /// ```
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self.len == self.buf.cap() {
            self.buf.reserve(self.len, 1);
        }
        let index = self.len;
        // SAFETY: slot `index` is spare; `len` is only bumped once the value is in place.
        unsafe {
            let end = self.buf.ptr().add(index);
            self.buf.alloc().construct(end, f());
            self.len += 1;
            &mut *end
        }
    }

    /// Removes the last element from the vector and returns it, or [`None`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 2, 3];
    /// assert_eq!(v.pop(), Some(3));
    /// assert_eq!(v, [1, 2]);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: slot `len` was live and is no longer counted.
            unsafe { Some(ptr::read(self.buf.ptr().add(self.len))) }
        }
    }

    /// Inserts `value` before `pos` and returns a cursor to it.
    ///
    /// Elements at and after `pos` are shifted one slot to the right.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin(), end()]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 2, 3];
    /// v.insert(v.begin() + 1, 4);
    /// assert_eq!(v, [1, 4, 2, 3]);
    /// v.insert(v.end(), 5);
    /// assert_eq!(v, [1, 4, 2, 3, 5]);
    /// ```
    pub fn insert<P>(&mut self, pos: P, value: T) -> VectorIterator<T>
    where
        P: Into<ConstVectorIterator<T>>,
    {
        let index = self.position_index(pos.into(), "insert");
        self.splice_in(index, 1, iter::once(value))
    }

    /// Inserts the value produced by `f` before `pos` and returns a cursor to it.
    ///
    /// The gap is opened before `f` runs, so the value is written straight into its final slot.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin(), end()]`.
    pub fn emplace<P, F>(&mut self, pos: P, f: F) -> VectorIterator<T>
    where
        P: Into<ConstVectorIterator<T>>,
        F: FnOnce() -> T,
    {
        let index = self.position_index(pos.into(), "emplace");
        self.splice_in(index, 1, iter::once_with(f))
    }

    /// Inserts every item of `items` before `pos`, keeping their order, and returns a cursor to
    /// the first inserted element (or `pos` itself when nothing was inserted).
    ///
    /// The iterator's [`len`](ExactSizeIterator::len) decides how much room is made; at most that
    /// many items are taken from it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin(), end()]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 5];
    /// let src = vector![2, 3, 4];
    /// v.insert_range(v.begin() + 1, src.walk().copied());
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_range<P, I>(&mut self, pos: P, items: I) -> VectorIterator<T>
    where
        P: Into<ConstVectorIterator<T>>,
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let index = self.position_index(pos.into(), "insert_range");
        let items = items.into_iter();
        let count = items.len();
        self.splice_in(index, count, items)
    }

    /// Removes the element at `pos`, shifting everything after it one slot to the left, and
    /// returns a cursor to the element that took its place.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin(), end())`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 2, 3];
    /// let it = v.erase(v.begin());
    /// assert_eq!(unsafe { *it.get() }, 2);
    /// assert_eq!(v, [2, 3]);
    /// ```
    pub fn erase<P>(&mut self, pos: P) -> VectorIterator<T>
    where
        P: Into<ConstVectorIterator<T>>,
    {
        let index = self.position_index(pos.into(), "erase");
        assert!(index < self.len, "erase position is the end of the vector");

        let len = self.len;
        // SAFETY: `index < len`. While the slot is destroyed, `len` only covers the prefix, so a
        // panicking destructor leaks the tail instead of dropping it twice.
        unsafe {
            let hole = self.buf.ptr().add(index);
            self.len = index;
            self.buf.alloc().destroy(hole);
            ptr::copy(hole.add(1), hole, len - index - 1);
        }
        self.len = len - 1;
        self.begin() + index as isize
    }

    /// Removes and returns the element at `index`, shifting everything after it to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {}) should be < len (is {})",
            index,
            len
        );
        // SAFETY: `index < len`; the value is read out before its slot is overwritten.
        unsafe {
            let hole = self.buf.ptr().add(index);
            let value = ptr::read(hole);
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Resizes the vector in-place so that its length equals `new_len`, filling new slots with
    /// values returned by `f`.
    ///
    /// Growing reserves exactly `new_len` slots; shrinking destroys the tail and keeps capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 2];
    /// let mut n = 10;
    /// v.resize_with(4, || { n += 1; n });
    /// assert_eq!(v, [1, 2, 11, 12]);
    /// ```
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, f: F) {
        if new_len > self.len {
            self.extend_with(new_len - self.len, ExtendFunc(f));
        } else {
            self.truncate(new_len);
        }
    }

    /// Takes the contents out of `self`, leaving it empty and unallocated.
    ///
    /// This is the move-assignment contract: the returned vector owns the old buffer, and
    /// `self` ends with null data, zero length and zero capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut a = vector![1, 2, 3];
    /// let b = a.take();
    /// assert_eq!(b, [1, 2, 3]);
    /// assert_eq!((a.len(), a.capacity()), (0, 0));
    /// assert!(a.data().is_null());
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self
    where
        A: Default,
    {
        mem::take(self)
    }

    /// Cursor to the first element.
    ///
    /// Cursors do not borrow the vector. Writing through one ([`VectorIterator::get_mut`])
    /// requires that the vector is not shared at that point.
    #[inline]
    pub fn begin(&self) -> VectorIterator<T> {
        VectorIterator::from_raw(self.buf.ptr())
    }

    /// Cursor one past the last element.
    #[inline]
    pub fn end(&self) -> VectorIterator<T> {
        self.begin() + self.len as isize
    }

    /// Read-only cursor to the first element.
    #[inline]
    pub fn cbegin(&self) -> ConstVectorIterator<T> {
        self.begin().into()
    }

    /// Read-only cursor one past the last element.
    #[inline]
    pub fn cend(&self) -> ConstVectorIterator<T> {
        self.end().into()
    }

    /// Reverse cursor to the last element.
    #[inline]
    pub fn rbegin(&self) -> ReverseIterator<VectorIterator<T>> {
        ReverseIterator::new(self.end())
    }

    /// Reverse cursor one before the first element.
    #[inline]
    pub fn rend(&self) -> ReverseIterator<VectorIterator<T>> {
        ReverseIterator::new(self.begin())
    }

    /// Read-only reverse cursor to the last element.
    #[inline]
    pub fn crbegin(&self) -> ReverseIterator<ConstVectorIterator<T>> {
        ReverseIterator::new(self.cend())
    }

    /// Read-only reverse cursor one before the first element.
    #[inline]
    pub fn crend(&self) -> ReverseIterator<ConstVectorIterator<T>> {
        ReverseIterator::new(self.cbegin())
    }

    /// Borrowing iterator over `[cbegin(), cend())`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let v = vector![1, 2, 3];
    /// assert_eq!(v.walk().sum::<i32>(), 6);
    /// assert_eq!(v.walk().len(), 3);
    /// ```
    #[inline]
    pub fn walk(&self) -> Walk<'_, ConstVectorIterator<T>> {
        // SAFETY: the range covers exactly the live elements, borrowed along with `self`.
        unsafe { Walk::with_len(self.cbegin(), self.cend(), self.len) }
    }

    /// Borrowing iterator over `[crbegin(), crend())`, i.e. back to front.
    #[inline]
    pub fn walk_rev(&self) -> Walk<'_, ReverseIterator<ConstVectorIterator<T>>> {
        // SAFETY: as for `walk`.
        unsafe { Walk::with_len(self.crbegin(), self.crend(), self.len) }
    }

    /// Index of `pos` relative to `begin()`, checked to lie within `[begin(), end()]`.
    fn position_index(&self, pos: ConstVectorIterator<T>, op: &str) -> usize {
        let index = span(self.as_ptr(), pos.as_ptr());
        if index < 0 || index as usize > self.len {
            position_out_of_range(op, index, self.len);
        }
        index as usize
    }

    /// Opens a gap of `count` slots at `index` and fills it from `items`.
    fn splice_in<I>(&mut self, index: usize, count: usize, items: I) -> VectorIterator<T>
    where
        I: Iterator<Item = T>,
    {
        debug_assert!(index <= self.len);
        if count == 0 {
            return self.begin() + index as isize;
        }

        let len = self.len;
        if count > self.buf.cap() - len {
            self.buf.reserve(len, count);
        }

        // SAFETY: capacity covers `len + count`. While the gap is open only `[0, index)` is
        // counted as live; the guard closes the unfilled part of the gap and restores the length
        // once filling stops, whether `items` ran dry, ran short or panicked.
        unsafe {
            let hole = self.buf.ptr().add(index);
            self.len = index;
            ptr::copy(hole, hole.add(count), len - index);

            let alloc = self.buf.alloc();
            let mut gap = CloseGapOnDrop {
                len: &mut self.len,
                hole,
                count,
                tail: len - index,
                written: 0,
            };
            for item in items.take(count) {
                alloc.construct(hole.add(gap.written), item);
                gap.written += 1;
            }
        }
        self.begin() + index as isize
    }
}

impl<T: Clone, A: Allocator<T>> Vector<T, A> {
    /// Inserts `count` copies of `value` before `pos` and returns a cursor to the first of them
    /// (or `pos` itself when `count` is 0).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not within `[begin(), end()]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::{vector, Vector};
    /// let mut v = Vector::new();
    /// v.reserve(100);
    /// v.insert_n(v.begin(), 3, 7);
    /// assert_eq!(v, [7, 7, 7]);
    /// assert_eq!(v.capacity(), 100);
    /// ```
    pub fn insert_n<P>(&mut self, pos: P, count: usize, value: T) -> VectorIterator<T>
    where
        P: Into<ConstVectorIterator<T>>,
    {
        let index = self.position_index(pos.into(), "insert_n");
        self.splice_in(index, count, iter::repeat_n(value, count))
    }

    /// Resizes the vector in-place so that its length equals `new_len`.
    ///
    /// If `new_len` is greater than `len`, exactly `new_len` slots are reserved and the new ones
    /// are filled with clones of `value`. Otherwise the tail is destroyed and capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector!["hello"];
    /// v.resize(3, "world");
    /// assert_eq!(v, ["hello", "world", "world"]);
    /// assert_eq!(v.capacity(), 3);
    ///
    /// let mut v = vector![1, 2, 3, 4];
    /// v.resize(2, 0);
    /// assert_eq!(v, [1, 2]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        if new_len > self.len {
            self.extend_with(new_len - self.len, ExtendElement(value));
        } else {
            self.truncate(new_len);
        }
    }

    /// Clones and appends all the elements in a slice to the vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1];
    /// v.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.extend_desugared(other.iter().cloned())
    }
}

impl<T: Default, A: Allocator<T>> Vector<T, A> {
    /// Resizes the vector in-place, filling new slots with `T::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let mut v = vector![1, 2];
    /// v.resize_default(4);
    /// assert_eq!(v, [1, 2, 0, 0]);
    /// ```
    pub fn resize_default(&mut self, new_len: usize) {
        if new_len > self.len {
            self.extend_with(new_len - self.len, ExtendDefault);
        } else {
            self.truncate(new_len);
        }
    }
}

// This code generalizes `extend_with_{element,default,func}`.
trait ExtendWith<T> {
    fn next(&mut self) -> T;
    fn last(self) -> T;
}

struct ExtendElement<T>(T);
impl<T: Clone> ExtendWith<T> for ExtendElement<T> {
    fn next(&mut self) -> T {
        self.0.clone()
    }
    fn last(self) -> T {
        self.0
    }
}

struct ExtendDefault;
impl<T: Default> ExtendWith<T> for ExtendDefault {
    fn next(&mut self) -> T {
        Default::default()
    }
    fn last(self) -> T {
        Default::default()
    }
}

struct ExtendFunc<F>(F);
impl<T, F: FnMut() -> T> ExtendWith<T> for ExtendFunc<F> {
    fn next(&mut self) -> T {
        (self.0)()
    }
    fn last(mut self) -> T {
        (self.0)()
    }
}

impl<T, A: Allocator<T>> Vector<T, A> {
    /// Extends the vector by `n` values from the given generator, reserving exactly the room
    /// needed first.
    fn extend_with<E: ExtendWith<T>>(&mut self, n: usize, mut value: E) {
        self.buf.reserve_exact(self.len, n);

        // SAFETY: capacity covers `len + n`.
        unsafe {
            let mut slot = self.buf.ptr().add(self.len);
            let alloc = self.buf.alloc();
            let mut local_len = SetLenOnDrop::new(&mut self.len);

            // Write all elements except the last one
            for _ in 1..n {
                alloc.construct(slot, value.next());
                slot = slot.add(1);
                // Increment the length in every step in case next() panics
                local_len.increment_len(1);
            }

            if n > 0 {
                // We can write the last element directly without cloning needlessly
                alloc.construct(slot, value.last());
                local_len.increment_len(1);
            }

            // len set by scope guard
        }
    }

    /// Pushes every item, growing by the amortized policy with the iterator's lower size hint.
    fn extend_desugared<I: Iterator<Item = T>>(&mut self, mut iterator: I) {
        while let Some(element) = iterator.next() {
            let len = self.len;
            if len == self.buf.cap() {
                let (lower, _) = iterator.size_hint();
                self.buf.reserve(len, lower.saturating_add(1));
            }
            // SAFETY: slot `len` is spare.
            unsafe {
                self.buf.alloc().construct(self.buf.ptr().add(len), element);
            }
            // NB can't overflow since we would have had to alloc the address space
            self.len = len + 1;
        }
    }
}

// Set the length of the vector when the `SetLenOnDrop` goes out of scope, so that the elements
// written so far stay owned even if a generator panics half way.
struct SetLenOnDrop<'a> {
    len: &'a mut usize,
    local_len: usize,
}

impl<'a> SetLenOnDrop<'a> {
    #[inline]
    fn new(len: &'a mut usize) -> Self {
        SetLenOnDrop {
            local_len: *len,
            len,
        }
    }

    #[inline]
    fn increment_len(&mut self, increment: usize) {
        self.local_len += increment;
    }
}

impl Drop for SetLenOnDrop<'_> {
    #[inline]
    fn drop(&mut self) {
        *self.len = self.local_len;
    }
}

// The gap opened by `splice_in`: `count` slots at `hole`, the first `written` of them filled, with
// `tail` shifted values right after. `len` counts only the prefix before `hole` until the guard is
// dropped, which slides the tail down over the unfilled slots and counts everything again.
struct CloseGapOnDrop<'a, T> {
    len: &'a mut usize,
    hole: *mut T,
    count: usize,
    tail: usize,
    written: usize,
}

impl<T> Drop for CloseGapOnDrop<'_, T> {
    fn drop(&mut self) {
        if self.written < self.count {
            // SAFETY: both ranges lie within the allocation that `hole` points into.
            unsafe {
                ptr::copy(
                    self.hole.add(self.count),
                    self.hole.add(self.written),
                    self.tail,
                )
            }
        }
        *self.len += self.written + self.tail;
    }
}

////////////////////////////////////////////////////////////////////////////////
// Internal methods and functions
////////////////////////////////////////////////////////////////////////////////

#[doc(hidden)]
pub fn from_elem<T: Clone>(elem: T, n: usize) -> Vector<T> {
    let mut v = Vector::with_capacity(n);
    v.extend_with(n, ExtendElement(elem));
    v
}

#[cold]
#[inline(never)]
fn empty(op: &str) -> ! {
    panic!("`{}` called on an empty vector", op);
}

#[cold]
#[inline(never)]
fn position_out_of_range(op: &str, index: isize, len: usize) -> ! {
    panic!(
        "{} position (is {}) should be within [0, len] (len is {})",
        op, index, len
    );
}

////////////////////////////////////////////////////////////////////////////////
// Common trait implementations for Vector
////////////////////////////////////////////////////////////////////////////////

impl<T, A: Allocator<T>> ops::Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }
}

impl<T, A: Allocator<T>> ops::DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }
}

impl<T: Clone, A: Allocator<T> + Clone> Clone for Vector<T, A> {
    /// Clones into exactly `len()` fresh slots, one element clone each.
    fn clone(&self) -> Self {
        let mut v = Vector::with_capacity_in(self.len, self.allocator().clone());
        for x in self.iter() {
            v.push(x.clone());
        }
        v
    }

    /// Releases the current storage first, then copies `source` into fresh storage. The
    /// allocator of `self` is kept.
    fn clone_from(&mut self, source: &Self) {
        *self = Vector::new_in(self.allocator().clone());
        self.reserve(source.len);
        for x in source.iter() {
            self.push(x.clone());
        }
    }
}

impl<T: Hash, A: Allocator<T>> Hash for Vector<T, A> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&**self, state)
    }
}

impl<T, A: Allocator<T>, I: SliceIndex<[T]>> Index<I> for Vector<T, A> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&**self, index)
    }
}

impl<T, A: Allocator<T>, I: SliceIndex<[T]>> IndexMut<I> for Vector<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut **self, index)
    }
}

impl<T, A: Allocator<T>> Extend<T> for Vector<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_desugared(iter.into_iter())
    }
}

impl<'a, T: Copy + 'a, A: Allocator<T>> Extend<&'a T> for Vector<T, A> {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend_desugared(iter.into_iter().copied())
    }
}

impl<T, A: Allocator<T> + Default> FromIterator<T> for Vector<T, A> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Vector::new_in(A::default());
        v.extend_desugared(iter.into_iter());
        v
    }
}

impl<T, A: Allocator<T>> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    /// Creates a consuming iterator, that is, one that moves each value out of the vector (from
    /// start to end). The vector cannot be used after calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let v = vector!["a".to_string(), "b".to_string()];
    /// for s in v.into_iter() {
    ///     // s has type String, not &String
    ///     println!("{}", s);
    /// }
    /// ```
    #[inline]
    fn into_iter(self) -> IntoIter<T, A> {
        let me = ManuallyDrop::new(self);
        // SAFETY: `me` is never dropped, so the buffer gets exactly one owner.
        let buf = unsafe { ptr::read(&me.buf) };
        let begin = buf.ptr() as *const T;
        IntoIter {
            ptr: begin,
            end: step(begin, me.len as isize),
            buf,
        }
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, A: Allocator<T>> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}

macro_rules! __impl_slice_eq1 {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
            #[inline]
            #[allow(clippy::partialeq_ne_impl)]
            fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
        }
    }
}

__impl_slice_eq1! { [A: Allocator<T>, B: Allocator<U>] Vector<T, A>, Vector<U, B> }
__impl_slice_eq1! { [A: Allocator<T>] Vector<T, A>, [U] }
__impl_slice_eq1! { [A: Allocator<T>] Vector<T, A>, &[U] }
__impl_slice_eq1! { [A: Allocator<T>] Vector<T, A>, &mut [U] }
__impl_slice_eq1! { [A: Allocator<T>, const N: usize] Vector<T, A>, [U; N] }
__impl_slice_eq1! { [A: Allocator<T>, const N: usize] Vector<T, A>, &[U; N] }

/// Implements comparison of vectors, lexicographically.
impl<T: PartialOrd, A: Allocator<T>> PartialOrd for Vector<T, A> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        PartialOrd::partial_cmp(&**self, &**other)
    }
}

impl<T: Eq, A: Allocator<T>> Eq for Vector<T, A> {}

/// Implements ordering of vectors, lexicographically.
impl<T: Ord, A: Allocator<T>> Ord for Vector<T, A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(&**self, &**other)
    }
}

impl<T, A: Allocator<T>> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // RawVec handles deallocation
        self.clear()
    }
}

impl<T, A: Allocator<T> + Default> Default for Vector<T, A> {
    /// Creates an empty, unallocated vector.
    fn default() -> Self {
        Vector::new_in(A::default())
    }
}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T, A: Allocator<T>> AsRef<Vector<T, A>> for Vector<T, A> {
    fn as_ref(&self) -> &Vector<T, A> {
        self
    }
}

impl<T, A: Allocator<T>> AsMut<Vector<T, A>> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut Vector<T, A> {
        self
    }
}

impl<T, A: Allocator<T>> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, A: Allocator<T>> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(s: &[T]) -> Vector<T> {
        crate::slice::to_vector(s)
    }
}

impl<T: Clone> From<&mut [T]> for Vector<T> {
    fn from(s: &mut [T]) -> Vector<T> {
        crate::slice::to_vector(s)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Reserves exactly `N` slots and moves each element in, in order.
    fn from(s: [T; N]) -> Vector<T> {
        let mut v = Vector::with_capacity(N);
        for x in s {
            v.push(x);
        }
        v
    }
}

impl<T> From<Box<[T]>> for Vector<T> {
    fn from(s: Box<[T]>) -> Vector<T> {
        crate::slice::into_vector(s)
    }
}

impl From<&str> for Vector<u8> {
    fn from(s: &str) -> Vector<u8> {
        From::from(s.as_bytes())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Iterators
////////////////////////////////////////////////////////////////////////////////

/// An iterator that moves out of a vector.
///
/// This `struct` is created by the `into_iter` method on [`Vector`] (provided by the
/// [`IntoIterator`] trait).
pub struct IntoIter<T, A: Allocator<T> = Global> {
    buf: RawVec<T, A>,
    ptr: *const T,
    end: *const T,
}

impl<T: fmt::Debug, A: Allocator<T>> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator<T>> IntoIter<T, A> {
    /// Returns the remaining items of this iterator as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::vector;
    /// let v = vector!['a', 'b', 'c'];
    /// let mut into_iter = v.into_iter();
    /// assert_eq!(into_iter.as_slice(), &['a', 'b', 'c']);
    /// let _ = into_iter.next().unwrap();
    /// assert_eq!(into_iter.as_slice(), &['b', 'c']);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(slot(self.ptr), self.len()) }
    }

    /// Returns the remaining items of this iterator as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { &mut *self.as_raw_mut_slice() }
    }

    fn as_raw_mut_slice(&mut self) -> *mut [T] {
        ptr::slice_from_raw_parts_mut(slot(self.ptr) as *mut T, self.len())
    }
}

impl<T, A: Allocator<T>> AsRef<[T]> for IntoIter<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

unsafe impl<T: Send, A: Allocator<T> + Send> Send for IntoIter<T, A> {}
unsafe impl<T: Sync, A: Allocator<T> + Sync> Sync for IntoIter<T, A> {}

impl<T, A: Allocator<T>> Iterator for IntoIter<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.ptr == self.end {
            None
        } else {
            let old = self.ptr;
            self.ptr = step(self.ptr, 1);
            // SAFETY: `old` was the first remaining live slot; it is now past `ptr`.
            Some(unsafe { ptr::read(slot(old)) })
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = span(self.ptr, self.end) as usize;
        (exact, Some(exact))
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }
}

impl<T, A: Allocator<T>> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.end == self.ptr {
            None
        } else {
            self.end = step(self.end, -1);
            // SAFETY: the slot at the new `end` was live and is now outside the range.
            Some(unsafe { ptr::read(slot(self.end)) })
        }
    }
}

impl<T, A: Allocator<T>> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator<T>> FusedIterator for IntoIter<T, A> {}

impl<T: Clone, A: Allocator<T> + Clone> Clone for IntoIter<T, A> {
    fn clone(&self) -> Self {
        let mut v = Vector::with_capacity_in(self.len(), self.buf.alloc().clone());
        v.extend_from_slice(self.as_slice());
        v.into_iter()
    }
}

impl<T, A: Allocator<T>> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // destroy the remaining elements; `buf` releases the block afterwards
        unsafe {
            ptr::drop_in_place(self.as_raw_mut_slice());
        }
    }
}
