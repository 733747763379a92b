//! Cursor capabilities shared by every container in the crate.
//!
//! A cursor is a non-owning position marker into a container, modelled on raw pointers: moving
//! it and comparing it never borrows the container, and looking at the element under it is
//! `unsafe`. What a cursor can do is described by its [`Category`]:
//!
//! ```text
//!   Input ⊂ Forward ⊂ Bidirectional ⊂ RandomAccess
//! ```
//!
//! and by which of [`Cursor`], [`BidirectionalCursor`] and [`RandomAccessCursor`] it implements.
//! Plain `*const T` / `*mut T` are random-access cursors.
//!
//! [`Walk`] turns a `[first, last)` cursor range into a borrowing Rust iterator.
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

/// Signed distance between two cursor positions.
pub type Difference = isize;

/// Capability level of a cursor, from weakest to richest.
///
/// The derived ordering follows the capability hierarchy, so a richer category compares greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Single pass, forward only.
    Input,
    /// Multi-pass, forward only.
    Forward,
    /// Multi-pass, forward and backward.
    Bidirectional,
    /// Bidirectional plus O(1) jumps and differences.
    RandomAccess,
}

impl Category {
    /// Returns `true` if a cursor of this category can be used where `required` is expected.
    ///
    /// ```
    /// use rcontainers::Category;
    ///
    /// assert!(Category::RandomAccess.satisfies(Category::Bidirectional));
    /// assert!(!Category::Forward.satisfies(Category::Bidirectional));
    /// ```
    pub const fn satisfies(self, required: Category) -> bool {
        self as u8 >= required as u8
    }
}

/// A position inside a container.
pub trait Cursor: Clone + PartialEq {
    /// Element type the cursor points at.
    type Value;

    /// Capability level of this cursor type.
    const CATEGORY: Category;

    /// Moves the cursor to the next position.
    ///
    /// # Safety
    ///
    /// The container must be alive and the cursor must sit on one of its elements (not on its
    /// end position).
    unsafe fn advance(&mut self);

    /// Address of the element under the cursor.
    ///
    /// # Safety
    ///
    /// The container the cursor points into must be alive.
    unsafe fn element_ptr(&self) -> *const Self::Value;

    /// Distance to `last` in O(1), for cursors able to compute it without walking.
    ///
    /// Returns `None` by default.
    fn jump_distance(&self, _last: &Self) -> Option<Difference> {
        None
    }
}

/// A cursor that can also move backward.
pub trait BidirectionalCursor: Cursor {
    /// Moves the cursor to the previous position.
    ///
    /// # Safety
    ///
    /// The container must be alive and the cursor must not sit on its first element.
    unsafe fn retreat(&mut self);
}

/// A cursor supporting O(1) jumps, differences and ordering.
///
/// Positions are computed with wrapping address arithmetic, so every method here is safe. Only
/// reading through the resulting address requires care.
pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Returns the cursor `n` positions away (backward for negative `n`).
    fn jump(&self, n: Difference) -> Self;

    /// Signed number of positions from `origin` to `self`.
    fn distance_from(&self, origin: &Self) -> Difference;

    /// Address of the element under the cursor, computed without dereferencing anything.
    fn address(&self) -> *const Self::Value;
}

/// Number of positions between `first` and `last`.
///
/// Random-access cursors answer in O(1). Every other category advances `first` until it reaches
/// `last`.
///
/// # Safety
///
/// `last` must be reachable from `first` by repeated [`Cursor::advance`], and every position
/// before `last` must be a live element.
///
/// ```
/// use rcontainers::{distance, vector, List};
///
/// let v = vector![1, 2, 3, 4];
/// assert_eq!(unsafe { distance(v.begin(), v.end()) }, 4);
///
/// let list: List<i32> = (0..3).collect();
/// assert_eq!(unsafe { distance(list.begin(), list.end()) }, 3);
/// ```
pub unsafe fn distance<C: Cursor>(mut first: C, last: C) -> Difference {
    if C::CATEGORY.satisfies(Category::RandomAccess) {
        if let Some(n) = first.jump_distance(&last) {
            return n;
        }
    }

    let mut n = 0;
    while first != last {
        // SAFETY: `first` has not reached `last`, so it sits on a live element.
        unsafe { first.advance() };
        n += 1;
    }
    n
}

////////////////////////////////////////////////////////////////////////////////
// Address helpers
////////////////////////////////////////////////////////////////////////////////

// Zero-sized elements have no distinct addresses, so their positions are counted in bytes from
// the base pointer instead.
#[inline]
pub(crate) fn step<T>(ptr: *const T, n: Difference) -> *const T {
    if mem::size_of::<T>() == 0 {
        ptr.cast::<u8>().wrapping_offset(n).cast()
    } else {
        ptr.wrapping_offset(n)
    }
}

#[inline]
pub(crate) fn span<T>(from: *const T, to: *const T) -> Difference {
    let bytes = (to as usize).wrapping_sub(from as usize) as isize;
    match mem::size_of::<T>() {
        0 => bytes,
        size => bytes / size as isize,
    }
}

// A byte-stepped zero-sized position may be misaligned; any aligned address is as good.
#[inline]
pub(crate) fn slot<T>(ptr: *const T) -> *const T {
    if mem::size_of::<T>() == 0 {
        NonNull::dangling().as_ptr()
    } else {
        ptr
    }
}

#[inline]
pub(crate) unsafe fn element<'a, T>(ptr: *const T) -> &'a T {
    unsafe { &*slot(ptr) }
}

#[inline]
pub(crate) unsafe fn element_mut<'a, T>(ptr: *mut T) -> &'a mut T {
    unsafe { &mut *(slot(ptr) as *mut T) }
}

////////////////////////////////////////////////////////////////////////////////
// Raw pointers
////////////////////////////////////////////////////////////////////////////////

impl<T> Cursor for *const T {
    type Value = T;

    const CATEGORY: Category = Category::RandomAccess;

    #[inline]
    unsafe fn advance(&mut self) {
        *self = step(*self, 1);
    }

    #[inline]
    unsafe fn element_ptr(&self) -> *const T {
        *self
    }

    #[inline]
    fn jump_distance(&self, last: &Self) -> Option<Difference> {
        Some(span(*self, *last))
    }
}

impl<T> BidirectionalCursor for *const T {
    #[inline]
    unsafe fn retreat(&mut self) {
        *self = step(*self, -1);
    }
}

impl<T> RandomAccessCursor for *const T {
    #[inline]
    fn jump(&self, n: Difference) -> Self {
        step(*self, n)
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> Difference {
        span(*origin, *self)
    }

    #[inline]
    fn address(&self) -> *const T {
        *self
    }
}

impl<T> Cursor for *mut T {
    type Value = T;

    const CATEGORY: Category = Category::RandomAccess;

    #[inline]
    unsafe fn advance(&mut self) {
        *self = step(*self as *const T, 1) as *mut T;
    }

    #[inline]
    unsafe fn element_ptr(&self) -> *const T {
        *self
    }

    #[inline]
    fn jump_distance(&self, last: &Self) -> Option<Difference> {
        Some(span(*self as *const T, *last as *const T))
    }
}

impl<T> BidirectionalCursor for *mut T {
    #[inline]
    unsafe fn retreat(&mut self) {
        *self = step(*self as *const T, -1) as *mut T;
    }
}

impl<T> RandomAccessCursor for *mut T {
    #[inline]
    fn jump(&self, n: Difference) -> Self {
        step(*self as *const T, n) as *mut T
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> Difference {
        span(*origin as *const T, *self as *const T)
    }

    #[inline]
    fn address(&self) -> *const T {
        *self
    }
}

////////////////////////////////////////////////////////////////////////////////
// Walk
////////////////////////////////////////////////////////////////////////////////

/// A borrowing iterator over the cursor range `[first, last)`.
///
/// Containers hand these out from `walk()` / `walk_rev()`. Each call yields a fresh range, so a
/// walk can be restarted as long as the container is not mutated in between (the borrow checker
/// enforces that).
pub struct Walk<'a, C: Cursor> {
    first: C,
    last: C,
    len: usize,
    marker: PhantomData<&'a C::Value>,
}

impl<'a, C: Cursor> Walk<'a, C> {
    /// Creates a walk over `[first, last)`.
    ///
    /// # Safety
    ///
    /// `last` must be reachable from `first`, and every element in the range must stay alive
    /// and unmodified for `'a`.
    pub unsafe fn new(first: C, last: C) -> Self {
        // SAFETY: forwarded from the caller.
        let n = unsafe { distance(first.clone(), last.clone()) };
        debug_assert!(n >= 0, "`last` must not precede `first`");
        // SAFETY: `n` is the exact distance.
        unsafe { Self::with_len(first, last, n as usize) }
    }

    /// Like [`Walk::new`], but trusts `len` instead of measuring the range.
    pub(crate) unsafe fn with_len(first: C, last: C, len: usize) -> Self {
        Walk {
            first,
            last,
            len,
            marker: PhantomData,
        }
    }

    /// The front cursor of the remaining range.
    pub fn range_start(&self) -> &C {
        &self.first
    }

    /// The back cursor (exclusive) of the remaining range.
    pub fn range_end(&self) -> &C {
        &self.last
    }
}

impl<C: Cursor> Clone for Walk<'_, C> {
    fn clone(&self) -> Self {
        Walk {
            first: self.first.clone(),
            last: self.last.clone(),
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<C: Cursor> fmt::Debug for Walk<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walk").field("len", &self.len).finish()
    }
}

impl<'a, C: Cursor> Iterator for Walk<'a, C> {
    type Item = &'a C::Value;

    #[inline]
    fn next(&mut self) -> Option<&'a C::Value> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0` means `first` is on a live element borrowed for `'a`.
        unsafe {
            let item = element(self.first.element_ptr());
            self.first.advance();
            self.len -= 1;
            Some(item)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }
}

impl<'a, C: BidirectionalCursor> DoubleEndedIterator for Walk<'a, C> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a C::Value> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: the position before `last` is a live element of the range.
        unsafe {
            self.last.retreat();
            self.len -= 1;
            Some(element(self.last.element_ptr()))
        }
    }
}

impl<C: Cursor> ExactSizeIterator for Walk<'_, C> {}

impl<C: Cursor> FusedIterator for Walk<'_, C> {}
