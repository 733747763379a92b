//! A cursor adapter walking its underlying cursor backward.
//!
//! `ReverseIterator(c)` stands for the position just before `c`: dereferencing it reads
//! `*(c - 1)`. Reversing `[begin, end)` as `[ReverseIterator(end), ReverseIterator(begin))`
//! therefore visits `end - 1, end - 2, ..., begin` and never reads the address `begin - 1`.
//!
//! ```
//! use rcontainers::vector;
//!
//! let v = vector![1, 2, 3];
//! let mut it = v.rbegin();
//!
//! assert_eq!(unsafe { *it.get() }, 3);
//! it.inc();
//! assert_eq!(unsafe { *it.get() }, 2);
//! assert_eq!(v.rend() - it, 2);
//! ```
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cursor::{
    element, BidirectionalCursor, Category, Cursor, Difference, RandomAccessCursor,
};

/// Wraps a bidirectional-or-better cursor and inverts its direction.
///
/// Equality compares the wrapped positions directly. Ordering and arithmetic are inverted:
/// `rev + k` wraps `source - k`, and `a < b` exactly when `a.base() > b.base()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReverseIterator<C> {
    source: C,
}

impl<C> ReverseIterator<C> {
    /// Wraps `source`. The new cursor reads the element before `source`.
    #[inline]
    pub const fn new(source: C) -> Self {
        ReverseIterator { source }
    }

    /// The wrapped cursor.
    #[inline]
    pub fn base(&self) -> &C {
        &self.source
    }

    /// Unwraps the underlying cursor.
    #[inline]
    pub fn into_base(self) -> C {
        self.source
    }
}

impl<C: BidirectionalCursor> ReverseIterator<C> {
    /// Returns the element before the wrapped position.
    ///
    /// # Safety
    ///
    /// The wrapped cursor must not be at the beginning of its range, and the element before it
    /// must be alive and not mutably borrowed during `'a`.
    #[inline]
    pub unsafe fn get<'a>(&self) -> &'a C::Value {
        let mut it = self.source.clone();
        // SAFETY: forwarded from the caller.
        unsafe {
            it.retreat();
            element(it.element_ptr())
        }
    }
}

impl<C: RandomAccessCursor> ReverseIterator<C> {
    /// Address of the element this cursor reads.
    #[inline]
    pub fn as_ptr(&self) -> *const C::Value {
        self.source.jump(-1).address()
    }

    /// Returns the element `k` positions further along the reversed range, i.e.
    /// `*(base - k - 1)`.
    ///
    /// # Safety
    ///
    /// Same as [`get`](Self::get), for the target position.
    #[inline]
    pub unsafe fn at<'a>(&self, k: Difference) -> &'a C::Value {
        unsafe { element(self.source.jump(-k - 1).address()) }
    }

    /// Pre-increment: steps the wrapped cursor backward.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.source = self.source.jump(-1);
        self
    }

    /// Pre-decrement: steps the wrapped cursor forward.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.source = self.source.jump(1);
        self
    }

    /// Post-increment: returns the old position.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let old = self.clone();
        self.inc();
        old
    }

    /// Post-decrement: returns the old position.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let old = self.clone();
        self.dec();
        old
    }
}

impl<C: PartialOrd> PartialOrd for ReverseIterator<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.source.partial_cmp(&self.source)
    }
}

impl<C: Ord> Ord for ReverseIterator<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other.source.cmp(&self.source)
    }
}

impl<C: RandomAccessCursor> AddAssign<Difference> for ReverseIterator<C> {
    #[inline]
    fn add_assign(&mut self, n: Difference) {
        self.source = self.source.jump(-n);
    }
}

impl<C: RandomAccessCursor> SubAssign<Difference> for ReverseIterator<C> {
    #[inline]
    fn sub_assign(&mut self, n: Difference) {
        self.source = self.source.jump(n);
    }
}

impl<C: RandomAccessCursor> Add<Difference> for ReverseIterator<C> {
    type Output = ReverseIterator<C>;

    #[inline]
    fn add(self, n: Difference) -> ReverseIterator<C> {
        ReverseIterator::new(self.source.jump(-n))
    }
}

impl<C: RandomAccessCursor> Add<ReverseIterator<C>> for Difference {
    type Output = ReverseIterator<C>;

    #[inline]
    fn add(self, it: ReverseIterator<C>) -> ReverseIterator<C> {
        it + self
    }
}

impl<C: RandomAccessCursor> Sub<Difference> for ReverseIterator<C> {
    type Output = ReverseIterator<C>;

    #[inline]
    fn sub(self, n: Difference) -> ReverseIterator<C> {
        ReverseIterator::new(self.source.jump(n))
    }
}

impl<C: RandomAccessCursor> Sub for ReverseIterator<C> {
    type Output = Difference;

    /// `a - b` is `b.base() - a.base()`.
    #[inline]
    fn sub(self, other: ReverseIterator<C>) -> Difference {
        other.source.distance_from(&self.source)
    }
}

impl<C: BidirectionalCursor> Cursor for ReverseIterator<C> {
    type Value = C::Value;

    const CATEGORY: Category = C::CATEGORY;

    #[inline]
    unsafe fn advance(&mut self) {
        unsafe { self.source.retreat() }
    }

    #[inline]
    unsafe fn element_ptr(&self) -> *const C::Value {
        let mut it = self.source.clone();
        unsafe {
            it.retreat();
            it.element_ptr()
        }
    }

    #[inline]
    fn jump_distance(&self, last: &Self) -> Option<Difference> {
        last.source.jump_distance(&self.source)
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for ReverseIterator<C> {
    #[inline]
    unsafe fn retreat(&mut self) {
        unsafe { self.source.advance() }
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for ReverseIterator<C> {
    #[inline]
    fn jump(&self, n: Difference) -> Self {
        ReverseIterator::new(self.source.jump(-n))
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> Difference {
        origin.source.distance_from(&self.source)
    }

    #[inline]
    fn address(&self) -> *const C::Value {
        self.as_ptr()
    }
}
