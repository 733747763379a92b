//! Implementation details for `Vector`: slot storage and the growth policy.
use core::cmp;
use core::mem;
use core::ptr::{self, NonNull};

use alloc::alloc::handle_alloc_error;

use crate::allocator::{Allocator, Global};
use crate::error::TryReserveError::{self, *};

/// Capacity of the first allocation made by amortized growth.
const MIN_NON_ZERO_CAP: usize = 2;

/// A low-level utility owning a block of `cap` slots obtained from an [`Allocator`].
///
/// `RawVec` knows nothing about which slots hold live values: relocation is told how many leading
/// slots to carry over, and dropping a `RawVec` releases the block without touching its contents.
pub(crate) struct RawVec<T, A: Allocator<T> = Global> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
}

unsafe impl<T: Send, A: Allocator<T> + Send> Send for RawVec<T, A> {}
unsafe impl<T: Sync, A: Allocator<T> + Sync> Sync for RawVec<T, A> {}

impl<T, A: Allocator<T>> RawVec<T, A> {
    /// Creates a `RawVec` with capacity 0 that has not allocated anything.
    pub(crate) const fn new_in(alloc: A) -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
        }
    }

    /// Creates a `RawVec` with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the requested capacity exceeds `isize::MAX` bytes.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    pub(crate) fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        let mut buf = Self::new_in(alloc);
        if capacity > 0 {
            handle_reserve(buf.relocate(0, capacity));
        }
        buf
    }

    /// Reconstitutes a `RawVec` from a pointer, capacity and allocator.
    ///
    /// # Safety
    ///
    /// `ptr` must have been obtained from `alloc.allocate(capacity)` (any pointer is fine when
    /// `capacity` is 0).
    pub(crate) unsafe fn from_raw_parts_in(ptr: *mut T, capacity: usize, alloc: A) -> Self {
        Self {
            ptr: unsafe { NonNull::new_unchecked(ptr) },
            cap: capacity,
            alloc,
        }
    }

    /// Gets a raw pointer to the start of the block. This is `NonNull::dangling()` while
    /// `capacity == 0`.
    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Gets the number of slots in the block.
    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Returns a shared reference to the allocator backing this `RawVec`.
    #[inline]
    pub(crate) fn alloc(&self) -> &A {
        &self.alloc
    }

    /// Ensures that the block holds at least `len + additional` slots, growing by the amortized
    /// policy (see [`next_capacity`]) when it does not.
    ///
    /// # Panics
    ///
    /// Panics if the requested capacity exceeds `isize::MAX` bytes.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    pub(crate) fn reserve(&mut self, len: usize, additional: usize) {
        handle_reserve(self.try_reserve(len, additional));
    }

    /// The same as `reserve`, but returns on errors instead of panicking or aborting.
    pub(crate) fn try_reserve(
        &mut self,
        len: usize,
        additional: usize,
    ) -> Result<(), TryReserveError> {
        if self.needs_to_grow(len, additional) {
            self.grow_amortized(len, additional)
        } else {
            Ok(())
        }
    }

    /// Ensures that the block holds at least `len + additional` slots. If it doesn't already,
    /// reallocates to exactly `len + additional`.
    ///
    /// # Panics
    ///
    /// Panics if the requested capacity exceeds `isize::MAX` bytes.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    pub(crate) fn reserve_exact(&mut self, len: usize, additional: usize) {
        handle_reserve(self.try_reserve_exact(len, additional));
    }

    /// The same as `reserve_exact`, but returns on errors instead of panicking or aborting.
    pub(crate) fn try_reserve_exact(
        &mut self,
        len: usize,
        additional: usize,
    ) -> Result<(), TryReserveError> {
        if self.needs_to_grow(len, additional) {
            self.grow_exact(len, additional)
        } else {
            Ok(())
        }
    }

    /// Returns if the buffer needs to grow to fulfill the needed extra capacity.
    fn needs_to_grow(&self, len: usize, additional: usize) -> bool {
        additional > self.cap.wrapping_sub(len)
    }

    fn grow_amortized(&mut self, len: usize, additional: usize) -> Result<(), TryReserveError> {
        // This is ensured by the calling contents.
        debug_assert!(additional > 0);

        let required_cap = len.checked_add(additional).ok_or(CapacityOverflow)?;
        let cap = cmp::max(next_capacity(self.cap), required_cap);
        log::trace!(
            "growing from {} to {} slots ({} required)",
            self.cap,
            cap,
            required_cap
        );
        self.relocate(len, cap)
    }

    fn grow_exact(&mut self, len: usize, additional: usize) -> Result<(), TryReserveError> {
        let cap = len.checked_add(additional).ok_or(CapacityOverflow)?;
        self.relocate(len, cap)
    }

    /// Moves the first `len` slots into a fresh block of `new_cap` slots, then releases the old
    /// block.
    ///
    /// On error nothing has changed.
    fn relocate(&mut self, len: usize, new_cap: usize) -> Result<(), TryReserveError> {
        debug_assert!(len <= self.cap && len <= new_cap);

        let new_ptr = self.alloc.allocate(new_cap)?;
        // SAFETY: the first `len` slots are initialized, the blocks are distinct, and both hold
        // at least `len` slots. After the copy the old slots are treated as uninitialized, so
        // each value keeps exactly one owner.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        }

        let old_ptr = mem::replace(&mut self.ptr, new_ptr);
        let old_cap = mem::replace(&mut self.cap, new_cap);
        if old_cap > 0 {
            // SAFETY: `old_ptr` was allocated by `self.alloc` with `old_cap` slots.
            unsafe { self.alloc.deallocate(old_ptr, old_cap) }
        }
        log::trace!(
            "relocated {} values: capacity {} -> {}",
            len,
            old_cap,
            new_cap
        );
        Ok(())
    }
}

/// The amortized growth step: 2 slots for the first allocation, then 1.5x (floored).
#[inline]
fn next_capacity(cap: usize) -> usize {
    if cap == 0 {
        MIN_NON_ZERO_CAP
    } else {
        cap.saturating_add(cap / 2)
    }
}

impl<T, A: Allocator<T>> Drop for RawVec<T, A> {
    /// Frees the memory owned by `RawVec` *without* trying to drop its contents.
    fn drop(&mut self) {
        if self.cap > 0 {
            log::trace!("releasing {} slots", self.cap);
            // SAFETY: the block was allocated by `self.alloc` with `self.cap` slots.
            unsafe { self.alloc.deallocate(self.ptr, self.cap) }
        }
    }
}

// Central place turning reservation failures into panics / aborts, so that the infallible
// growth paths share a single code location for them.
#[inline]
fn handle_reserve(result: Result<(), TryReserveError>) {
    match result {
        Err(CapacityOverflow) => capacity_overflow(),
        Err(AllocError { layout }) => handle_alloc_error(layout),
        Ok(()) => { /* yay */ }
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
