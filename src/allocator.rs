//! Typed raw-memory allocation.
//!
//! An [`Allocator<T>`] hands out uninitialized storage for `n` values of `T` and takes it back.
//! It never runs constructors or destructors on its own; [`Allocator::construct`] and
//! [`Allocator::destroy`] are separate primitives the owning container calls on individual slots.
use core::alloc::Layout;
use core::mem;
use core::ptr::{self, NonNull};

use alloc::alloc::{alloc, dealloc};

use crate::error::TryReserveError;

/// A typed allocator: `allocate(n)` returns room for exactly `n` values of `T`.
///
/// The allocator does not remember block sizes. Whoever allocated a block is responsible for
/// passing the same `n` back to [`deallocate`](Allocator::deallocate).
pub trait Allocator<T> {
    /// Allocates uninitialized storage for `n` values of `T`.
    ///
    /// # Errors
    ///
    /// * [`TryReserveError::CapacityOverflow`] if `n` values of `T` do not fit a [`Layout`].
    /// * [`TryReserveError::AllocError`] if the underlying memory source refused the request.
    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError>;

    /// Releases storage obtained from [`allocate`](Allocator::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `self.allocate(n)` with the very same `n`, and must not be used
    /// afterwards. Any values still living in the block are leaked, not dropped.
    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize);

    /// Constructs `value` in place at `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes and must not hold a live value (it would be leaked).
    #[inline]
    unsafe fn construct(&self, slot: *mut T, value: T) {
        unsafe { ptr::write(slot, value) }
    }

    /// Runs the destructor of the value at `slot`, leaving the slot uninitialized.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value, and that value must not be used or destroyed again.
    #[inline]
    unsafe fn destroy(&self, slot: *mut T) {
        unsafe { ptr::drop_in_place(slot) }
    }
}

/// The global heap, as exposed by [`alloc::alloc`].
///
/// Requests for zero slots, or for zero-sized `T`, never reach the heap: they are answered with a
/// dangling, well-aligned pointer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Global;

impl<T> Allocator<T> for Global {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, TryReserveError> {
        let layout = array_layout::<T>(n)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: the layout has a non-zero size.
        let raw = unsafe { alloc(layout) };
        NonNull::new(raw.cast::<T>()).ok_or(TryReserveError::AllocError { layout })
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        if n == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        // SAFETY: the caller guarantees `ptr` came from `allocate(n)`, which validated this
        // exact layout.
        unsafe {
            let size = n * mem::size_of::<T>();
            let layout = Layout::from_size_align_unchecked(size, mem::align_of::<T>());
            dealloc(ptr.as_ptr().cast(), layout);
        }
    }
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
#[inline]
pub(crate) fn array_layout<T>(n: usize) -> Result<Layout, TryReserveError> {
    Layout::array::<T>(n).map_err(|_| TryReserveError::CapacityOverflow)
}
