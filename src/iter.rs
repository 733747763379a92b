//! Random-access cursors over a [`Vector`](crate::Vector)'s storage.
//!
//! Both cursor types are a thin wrapper around one address into the buffer. All arithmetic and
//! comparison is plain (wrapping) pointer arithmetic; nothing is bounds checked, and reading
//! through a cursor is `unsafe`.
//!
//! ```
//! use rcontainers::vector;
//!
//! let v = vector![10, 20, 30, 40];
//! let mut it = v.begin();
//!
//! it += 2;
//! assert_eq!(unsafe { *it.get() }, 30);
//! assert_eq!(unsafe { *it.at(-1) }, 20);
//! assert_eq!(v.end() - it, 2);
//! assert!(v.begin() < it);
//! ```
use crate::cursor::element_mut;

/// A mutable random-access cursor into a vector (`iterator`).
pub struct VectorIterator<T> {
    ptr: *mut T,
}

/// A read-only random-access cursor into a vector (`const_iterator`).
pub struct ConstVectorIterator<T> {
    ptr: *const T,
}

vector_cursor!(VectorIterator, *mut T);
vector_cursor!(ConstVectorIterator, *const T);

impl<T> VectorIterator<T> {
    /// Mutable address of the slot under the cursor.
    ///
    /// Writing through it is only sound while the vector could be borrowed mutably, i.e. while
    /// no shared reference to the vector or its elements is in use.
    #[inline]
    pub fn as_mut_ptr(&self) -> *mut T {
        self.ptr
    }

    /// Returns the element under the cursor mutably.
    ///
    /// # Safety
    ///
    /// The cursor must point at a live element, and no other reference to it may exist during
    /// `'a`. Cursors are handed out by `&self` methods, so the vector must also not be shared:
    /// the caller needs the access a `&mut Vector` would give.
    #[inline]
    pub unsafe fn get_mut<'a>(&self) -> &'a mut T {
        unsafe { element_mut(self.ptr) }
    }
}

impl<T> From<VectorIterator<T>> for ConstVectorIterator<T> {
    #[inline]
    fn from(it: VectorIterator<T>) -> Self {
        ConstVectorIterator::from_raw(it.ptr)
    }
}
