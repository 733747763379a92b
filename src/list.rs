//! A doubly-linked list with owned nodes, written `List<T>`.
//!
//! Every list owns one sentinel node that stands for the `end()` position. The nodes form a ring
//! through the sentinel, so `end().retreat()` reaches the last element and `begin()` of an empty
//! list is `end()`.
//!
//! ```
//! use rcontainers::List;
//!
//! let mut list = List::new();
//! list.push_back(2);
//! list.push_back(3);
//! list.push_front(1);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(list.walk_rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
//! assert_eq!(list.pop_back(), Some(3));
//! ```
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr::NonNull;

use alloc::boxed::Box;

use crate::cursor::{element, element_mut, BidirectionalCursor, Category, Cursor, Walk};
use crate::reverse::ReverseIterator;

// `value` comes first so that a node pointer is also a pointer to its value.
#[repr(C)]
struct Node<T> {
    value: MaybeUninit<T>,
    prev: NonNull<Node<T>>,
    next: NonNull<Node<T>>,
}

/// A doubly-linked list.
///
/// Positions are given by [`ListIterator`] cursors. Inserting never invalidates a cursor;
/// erasing invalidates only cursors to the erased nodes.
pub struct List<T> {
    sentinel: NonNull<Node<T>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

/// A bidirectional cursor into a [`List`].
pub struct ListIterator<T> {
    node: NonNull<Node<T>>,
}

impl<T> List<T> {
    /// Creates an empty list. Only the sentinel node is allocated.
    pub fn new() -> Self {
        let sentinel = NonNull::from(Box::leak(Box::new(Node {
            value: MaybeUninit::uninit(),
            prev: NonNull::dangling(),
            next: NonNull::dangling(),
        })));
        // SAFETY: freshly allocated; the ring of one closes on itself.
        unsafe {
            (*sentinel.as_ptr()).prev = sentinel;
            (*sentinel.as_ptr()).next = sentinel;
        }
        List {
            sentinel,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: a non-empty list starts with a live node.
            unsafe { Some(self.begin().get()) }
        }
    }

    /// Returns the first element mutably, or `None` if the list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            unsafe { Some(self.begin().get_mut()) }
        }
    }

    /// Returns the last element, or `None` if the list is empty.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            // SAFETY: the node before the sentinel is live.
            unsafe { Some(self.last_node().get()) }
        }
    }

    /// Returns the last element mutably, or `None` if the list is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            unsafe { Some(self.last_node().get_mut()) }
        }
    }

    /// Prepends an element.
    pub fn push_front(&mut self, value: T) {
        let first = self.begin().node;
        // SAFETY: `first` belongs to this list.
        unsafe { self.link_before(first, value) };
    }

    /// Appends an element.
    pub fn push_back(&mut self, value: T) {
        // SAFETY: the sentinel belongs to this list.
        unsafe { self.link_before(self.sentinel, value) };
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            let first = self.begin().node;
            // SAFETY: `first` is a live node of this list.
            unsafe { Some(self.unlink(first)) }
        }
    }

    /// Removes the last element and returns it, or `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            let last = self.last_node().node;
            // SAFETY: `last` is a live node of this list.
            unsafe { Some(self.unlink(last)) }
        }
    }

    /// Removes every element, front to back.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Cursor to the first element (`end()` if the list is empty).
    #[inline]
    pub fn begin(&self) -> ListIterator<T> {
        // SAFETY: the sentinel lives as long as the list.
        ListIterator {
            node: unsafe { (*self.sentinel.as_ptr()).next },
        }
    }

    /// Cursor to the sentinel, one past the last element.
    #[inline]
    pub fn end(&self) -> ListIterator<T> {
        ListIterator {
            node: self.sentinel,
        }
    }

    /// Reverse cursor to the last element.
    #[inline]
    pub fn rbegin(&self) -> ReverseIterator<ListIterator<T>> {
        ReverseIterator::new(self.end())
    }

    /// Reverse cursor one before the first element.
    #[inline]
    pub fn rend(&self) -> ReverseIterator<ListIterator<T>> {
        ReverseIterator::new(self.begin())
    }

    /// Borrowing iterator over `[begin(), end())`.
    #[inline]
    pub fn walk(&self) -> Walk<'_, ListIterator<T>> {
        // SAFETY: the range covers exactly the live nodes, borrowed along with `self`.
        unsafe { Walk::with_len(self.begin(), self.end(), self.len) }
    }

    /// Borrowing iterator over `[rbegin(), rend())`.
    #[inline]
    pub fn walk_rev(&self) -> Walk<'_, ReverseIterator<ListIterator<T>>> {
        unsafe { Walk::with_len(self.rbegin(), self.rend(), self.len) }
    }

    /// Front-to-back borrowing iterator; same as [`walk`](List::walk).
    #[inline]
    pub fn iter(&self) -> Walk<'_, ListIterator<T>> {
        self.walk()
    }

    /// Inserts `value` before `pos` and returns a cursor to it.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid cursor into this list (`end()` included).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rcontainers::List;
    /// let mut list: List<i32> = [1, 3].into_iter().collect();
    /// let mut pos = list.begin();
    /// unsafe {
    ///     pos.inc();
    ///     let it = list.insert(pos, 2);
    ///     assert_eq!(*it.get(), 2);
    /// }
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub unsafe fn insert(&mut self, pos: ListIterator<T>, value: T) -> ListIterator<T> {
        ListIterator {
            node: unsafe { self.link_before(pos.node, value) },
        }
    }

    /// Inserts `count` clones of `value` before `pos` and returns a cursor to the first of them,
    /// or `pos` if `count` is 0.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid cursor into this list (`end()` included).
    pub unsafe fn insert_n(
        &mut self,
        pos: ListIterator<T>,
        count: usize,
        value: T,
    ) -> ListIterator<T>
    where
        T: Clone,
    {
        unsafe { self.insert_range(pos, core::iter::repeat_n(value, count)) }
    }

    /// Inserts every item of `items` before `pos`, keeping their order, and returns a cursor to
    /// the first inserted element, or `pos` if nothing was inserted.
    ///
    /// Each item is linked in as soon as it is produced.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid cursor into this list (`end()` included).
    pub unsafe fn insert_range<I>(&mut self, pos: ListIterator<T>, items: I) -> ListIterator<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut first = None;
        for item in items {
            let node = unsafe { self.link_before(pos.node, item) };
            if first.is_none() {
                first = Some(node);
            }
        }
        first.map_or(pos, |node| ListIterator { node })
    }

    /// Removes the element at `pos` and returns a cursor to the element after it.
    ///
    /// # Safety
    ///
    /// `pos` must be a valid cursor into this list.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is `end()`.
    pub unsafe fn erase(&mut self, pos: ListIterator<T>) -> ListIterator<T> {
        assert!(pos.node != self.sentinel, "cannot erase the end position");
        // SAFETY: forwarded from the caller; `pos` is not the sentinel.
        unsafe {
            let next = (*pos.node.as_ptr()).next;
            drop(self.unlink(pos.node));
            ListIterator { node: next }
        }
    }

    /// Removes the elements in `[first, last)` and returns `last`.
    ///
    /// # Safety
    ///
    /// Both cursors must be valid cursors into this list, with `last` reachable from `first`.
    pub unsafe fn erase_range(
        &mut self,
        mut first: ListIterator<T>,
        last: ListIterator<T>,
    ) -> ListIterator<T> {
        while first != last {
            first = unsafe { self.erase(first) };
        }
        last
    }

    /// Grows or shrinks the list to `count` elements, appending clones of `value` or dropping
    /// from the back.
    pub fn resize(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        while self.len > count {
            self.pop_back();
        }
        if self.len < count {
            let extra = count - self.len;
            // SAFETY: `end()` belongs to this list.
            unsafe { self.insert_n(self.end(), extra, value) };
        }
    }

    fn last_node(&self) -> ListIterator<T> {
        // SAFETY: the sentinel lives as long as the list.
        ListIterator {
            node: unsafe { (*self.sentinel.as_ptr()).prev },
        }
    }

    /// Allocates a node for `value` and links it right before `next`.
    unsafe fn link_before(&mut self, next: NonNull<Node<T>>, value: T) -> NonNull<Node<T>> {
        unsafe {
            let prev = (*next.as_ptr()).prev;
            let node = NonNull::from(Box::leak(Box::new(Node {
                value: MaybeUninit::new(value),
                prev,
                next,
            })));
            (*prev.as_ptr()).next = node;
            (*next.as_ptr()).prev = node;
            self.len += 1;
            node
        }
    }

    /// Unlinks the live node `node`, frees it and returns its value.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        unsafe {
            let node = *Box::from_raw(node.as_ptr());
            (*node.prev.as_ptr()).next = node.next;
            (*node.next.as_ptr()).prev = node.prev;
            self.len -= 1;
            node.value.assume_init()
        }
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the sentinel was leaked from a `Box` in `new` and its value is uninitialized.
        unsafe { drop(Box::from_raw(self.sentinel.as_ptr())) }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for x in self.iter() {
            x.hash(state);
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push_back(x);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(s: [T; N]) -> Self {
        s.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Walk<'a, ListIterator<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

/// An owning iterator over the elements of a [`List`].
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

////////////////////////////////////////////////////////////////////////////////
// ListIterator
////////////////////////////////////////////////////////////////////////////////

impl<T> ListIterator<T> {
    /// Address of the element under the cursor. Never dereference it at `end()`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.node.as_ptr().cast::<T>()
    }

    /// Returns the element under the cursor.
    ///
    /// # Safety
    ///
    /// The cursor must point at a live element (not `end()`), and no mutable reference to it may
    /// exist during `'a`.
    #[inline]
    pub unsafe fn get<'a>(&self) -> &'a T {
        unsafe { element(self.as_ptr()) }
    }

    /// Returns the element under the cursor mutably.
    ///
    /// # Safety
    ///
    /// The cursor must point at a live element (not `end()`), and no other reference to it may
    /// exist during `'a`.
    #[inline]
    pub unsafe fn get_mut<'a>(&self) -> &'a mut T {
        unsafe { element_mut(self.node.as_ptr().cast::<T>()) }
    }

    /// Pre-increment: moves to the next node.
    ///
    /// # Safety
    ///
    /// The list must be alive.
    #[inline]
    pub unsafe fn inc(&mut self) -> &mut Self {
        unsafe { self.advance() };
        self
    }

    /// Pre-decrement: moves to the previous node.
    ///
    /// # Safety
    ///
    /// The list must be alive.
    #[inline]
    pub unsafe fn dec(&mut self) -> &mut Self {
        unsafe { self.retreat() };
        self
    }
}

impl<T> Clone for ListIterator<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListIterator<T> {}

impl<T> PartialEq for ListIterator<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for ListIterator<T> {}

impl<T> Hash for ListIterator<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state)
    }
}

impl<T> fmt::Debug for ListIterator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ListIterator").field(&self.node).finish()
    }
}

impl<T> Cursor for ListIterator<T> {
    type Value = T;

    const CATEGORY: Category = Category::Bidirectional;

    #[inline]
    unsafe fn advance(&mut self) {
        self.node = unsafe { (*self.node.as_ptr()).next };
    }

    #[inline]
    unsafe fn element_ptr(&self) -> *const T {
        self.as_ptr()
    }
}

impl<T> BidirectionalCursor for ListIterator<T> {
    #[inline]
    unsafe fn retreat(&mut self) {
        self.node = unsafe { (*self.node.as_ptr()).prev };
    }
}
