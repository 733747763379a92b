/// Creates a [`Vector`](crate::Vector) containing the arguments.
///
/// - Create a [`Vector`](crate::Vector) containing a given list of elements:
///
/// ```
/// # use rcontainers::vector;
/// let v = vector![1, 2, 3];
/// assert_eq!(v[0], 1);
/// assert_eq!(v[1], 2);
/// assert_eq!(v[2], 3);
/// ```
///
/// - Create a [`Vector`](crate::Vector) from a given element and size:
///
/// ```
/// # use rcontainers::vector;
/// let v = vector![1; 3];
/// assert_eq!(v, [1, 1, 1]);
/// ```
///
/// The list form reserves exactly as many slots as there are elements and moves each element in.
#[macro_export]
macro_rules! vector {
    () => (
        $crate::Vector::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::vector::from_elem($elem, $n)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::Vector::from([$($x),+])
    );
}

// Random-access arithmetic shared by `VectorIterator` and `ConstVectorIterator`. `$raw` is the
// pointer type stored in the `ptr` field.
macro_rules! vector_cursor {
    ($name:ident, $raw:ty) => {
        impl<T> $name<T> {
            #[inline]
            pub(crate) const fn from_raw(ptr: $raw) -> Self {
                $name { ptr }
            }

            /// Address of the slot under the cursor (`operator->`).
            #[inline]
            pub fn as_ptr(&self) -> *const T {
                self.ptr as *const T
            }

            /// Returns the element under the cursor.
            ///
            /// # Safety
            ///
            /// The cursor must point at a live element, and no mutable reference to it may exist
            /// during `'a`. Any insertion, removal or reallocation since the cursor was obtained
            /// invalidates it.
            #[inline]
            pub unsafe fn get<'a>(&self) -> &'a T {
                unsafe { crate::cursor::element(self.as_ptr()) }
            }

            /// Returns the element `k` positions away; `it.at(k)` reads the same slot as
            /// `(it + k).get()`.
            ///
            /// # Safety
            ///
            /// Same as [`get`](Self::get), for the target position.
            #[inline]
            pub unsafe fn at<'a>(&self, k: crate::cursor::Difference) -> &'a T {
                unsafe { (*self + k).get() }
            }

            /// Pre-increment: moves one position forward and returns the moved cursor.
            #[inline]
            pub fn inc(&mut self) -> &mut Self {
                *self += 1;
                self
            }

            /// Pre-decrement: moves one position backward and returns the moved cursor.
            #[inline]
            pub fn dec(&mut self) -> &mut Self {
                *self -= 1;
                self
            }

            /// Post-increment: moves one position forward and returns the old position.
            #[inline]
            pub fn post_inc(&mut self) -> Self {
                let old = *self;
                *self += 1;
                old
            }

            /// Post-decrement: moves one position backward and returns the old position.
            #[inline]
            pub fn post_dec(&mut self) -> Self {
                let old = *self;
                *self -= 1;
                old
            }
        }

        impl<T> Clone for $name<T> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> Default for $name<T> {
            /// A cursor pointing nowhere (null).
            fn default() -> Self {
                $name::from_raw(core::ptr::null_mut::<T>() as $raw)
            }
        }

        impl<T> core::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.ptr).finish()
            }
        }

        impl<T> PartialEq for $name<T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.ptr == other.ptr
            }
        }

        impl<T> Eq for $name<T> {}

        impl<T> PartialOrd for $name<T> {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T> Ord for $name<T> {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.ptr.cmp(&other.ptr)
            }
        }

        impl<T> core::hash::Hash for $name<T> {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                self.ptr.hash(state)
            }
        }

        impl<T> core::ops::AddAssign<crate::cursor::Difference> for $name<T> {
            #[inline]
            fn add_assign(&mut self, n: crate::cursor::Difference) {
                self.ptr = crate::cursor::step(self.ptr as *const T, n) as $raw;
            }
        }

        impl<T> core::ops::SubAssign<crate::cursor::Difference> for $name<T> {
            #[inline]
            fn sub_assign(&mut self, n: crate::cursor::Difference) {
                self.ptr = crate::cursor::step(self.ptr as *const T, n.wrapping_neg()) as $raw;
            }
        }

        impl<T> core::ops::Add<crate::cursor::Difference> for $name<T> {
            type Output = $name<T>;

            #[inline]
            fn add(mut self, n: crate::cursor::Difference) -> $name<T> {
                self += n;
                self
            }
        }

        impl<T> core::ops::Add<$name<T>> for crate::cursor::Difference {
            type Output = $name<T>;

            #[inline]
            fn add(self, it: $name<T>) -> $name<T> {
                it + self
            }
        }

        impl<T> core::ops::Sub<crate::cursor::Difference> for $name<T> {
            type Output = $name<T>;

            #[inline]
            fn sub(mut self, n: crate::cursor::Difference) -> $name<T> {
                self -= n;
                self
            }
        }

        impl<T> core::ops::Sub for $name<T> {
            type Output = crate::cursor::Difference;

            #[inline]
            fn sub(self, origin: $name<T>) -> crate::cursor::Difference {
                crate::cursor::span(origin.ptr as *const T, self.ptr as *const T)
            }
        }

        impl<T> crate::cursor::Cursor for $name<T> {
            type Value = T;

            const CATEGORY: crate::cursor::Category = crate::cursor::Category::RandomAccess;

            #[inline]
            unsafe fn advance(&mut self) {
                *self += 1;
            }

            #[inline]
            unsafe fn element_ptr(&self) -> *const T {
                self.as_ptr()
            }

            #[inline]
            fn jump_distance(&self, last: &Self) -> Option<crate::cursor::Difference> {
                Some(*last - *self)
            }
        }

        impl<T> crate::cursor::BidirectionalCursor for $name<T> {
            #[inline]
            unsafe fn retreat(&mut self) {
                *self -= 1;
            }
        }

        impl<T> crate::cursor::RandomAccessCursor for $name<T> {
            #[inline]
            fn jump(&self, n: crate::cursor::Difference) -> Self {
                *self + n
            }

            #[inline]
            fn distance_from(&self, origin: &Self) -> crate::cursor::Difference {
                *self - *origin
            }

            #[inline]
            fn address(&self) -> *const T {
                self.as_ptr()
            }
        }
    };
}
