use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};
use core::ops::{
    Bound, Deref, Index, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo,
    RangeToInclusive,
};
use core::slice;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::arena::{self, Arena};
use crate::cast::{ElementCast, Here, Plain};
use crate::error::BoundsError;

/// A read-only view of `len` consecutive `T`s owned by someone else.
///
/// The view is a pointer and a length, `Copy` regardless of `T`, and valid for as
/// long as the storage it borrows (`'a`). Views derived from it by slicing borrow
/// the same storage for the same `'a`, so they outlive the view they came from.
///
/// Out-of-bounds indexing and slicing panic; the `try_*` variants return a
/// [`BoundsError`] instead. Nothing is ever clamped.
///
/// See [crate-level docs](crate) for examples.
pub struct ArrayRef<'a, T> {
    slice: &'a [T],
}

static_assertions::assert_eq_size!(ArrayRef<'static, u8>, [usize; 2]);
static_assertions::assert_eq_size!(ArrayRef<'static, u128>, &'static [u128]);
static_assertions::assert_impl_all!(ArrayRef<'static, i32>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(ArrayRef<'static, core::cell::Cell<i32>>: Sync);

// --- Manual Clone/Copy/Default to avoid T: Clone/Copy/Default bounds ---

impl<T> Clone for ArrayRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayRef<'_, T> {}

impl<T> Default for ArrayRef<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Construction ---

impl<'a, T> ArrayRef<'a, T> {
    /// The empty view.
    #[inline]
    pub const fn new() -> Self {
        ArrayRef { slice: &[] }
    }

    /// Creates a view of `len` elements starting at `ptr`.
    ///
    /// A null `ptr` is accepted when `len` is zero and produces the empty view.
    ///
    /// # Safety
    ///
    /// When `len > 0`, `ptr` must be non-null, aligned, and point to `len`
    /// initialized `T`s that stay valid and unmutated for `'a`. The same rules as
    /// [`core::slice::from_raw_parts`] apply.
    #[inline]
    pub const unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        if len == 0 {
            return Self::new();
        }
        // SAFETY: upheld by the caller.
        ArrayRef {
            slice: unsafe { slice::from_raw_parts(ptr, len) },
        }
    }

    #[inline]
    pub const fn from_slice(slice: &'a [T]) -> Self {
        ArrayRef { slice }
    }

    /// Views a fixed-size array. `N` may be zero.
    #[inline]
    pub const fn from_array<const N: usize>(array: &'a [T; N]) -> Self {
        ArrayRef { slice: array }
    }

    /// Views a single element as a one-element array.
    #[inline]
    pub const fn from_ref(element: &'a T) -> Self {
        ArrayRef {
            slice: slice::from_ref(element),
        }
    }

    /// Views the elements of any contiguous container.
    ///
    /// ```
    /// use melbi_array_ref::ArrayRef;
    ///
    /// let boxed: Box<[u8]> = Box::new([1, 2, 3]);
    /// let view = ArrayRef::from_container(&boxed);
    /// assert_eq!(view, [1, 2, 3]);
    ///
    /// let empty: Vec<u8> = Vec::new();
    /// assert!(ArrayRef::from_container(&empty).is_empty());
    /// ```
    #[inline]
    pub fn from_container<C>(container: &'a C) -> Self
    where
        C: AsRef<[T]> + ?Sized,
    {
        ArrayRef {
            slice: container.as_ref(),
        }
    }
}

impl<'a, T> From<&'a [T]> for ArrayRef<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        ArrayRef::from_slice(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ArrayRef<'a, T> {
    fn from(array: &'a [T; N]) -> Self {
        ArrayRef::from_array(array)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T> From<&'a Vec<T>> for ArrayRef<'a, T> {
    fn from(vec: &'a Vec<T>) -> Self {
        ArrayRef::from_slice(vec)
    }
}

impl<'a, T> From<ArrayRef<'a, T>> for &'a [T] {
    fn from(view: ArrayRef<'a, T>) -> Self {
        view.slice
    }
}

// --- Access ---

impl<'a, T> ArrayRef<'a, T> {
    #[inline]
    pub const fn len(&self) -> usize {
        self.slice.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Returns the address of the first element.
    ///
    /// The pointer must not be dereferenced when the view is empty.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.slice.as_ptr()
    }

    /// Returns the viewed elements, borrowed for the storage's lifetime rather than
    /// the view's.
    #[inline]
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.slice.get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.slice.iter()
    }

    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.slice.to_vec()
    }
}

impl<T> Index<usize> for ArrayRef<'_, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.slice.get(index) {
            Some(element) => element,
            None => panic!(
                "{}",
                BoundsError::Index {
                    index,
                    len: self.len(),
                }
            ),
        }
    }
}

// An explicit `Index<usize>` hides the slice's range indexing behind `Deref`, so
// every range type gets its own impl.
macro_rules! index_by_range {
    ($($range:ty),* $(,)?) => {
        $(
            impl<T> Index<$range> for ArrayRef<'_, T> {
                type Output = [T];

                #[track_caller]
                fn index(&self, range: $range) -> &[T] {
                    self.range(range).slice
                }
            }
        )*
    };
}

index_by_range!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>,
    RangeFull,
);

impl<T> Deref for ArrayRef<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.slice
    }
}

impl<T> AsRef<[T]> for ArrayRef<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.slice
    }
}

impl<'a, T> IntoIterator for ArrayRef<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

impl<'a, T> IntoIterator for &ArrayRef<'a, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slice.iter()
    }
}

// --- Slicing ---

/// Unwraps a bounds check, panicking with the error's message at the caller.
#[track_caller]
fn expect_in_bounds<T>(result: Result<T, BoundsError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<'a, T> ArrayRef<'a, T> {
    /// Returns the `len` elements starting at `start`.
    ///
    /// # Panics
    ///
    /// If `start + len` is past the end of the view.
    #[track_caller]
    pub fn slice(&self, start: usize, len: usize) -> Self {
        expect_in_bounds(self.try_slice(start, len))
    }

    pub fn try_slice(&self, start: usize, len: usize) -> Result<Self, BoundsError> {
        BoundsError::check_range(start, len, self.len())?;
        let slice: &'a [T] = self.slice;
        Ok(ArrayRef {
            slice: &slice[start..start + len],
        })
    }

    /// Returns every element from `start` to the end.
    #[track_caller]
    pub fn slice_from(&self, start: usize) -> Self {
        expect_in_bounds(self.try_slice_from(start))
    }

    pub fn try_slice_from(&self, start: usize) -> Result<Self, BoundsError> {
        let len = self.len().checked_sub(start).ok_or(BoundsError::Range {
            start,
            len: 0,
            size: self.len(),
        })?;
        self.try_slice(start, len)
    }

    /// Returns the elements covered by `range`, like slice range indexing.
    ///
    /// ```
    /// use melbi_array_ref::ArrayRef;
    ///
    /// let numbers = [1, 2, 3, 4, 5];
    /// let view = ArrayRef::from(&numbers);
    /// assert!(view.range(1..=3).equals_values([2, 3, 4]));
    /// assert!(view.range(..2).equals_values([1, 2]));
    /// ```
    #[track_caller]
    pub fn range<R: RangeBounds<usize>>(&self, range: R) -> Self {
        expect_in_bounds(self.try_range(range))
    }

    pub fn try_range<R: RangeBounds<usize>>(&self, range: R) -> Result<Self, BoundsError> {
        let size = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1).ok_or(BoundsError::Range {
                start,
                len: 0,
                size,
            })?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1).ok_or(BoundsError::Range {
                start,
                len: usize::MAX - start,
                size,
            })?,
            Bound::Excluded(&end) => end,
            Bound::Unbounded => size,
        };
        BoundsError::check_range(start, 0, size)?;
        let len = end
            .checked_sub(start)
            .ok_or(BoundsError::Reversed { start, end })?;
        self.try_slice(start, len)
    }

    /// Returns the view without its first `n` elements.
    #[track_caller]
    pub fn drop_front(&self, n: usize) -> Self {
        expect_in_bounds(self.try_drop_front(n))
    }

    pub fn try_drop_front(&self, n: usize) -> Result<Self, BoundsError> {
        BoundsError::check_count(n, self.len())?;
        self.try_slice_from(n)
    }

    /// Returns the view without its last `n` elements.
    ///
    /// ```
    /// use melbi_array_ref::ArrayRef;
    ///
    /// let numbers = [4, 8, 15, 16, 23, 42];
    /// let view = ArrayRef::from(&numbers);
    /// assert!(view.drop_back(1).equals(ArrayRef::from(&numbers[..5])));
    /// ```
    #[track_caller]
    pub fn drop_back(&self, n: usize) -> Self {
        expect_in_bounds(self.try_drop_back(n))
    }

    pub fn try_drop_back(&self, n: usize) -> Result<Self, BoundsError> {
        BoundsError::check_count(n, self.len())?;
        self.try_slice(0, self.len() - n)
    }

    /// Returns the first `n` elements.
    #[track_caller]
    pub fn take_front(&self, n: usize) -> Self {
        expect_in_bounds(self.try_take_front(n))
    }

    pub fn try_take_front(&self, n: usize) -> Result<Self, BoundsError> {
        BoundsError::check_count(n, self.len())?;
        self.try_slice(0, n)
    }

    /// Returns the last `n` elements.
    #[track_caller]
    pub fn take_back(&self, n: usize) -> Self {
        expect_in_bounds(self.try_take_back(n))
    }

    pub fn try_take_back(&self, n: usize) -> Result<Self, BoundsError> {
        BoundsError::check_count(n, self.len())?;
        self.try_slice(self.len() - n, n)
    }
}

// --- Equality ---

impl<'a, T> ArrayRef<'a, T> {
    /// Returns whether both views have the same length and pairwise equal elements.
    ///
    /// Addresses are not compared: two empty views are always equal.
    pub fn equals<U>(&self, other: ArrayRef<'_, U>) -> bool
    where
        T: PartialEq<U>,
    {
        self.slice == other.slice
    }

    /// Returns whether the view holds exactly `values`, in order.
    ///
    /// ```
    /// use melbi_array_ref::ArrayRef;
    ///
    /// let a1 = [1, 2, 3, 4, 5, 6, 7, 8];
    /// let view = ArrayRef::from(&a1);
    /// assert!(view.equals_values([1, 2, 3, 4, 5, 6, 7, 8]));
    /// assert!(!view.equals_values([1, 2, 3, 4, 5, 6, 7]));
    /// assert!(!view.equals_values([1, 2, 3, 4, 5, 6, 7, 8, 9]));
    /// ```
    pub fn equals_values<U, const N: usize>(&self, values: [U; N]) -> bool
    where
        T: PartialEq<U>,
    {
        self.slice == values.as_slice()
    }
}

impl<T, U> PartialEq<ArrayRef<'_, U>> for ArrayRef<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &ArrayRef<'_, U>) -> bool {
        self.equals(*other)
    }
}

impl<T: Eq> Eq for ArrayRef<'_, T> {}

impl<T, U, const N: usize> PartialEq<[U; N]> for ArrayRef<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.slice == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for ArrayRef<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.slice == other
    }
}

impl<T, U> PartialEq<&[U]> for ArrayRef<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.slice == *other
    }
}

#[cfg(feature = "alloc")]
impl<T, U> PartialEq<Vec<U>> for ArrayRef<'_, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.slice == other.as_slice()
    }
}

impl<T: Hash> Hash for ArrayRef<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slice.hash(state);
    }
}

impl<T: Debug> Debug for ArrayRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slice).finish()
    }
}

// --- Copy-out ---

impl<T> ArrayRef<'_, T> {
    /// Clones the elements into `arena` and returns a view of the copies.
    ///
    /// The result [`equals`](Self::equals) `self` but never aliases it, unless both
    /// are empty. The original storage is untouched.
    ///
    /// Arenas don't run destructors: elements that own resources are leaked when
    /// the arena is dropped.
    ///
    /// # Panics
    ///
    /// If the arena hands back a different number of slots than requested.
    ///
    /// ```
    /// use bumpalo::Bump;
    /// use melbi_array_ref::ArrayRef;
    ///
    /// let arena = Bump::new();
    /// let words: [u16; 4] = [1, 4, 200, 37];
    /// let view = ArrayRef::from(&words);
    ///
    /// let copy = view.copy(&arena);
    /// assert!(view.equals(copy));
    /// assert_ne!(view.as_ptr(), copy.as_ptr());
    /// ```
    pub fn copy<'b, A>(&self, arena: &'b A) -> ArrayRef<'b, T>
    where
        A: Arena + ?Sized,
        T: Clone + 'b,
    {
        tracing::trace!(len = self.len(), "copying array view into arena");
        ArrayRef {
            slice: arena::clone_into(arena, self.slice),
        }
    }
}

// --- Conversion ---

impl<'a, T> ArrayRef<'a, T> {
    /// Reinterprets the elements as `U` without copying.
    ///
    /// Only conversions that [`ElementCast`] allows compile: adding `const` or
    /// [`Volatile`](crate::Volatile) to pointers, and upcasting pointers along
    /// [`Inherits`](crate::Inherits). `I` is inferred.
    ///
    /// ```
    /// use melbi_array_ref::{ArrayRef, Inherits};
    ///
    /// #[repr(C)]
    /// struct A { data: i32 }
    ///
    /// #[repr(C)]
    /// struct B { a: A, data2: i32 }
    ///
    /// // SAFETY: repr(C) with `A` as the first field.
    /// unsafe impl Inherits for B { type Base = A; }
    ///
    /// let items = [B { a: A { data: 5 }, data2: 30 }, B { a: A { data: 6 }, data2: 31 }];
    /// let pointers = [&items[0], &items[1]];
    ///
    /// let derived: ArrayRef<&B> = ArrayRef::from(&pointers);
    /// let base: ArrayRef<&A> = derived.cast();
    /// assert_eq!(base[1].data, 6);
    /// assert_eq!(derived[1].data2, 31);
    /// ```
    pub fn cast<U, I>(self) -> ArrayRef<'a, U>
    where
        T: ElementCast<U, I>,
    {
        const {
            assert!(size_of::<T>() == size_of::<U>());
            assert!(align_of::<T>() == align_of::<U>());
        }
        // SAFETY: `ElementCast` guarantees every `T` is a valid `U` with the same
        // layout, and the storage stays borrowed for 'a.
        let slice = unsafe { slice::from_raw_parts(self.slice.as_ptr().cast::<U>(), self.len()) };
        ArrayRef { slice }
    }
}

impl<'a, T> From<ArrayRef<'a, *mut T>> for ArrayRef<'a, *const T> {
    fn from(view: ArrayRef<'a, *mut T>) -> Self {
        view.cast::<*const T, Plain<Here>>()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    extern crate std;

    use alloc::format;
    use alloc::vec;
    use alloc::vec::Vec;
    use bumpalo::Bump;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use super::ArrayRef;
    use crate::BoundsError;

    // ===================
    // Construction
    // ===================

    #[test]
    fn new_is_empty() {
        let view = ArrayRef::<u32>::new();
        assert_eq!(view.len(), 0);
        assert!(view.is_empty());
        assert_eq!(view.get(0), None);
    }

    #[test]
    fn default_is_empty() {
        let view: ArrayRef<'_, u32> = ArrayRef::default();
        assert!(view.is_empty());
    }

    #[test]
    fn from_raw_parts_null_empty() {
        // SAFETY: a null pointer with zero length is the empty view.
        let view = unsafe { ArrayRef::<i32>::from_raw_parts(core::ptr::null(), 0) };
        assert!(view.is_empty());
        assert!(!view.as_ptr().is_null());
    }

    #[test]
    fn from_raw_parts_prefix() {
        let numbers = [4, 8, 15, 16, 23, 42];
        // SAFETY: `numbers` holds six elements and outlives the view.
        let view = unsafe { ArrayRef::from_raw_parts(numbers.as_ptr(), 5) };
        assert!(view.equals_values([4, 8, 15, 16, 23]));
        assert_eq!(view.as_ptr(), numbers.as_ptr());
    }

    #[test]
    fn from_empty_array() {
        let empty: [u8; 0] = [];
        let view = ArrayRef::from(&empty);
        assert!(view.is_empty());
    }

    #[test]
    fn from_array_keeps_address() {
        let numbers = [1u64, 2, 3];
        let view = ArrayRef::from_array(&numbers);
        assert_eq!(view.len(), 3);
        assert_eq!(view.as_ptr(), numbers.as_ptr());
    }

    #[test]
    fn from_single_element() {
        let value = 7i16;
        let view = ArrayRef::from_ref(&value);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0], 7);
        assert_eq!(view.as_ptr(), &raw const value);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn from_vec() {
        let numbers = vec![1, 2, 3];
        let view = ArrayRef::from(&numbers);
        assert_eq!(view, numbers);
        assert_eq!(view.as_ptr(), numbers.as_ptr());

        let empty: Vec<i32> = Vec::new();
        assert!(ArrayRef::from(&empty).is_empty());
    }

    // ===================
    // Access
    // ===================

    #[test]
    fn index_and_get() {
        let numbers = [100, 200, 300];
        let view = ArrayRef::from(&numbers);
        assert_eq!(view[0], 100);
        assert_eq!(view[2], 300);
        assert_eq!(view.get(1), Some(&200));
        assert_eq!(view.get(3), None);
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds for view of length 3")]
    fn index_out_of_bounds() {
        let numbers = [100, 200, 300];
        let view = ArrayRef::from(&numbers);
        let _ = view[3];
    }

    #[test]
    #[should_panic(expected = "index 0 out of bounds for view of length 0")]
    fn index_empty() {
        let view = ArrayRef::<u8>::new();
        let _ = view[0];
    }

    #[test]
    fn range_index() {
        let numbers = [1, 2, 3, 4];
        let view = ArrayRef::from(&numbers);
        assert_eq!(&view[1..3], &[2, 3]);
        assert_eq!(&view[2..], &[3, 4]);
        assert_eq!(&view[..1], &[1]);
        assert_eq!(&view[1..=2], &[2, 3]);
        assert_eq!(&view[..=0], &[1]);
        assert_eq!(&view[..], &numbers);
        assert!(view[4..].is_empty());
        assert_eq!(view.first(), Some(&1));
        assert_eq!(view.last(), Some(&4));
    }

    #[test]
    #[should_panic(expected = "window of 3 elements at 2 out of bounds for view of length 4")]
    fn range_index_past_end() {
        let numbers = [1, 2, 3, 4];
        let _ = &ArrayRef::from(&numbers)[2..5];
    }

    #[test]
    fn try_range_errors() {
        let numbers = [1, 2, 3, 4];
        let view = ArrayRef::from(&numbers);
        assert!(view.try_range(1..1).is_ok_and(|v| v.is_empty()));
        assert_eq!(
            view.try_range(3..1),
            Err(BoundsError::Reversed { start: 3, end: 1 })
        );
        assert_eq!(
            view.try_range(..=4),
            Err(BoundsError::Range {
                start: 0,
                len: 5,
                size: 4
            })
        );
        assert!(view.try_range(..=usize::MAX).is_err());
        assert_eq!(
            view.try_range(5..),
            Err(BoundsError::Range {
                start: 5,
                len: 0,
                size: 4
            })
        );
    }

    #[test]
    fn as_slice_outlives_view() {
        let numbers = [5, 6, 7];
        let slice = {
            let view = ArrayRef::from(&numbers);
            view.as_slice()
        };
        assert_eq!(slice, &[5, 6, 7]);
    }

    #[test]
    fn iterates_in_order() {
        let numbers = [3, 1, 4, 1, 5];
        let view = ArrayRef::from(&numbers);
        let collected: Vec<i32> = view.into_iter().copied().collect();
        assert_eq!(collected, vec![3, 1, 4, 1, 5]);

        let mut sum = 0;
        for n in &view {
            sum += n;
        }
        assert_eq!(sum, 14);
    }

    // ===================
    // Slicing
    // ===================

    #[test]
    fn slice_window() {
        let numbers = [1, 2, 3, 4, 5, 6, 7];
        let view = ArrayRef::from(&numbers);
        let window = view.slice(2, 4);
        assert!(window.equals_values([3, 4, 5, 6]));
        assert_eq!(window.as_ptr(), numbers[2..].as_ptr());
    }

    #[test]
    fn slice_empty_windows() {
        let numbers = [1, 2, 3];
        let view = ArrayRef::from(&numbers);
        assert!(view.slice(0, 0).is_empty());
        assert!(view.slice(3, 0).is_empty());
    }

    #[test]
    fn try_slice_rejects_out_of_range() {
        let numbers = [1, 2, 3];
        let view = ArrayRef::from(&numbers);
        assert_eq!(
            view.try_slice(2, 2),
            Err(BoundsError::Range {
                start: 2,
                len: 2,
                size: 3
            })
        );
        assert!(view.try_slice(4, 0).is_err());
        assert!(view.try_slice(1, usize::MAX).is_err());
    }

    #[test]
    #[should_panic(expected = "window of 2 elements at 2 out of bounds for view of length 3")]
    fn slice_past_end_panics() {
        let numbers = [1, 2, 3];
        ArrayRef::from(&numbers).slice(2, 2);
    }

    #[test]
    fn slice_outlives_parent_view() {
        let numbers = [10, 20, 30, 40];
        let tail = {
            let parent = ArrayRef::from(&numbers);
            parent.slice(1, 3)
        };
        assert!(tail.equals_values([20, 30, 40]));
    }

    #[test]
    fn drop_and_take() {
        let numbers = [4, 8, 15, 16, 23, 42];
        let view = ArrayRef::from(&numbers);

        assert!(view.drop_back(1).equals_values([4, 8, 15, 16, 23]));
        assert!(view.drop_back(6).is_empty());
        assert!(view.drop_front(2).equals_values([15, 16, 23, 42]));
        assert!(view.take_front(2).equals_values([4, 8]));
        assert!(view.take_back(2).equals_values([23, 42]));
        assert!(view.slice_from(6).is_empty());
    }

    #[test]
    fn drop_and_take_reject_too_many() {
        let numbers = [1, 2];
        let view = ArrayRef::from(&numbers);
        let too_many = Err(BoundsError::Count { count: 3, len: 2 });
        assert_eq!(view.try_drop_back(3), too_many);
        assert_eq!(view.try_drop_front(3), too_many);
        assert_eq!(view.try_take_front(3), too_many);
        assert_eq!(view.try_take_back(3), too_many);
        assert!(view.try_slice_from(3).is_err());
    }

    #[test]
    #[should_panic(expected = "count 3 out of bounds for view of length 2")]
    fn drop_back_reports_count() {
        let numbers = [1, 2];
        ArrayRef::from(&numbers).drop_back(3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn drop_back_empty_panics() {
        ArrayRef::<u8>::new().drop_back(1);
    }

    // ===================
    // Equality
    // ===================

    #[test]
    fn empty_views_are_equal() {
        let a = [1u32];
        let b: [u32; 0] = [];
        assert_eq!(ArrayRef::<u32>::new(), ArrayRef::<u32>::new());
        assert_eq!(ArrayRef::from(&a).slice(1, 0), ArrayRef::from(&b));
    }

    #[test]
    fn equality_ignores_address() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        assert!(ArrayRef::from(&a).equals(ArrayRef::from(&b)));
        assert_eq!(ArrayRef::from(&a), ArrayRef::from(&b));
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn equality_against_other_collections() {
        let numbers = [1, 2, 3];
        let view = ArrayRef::from(&numbers);
        assert_eq!(view, [1, 2, 3]);
        assert_eq!(view, vec![1, 2, 3]);
        assert_eq!(view, &numbers[..]);
        assert_ne!(view, [1, 2]);
    }

    #[test]
    fn equals_across_element_types() {
        let owned = [alloc::string::String::from("a"), alloc::string::String::from("b")];
        let view = ArrayRef::from(&owned);
        assert!(view.equals_values(["a", "b"]));
        assert!(!view.equals_values(["a", "c"]));
    }

    #[test]
    fn equal_views_hash_equal() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let a = [1, 2, 3];
        let b = [1, 2, 3];
        assert_eq!(hash_of(&ArrayRef::from(&a)), hash_of(&ArrayRef::from(&b)));
    }

    // ===================
    // Debug
    // ===================

    #[test]
    fn debug_lists_elements() {
        let numbers = [1, 2, 3];
        assert_eq!(format!("{:?}", ArrayRef::from(&numbers)), "[1, 2, 3]");
        assert_eq!(format!("{:?}", ArrayRef::<u8>::new()), "[]");
    }

    // ===================
    // Copy-out
    // ===================

    #[test]
    fn copy_to_arena() {
        let arena = Bump::new();
        let words = [11u16, 4003, 67, 64000, 13];
        let view = ArrayRef::from(&words);
        let copy = view.copy(&arena);
        assert!(view.equals(copy));
        assert_ne!(view.as_ptr(), copy.as_ptr());
    }

    #[test]
    fn copy_outlives_source() {
        let arena = Bump::new();
        let copy = {
            let words = vec![1u8, 2, 3];
            ArrayRef::from(&words).copy(&arena)
        };
        assert!(copy.equals_values([1, 2, 3]));
    }

    #[test]
    fn copy_empty() {
        let arena = Bump::new();
        let copy = ArrayRef::<u64>::new().copy(&arena);
        assert!(copy.is_empty());
        assert_eq!(copy, ArrayRef::<u64>::new());
    }

    // ===================
    // Conversion
    // ===================

    #[test]
    fn mut_pointers_become_const() {
        let mut buf = [0, 1, 2, 3];
        let [a, b, c, d] = &mut buf;
        let pointers: [*mut i32; 4] = [a, b, c, d];

        let view = ArrayRef::from(&pointers);
        let read_only: ArrayRef<*const i32> = view.into();
        assert_eq!(read_only.len(), 4);
        for (i, ptr) in read_only.iter().enumerate() {
            // SAFETY: every pointer targets a live element of `buf`.
            assert_eq!(unsafe { **ptr }, i as i32);
        }
    }

    #[test]
    fn cast_keeps_address_and_length() {
        let x = 1;
        let pointers = [&x, &x, &x];
        let view = ArrayRef::from(&pointers);
        let volatile: ArrayRef<&crate::Volatile<i32>> = view.cast();
        assert_eq!(volatile.len(), 3);
        assert_eq!(volatile.as_ptr().cast::<&i32>(), view.as_ptr());
        assert_eq!(volatile[2].read(), 1);
    }
}
