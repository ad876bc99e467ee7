use core::mem::MaybeUninit;

use bumpalo::Bump;

/// Bulk storage that [`ArrayRef::copy`](crate::ArrayRef::copy) materializes views into.
///
/// Views never give memory back to the arena: there is no per-allocation free.
///
/// # Safety
///
/// Every slice returned by `alloc_uninit_slice::<T>(len)` must:
///
/// - have exactly `len` elements, aligned for `T`;
/// - be fresh storage that no other live allocation or reference overlaps;
/// - stay valid and untouched by the arena for as long as the `&self` borrow it was
///   returned under.
///
/// Copies handed out by [`ArrayRef::copy`](crate::ArrayRef::copy) are shared views
/// of this storage, so an arena that reuses it would mutate them.
pub unsafe trait Arena {
    /// Returns uninitialized storage for exactly `len` values of `T`.
    ///
    /// A request for zero elements must succeed and may return a dangling (but
    /// aligned and non-null) empty slice.
    #[allow(clippy::mut_from_ref)]
    fn alloc_uninit_slice<T>(&self, len: usize) -> &mut [MaybeUninit<T>];
}

// SAFETY: bumpalo returns fresh, aligned storage of the requested length that lives
// until the `Bump` is reset, which needs `&mut self`.
unsafe impl Arena for Bump {
    #[inline]
    fn alloc_uninit_slice<T>(&self, len: usize) -> &mut [MaybeUninit<T>] {
        self.alloc_slice_fill_with(len, |_| MaybeUninit::uninit())
    }
}

// SAFETY: forwards to `A`, which upholds the contract.
unsafe impl<A: Arena + ?Sized> Arena for &A {
    #[inline]
    fn alloc_uninit_slice<T>(&self, len: usize) -> &mut [MaybeUninit<T>] {
        (**self).alloc_uninit_slice(len)
    }
}

/// Clones `src` into storage from `arena`.
pub(crate) fn clone_into<'b, A, T>(arena: &'b A, src: &[T]) -> &'b [T]
where
    A: Arena + ?Sized,
    T: Clone,
{
    let slots = arena.alloc_uninit_slice::<T>(src.len());
    assert_eq!(
        slots.len(),
        src.len(),
        "arena returned the wrong number of slots"
    );

    for (slot, value) in slots.iter_mut().zip(src) {
        slot.write(value.clone());
    }

    // SAFETY: `slots` has exactly `src.len()` elements, all initialized above, and
    // `[MaybeUninit<T>]` has the same layout as `[T]`. The `Arena` contract keeps the
    // storage fresh and untouched for 'b.
    unsafe { &*(slots as *mut [MaybeUninit<T>] as *const [T]) }
}
