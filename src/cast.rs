//! The conversion law: which element types a view may be reinterpreted as.
//!
//! [`ArrayRef::cast`](crate::ArrayRef::cast) turns an `ArrayRef<S>` into an
//! `ArrayRef<T>` in place. Nothing is copied and nothing is checked at run time, so
//! the set of allowed `(S, T)` pairs has to be exactly the pairs where every `S` in
//! the array already *is* a valid `T`. Conversions may forget information, never
//! add permissions or reinterpret unrelated bits.
//!
//! | from            | to                        | why it's allowed                    |
//! |-----------------|---------------------------|-------------------------------------|
//! | `*mut T`        | `*const T`                | drops write permission              |
//! | `&T`, `*const T`| `&Volatile<T>`, `*const Volatile<T>` | adds volatile reads      |
//! | `&Derived`      | `&Base`                   | [`Inherits`] at offset zero         |
//! | `&C`            | `&A` where `C: Inherits<Base = B>`, `B: Inherits<Base = A>` | indirect base |
//!
//! Only pointer-like elements convert: `&'b S`, `*const S`, `*mut S` and `NonNull<S>`.
//! Everything else is rejected by the trait system.
//!
//! Removing read-only-ness doesn't compile:
//!
//! ```compile_fail
//! use melbi_array_ref::ArrayRef;
//!
//! let x = 1;
//! let pointers = [&raw const x];
//! let view: ArrayRef<*const i32> = ArrayRef::from(&pointers);
//! let _: ArrayRef<*mut i32> = view.cast();
//! ```
//!
//! Neither does removing volatile:
//!
//! ```compile_fail
//! use melbi_array_ref::{ArrayRef, Volatile};
//!
//! let x = Volatile::new(1);
//! let pointers = [&x];
//! let view: ArrayRef<&Volatile<i32>> = ArrayRef::from(&pointers);
//! let _: ArrayRef<&i32> = view.cast();
//! ```
//!
//! Nor switching to an unrelated pointee:
//!
//! ```compile_fail
//! use melbi_array_ref::ArrayRef;
//!
//! let mut x = 1;
//! let pointers = [&raw mut x];
//! let view: ArrayRef<*mut i32> = ArrayRef::from(&pointers);
//! let _: ArrayRef<*mut f32> = view.cast();
//! ```
//!
//! Nor reinterpreting plain values, even of the same size:
//!
//! ```compile_fail
//! use melbi_array_ref::ArrayRef;
//!
//! let numbers = [1u32, 2, 3];
//! let view = ArrayRef::from(&numbers);
//! let _: ArrayRef<f32> = view.cast();
//! ```
//!
//! Nor downcasting from a base to a derived struct:
//!
//! ```compile_fail
//! use melbi_array_ref::{ArrayRef, Inherits};
//!
//! #[repr(C)]
//! struct Base { data: i32 }
//!
//! #[repr(C)]
//! struct Derived { base: Base, data2: i32 }
//!
//! // SAFETY: repr(C) with `Base` as the first field.
//! unsafe impl Inherits for Derived { type Base = Base; }
//!
//! let base = Base { data: 1 };
//! let pointers = [&base];
//! let view: ArrayRef<&Base> = ArrayRef::from(&pointers);
//! let _: ArrayRef<&Derived> = view.cast();
//! ```

use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::Volatile;

/// Declares that `Self` starts with a `Base`, so `&Self` is also a valid `&Base`.
///
/// This is the Rust shape of a public, non-virtual base class: the base lives at
/// offset zero and a pointer to the derived value needs no adjustment to point at
/// the base. Views of pointers to `Self` may then be [cast](crate::ArrayRef::cast) to
/// views of pointers to `Base`, or to any base of `Base`.
///
/// # Safety
///
/// `Self` must be `#[repr(C)]` (or `#[repr(transparent)]`) and its first field must
/// have type `Base`.
///
/// ```
/// use melbi_array_ref::Inherits;
///
/// #[repr(C)]
/// struct Shape { sides: u32 }
///
/// #[repr(C)]
/// struct Square { shape: Shape, side_len: f64 }
///
/// // SAFETY: repr(C), and `Shape` is the first field.
/// unsafe impl Inherits for Square {
///     type Base = Shape;
/// }
///
/// let square = Square { shape: Shape { sides: 4 }, side_len: 2.0 };
/// assert_eq!(square.as_base().sides, 4);
/// ```
pub unsafe trait Inherits {
    type Base;

    fn as_base(&self) -> &Self::Base {
        // SAFETY: the implementor guarantees a `Base` at offset zero.
        unsafe { &*(self as *const Self).cast::<Self::Base>() }
    }
}

/// Path index: the pointee is already the target type.
pub enum Here {}

/// Path index: step from a type to its [`Inherits::Base`], then follow `I`.
pub struct There<I>(PhantomData<I>);

/// Path index: follow the base chain `I` to the target as is.
pub struct Plain<I>(PhantomData<I>);

/// Path index: follow the base chain `I`, then wrap the target in [`Volatile`].
pub struct Qualified<I>(PhantomData<I>);

mod private {
    use super::{Here, Inherits, Plain, Qualified, There};
    use crate::Volatile;

    /// `Self` reaches `T` by zero or more `Inherits::Base` steps.
    pub trait BaseChain<T, I> {}

    impl<T> BaseChain<T, Here> for T {}

    impl<S, T, I> BaseChain<T, There<I>> for S
    where
        S: Inherits,
        S::Base: BaseChain<T, I>,
    {
    }

    pub trait Sealed<T, I> {}

    impl<S, T, I> Sealed<T, Plain<I>> for S where S: BaseChain<T, I> {}

    impl<S, T, I> Sealed<Volatile<T>, Qualified<I>> for S where S: BaseChain<T, I> {}
}

/// A pointer to `Self` can be read as a pointer to `T` without adjustment.
///
/// Holds when `T` is `Self` or a base reachable through [`Inherits`], optionally
/// wrapped once in [`Volatile`]. `I` records which path was taken; it is always
/// inferred and exists only so the rules don't overlap.
///
/// This trait is sealed.
pub trait Extends<T, I>: private::Sealed<T, I> {}

impl<S, T, I> Extends<T, I> for S where S: private::Sealed<T, I> {}

/// An array of `Self` can be reinterpreted in place as an array of `U`.
///
/// Implemented for pointer-like elements whose pointee satisfies [`Extends`], and
/// for `*mut` to `*const`. `I` is inferred.
///
/// # Safety
///
/// `Self` and `U` must have the same size and alignment, every valid `Self` must be
/// a valid `U`, and reading a `U` must not grant any access that the `Self` did not.
pub unsafe trait ElementCast<U, I> {}

// SAFETY: `&S` and `&T` are both thin pointers; `S: Extends<T, _>` means the
// pointee is readable as a `T`.
unsafe impl<'b, S, T, I> ElementCast<&'b T, I> for &'b S where S: Extends<T, I> {}

// SAFETY: as above, for raw pointers of the same mutability.
unsafe impl<S, T, I> ElementCast<*const T, I> for *const S where S: Extends<T, I> {}

// SAFETY: as above.
unsafe impl<S, T, I> ElementCast<*mut T, I> for *mut S where S: Extends<T, I> {}

// SAFETY: as above; `*const` grants strictly less than `*mut`.
unsafe impl<S, T, I> ElementCast<*const T, I> for *mut S where S: Extends<T, I> {}

// SAFETY: `NonNull<S>` is a non-null `*mut S`, same for `T`.
unsafe impl<S, T, I> ElementCast<NonNull<T>, I> for NonNull<S> where S: Extends<T, I> {}

// Adding const and volatile.
static_assertions::assert_impl_all!(*mut i32: ElementCast<*const i32, Plain<Here>>);
static_assertions::assert_impl_all!(*mut i32: ElementCast<*mut Volatile<i32>, Qualified<Here>>);
static_assertions::assert_impl_all!(*mut i32: ElementCast<*const Volatile<i32>, Qualified<Here>>);
static_assertions::assert_impl_all!(&'static u8: ElementCast<&'static Volatile<u8>, Qualified<Here>>);

// Removing const or volatile, or changing the pointee.
static_assertions::assert_not_impl_any!(*const i32: ElementCast<*mut i32, Plain<Here>>);
static_assertions::assert_not_impl_any!(*mut Volatile<i32>: ElementCast<*mut i32, Plain<Here>>);
static_assertions::assert_not_impl_any!(*mut Volatile<i32>: ElementCast<*mut i32, Qualified<Here>>);
static_assertions::assert_not_impl_any!(*mut i32: ElementCast<*mut f32, Plain<Here>>);
static_assertions::assert_not_impl_any!(*mut i32: ElementCast<*mut u32, Plain<Here>>);
static_assertions::assert_not_impl_any!(i32: ElementCast<f32, Plain<Here>>);
static_assertions::assert_not_impl_any!(i32: ElementCast<i32, Plain<Here>>);
