//! Non-owning views over arrays that live somewhere else.
//!
//! An [`ArrayRef<'a, T>`](ArrayRef) is a `(pointer, length)` pair over a run of `T`s
//! owned by a stack array, a `Vec`, an arena, or any other contiguous container.
//! Passing one around never copies the elements, and the lifetime `'a` ties the view
//! to the storage it borrows, so a dangling view does not type-check.
//!
//! ```text
//! ArrayRef<'a, T>:  (ptr, len) ──▶ [T, T, T, T, ...]   owned elsewhere, lives for 'a
//!                                   └──── len ───┘
//! ```
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use melbi_array_ref::ArrayRef;
//!
//! let numbers = [4, 8, 15, 16, 23, 42];
//! let view = ArrayRef::from(&numbers);
//!
//! // Slicing re-windows the same storage; nothing is copied.
//! assert!(view.drop_back(1).equals_values([4, 8, 15, 16, 23]));
//! assert_eq!(view.slice(2, 2), [15, 16]);
//!
//! // Copying out materializes the elements in an arena.
//! let arena = Bump::new();
//! let copy = view.copy(&arena);
//! assert_eq!(copy, view);
//! assert_ne!(copy.as_ptr(), view.as_ptr());
//! ```
//!
//! # Conversions
//!
//! A view may change element type only when the new type reads the same bits with
//! fewer permissions or less information: `*mut T` to `*const T`, `&T` to
//! `&Volatile<T>`, or a pointer to a derived struct to a pointer to its base. The
//! rules live in [`cast`] and are checked entirely by the trait system.
//!
//! ```
//! use melbi_array_ref::ArrayRef;
//!
//! let mut a = 1;
//! let mut b = 2;
//! let pointers = [&raw mut a, &raw mut b];
//!
//! let view: ArrayRef<*mut i32> = ArrayRef::from(&pointers);
//! let read_only: ArrayRef<*const i32> = view.into();
//! assert_eq!(read_only.len(), 2);
//! ```
//!
//! # Gotchas
//!
//! - **Read-only**: there is no mutable view; elements are reached through `&T`.
//! - **No drop in arenas**: [`ArrayRef::copy`] clones into arena memory, and bumpalo
//!   arenas don't run destructors. Copying types that own heap memory leaks it.

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod arena;
mod array_ref;
pub mod cast;
mod error;
mod volatile;

pub use arena::Arena;
pub use array_ref::ArrayRef;
pub use cast::{ElementCast, Extends, Inherits};
pub use error::BoundsError;
pub use volatile::Volatile;
