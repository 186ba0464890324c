#![no_std]

//! Null safety wrappers for pointer-like values.
//!
//! [`NotNull`] guarantees at the type level that its contained value is
//! never null; [`DerefChecked`] may hold a null value but turns a null
//! dereference into a recoverable [`NullPointerError`] instead of undefined
//! behavior. Both wrappers have the same layout as the wrapped value, so
//! the [`slice`] utilities can reinterpret whole buffers of raw values as
//! checked wrappers without copying.
//!
//! "Pointer-like" is anything implementing [`Truthy`]: raw pointers,
//! `Option` of an owning or borrowing pointer (`Option<Box<T>>`,
//! `Option<&T>`, ...), or an integer where zero means absent.
//!
//! # Example
//! ```
//! use nullsafety::{DerefChecked, NotNull};
//!
//! let x = 2;
//! let p = NotNull::new(&x as *const i32).unwrap();
//! assert_eq!(unsafe { **p }, 2);
//!
//! // A null candidate is rejected at the construction boundary...
//! assert!(NotNull::new(core::ptr::null::<i32>()).is_err());
//!
//! // ...while DerefChecked accepts it and fails at dereference time.
//! let d: DerefChecked<Option<&i32>> = DerefChecked::null();
//! assert!(d.try_deref().is_err());
//! ```

mod deref_checked;
mod error;
mod not_null;
pub mod slice;
mod truthy;

pub use deref_checked::DerefChecked;
pub use error::NullPointerError;
pub use not_null::NotNull;
pub use truthy::{require_truthy, Nullable, Referent, ReferentMut, Truthy};
