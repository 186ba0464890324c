//! Bulk reinterpretation of contiguous pointer-like values as their checked
//! wrappers, without copying.
//!
//! [`NotNull`] and [`DerefChecked`] are `#[repr(transparent)]` over `P`, so
//! a slice of `P` and a slice of either wrapper share one memory layout.
//! The conversions here are pointer casts over the same backing storage:
//! the returned view borrows the input, and mutations through one view are
//! visible through the other. Conversions *to* `NotNull` validate every
//! element up front in a single linear scan and fail without reinterpreting
//! anything if a falsy element is found; conversions to `DerefChecked` are
//! total.

use bytemuck::TransparentWrapper;

use crate::deref_checked::DerefChecked;
use crate::error::NullPointerError;
use crate::not_null::NotNull;
use crate::truthy::Truthy;

/// Reinterprets a slice of truthy values as a slice of [`NotNull`].
///
/// Validates every element first; fails with [`NullPointerError`] if any is
/// falsy, in which case the input is untouched.
pub fn as_notnull_slice<P: Truthy>(ptrs: &[P]) -> Result<&[NotNull<P>], NullPointerError> {
    if ptrs.iter().all(Truthy::is_truthy) {
        // Layout-compatible by repr(transparent), and every element has
        // just been validated.
        Ok(unsafe { core::slice::from_raw_parts(ptrs.as_ptr() as *const NotNull<P>, ptrs.len()) })
    } else {
        Err(NullPointerError)
    }
}

/// Mutable counterpart of [`as_notnull_slice`].
///
/// Element writes through the returned view go through [`NotNull`]'s
/// validating operations, so the whole view stays truthy.
pub fn as_notnull_slice_mut<P: Truthy>(
    ptrs: &mut [P],
) -> Result<&mut [NotNull<P>], NullPointerError> {
    if ptrs.iter().all(Truthy::is_truthy) {
        Ok(unsafe {
            core::slice::from_raw_parts_mut(ptrs.as_mut_ptr() as *mut NotNull<P>, ptrs.len())
        })
    } else {
        Err(NullPointerError)
    }
}

/// Reinterprets a fixed-size array of truthy values as an array of
/// [`NotNull`], preserving the length in the type.
pub fn as_notnull_array<P: Truthy, const N: usize>(
    ptrs: &[P; N],
) -> Result<&[NotNull<P>; N], NullPointerError> {
    if ptrs.iter().all(Truthy::is_truthy) {
        Ok(unsafe { &*(ptrs as *const [P; N] as *const [NotNull<P>; N]) })
    } else {
        Err(NullPointerError)
    }
}

/// Mutable counterpart of [`as_notnull_array`].
pub fn as_notnull_array_mut<P: Truthy, const N: usize>(
    ptrs: &mut [P; N],
) -> Result<&mut [NotNull<P>; N], NullPointerError> {
    if ptrs.iter().all(Truthy::is_truthy) {
        Ok(unsafe { &mut *(ptrs as *mut [P; N] as *mut [NotNull<P>; N]) })
    } else {
        Err(NullPointerError)
    }
}

/// Reinterprets a slice of values as a slice of [`DerefChecked`].
///
/// No validation: falsy elements are tolerated and checked per-element at
/// dereference time.
pub fn as_deref_checked_slice<P>(ptrs: &[P]) -> &[DerefChecked<P>] {
    DerefChecked::wrap_slice(ptrs)
}

/// Mutable counterpart of [`as_deref_checked_slice`].
pub fn as_deref_checked_slice_mut<P>(ptrs: &mut [P]) -> &mut [DerefChecked<P>] {
    DerefChecked::wrap_slice_mut(ptrs)
}

/// Reinterprets a fixed-size array of values as an array of
/// [`DerefChecked`], preserving the length in the type.
pub fn as_deref_checked_array<P, const N: usize>(ptrs: &[P; N]) -> &[DerefChecked<P>; N] {
    unsafe { &*(ptrs as *const [P; N] as *const [DerefChecked<P>; N]) }
}

/// Mutable counterpart of [`as_deref_checked_array`].
pub fn as_deref_checked_array_mut<P, const N: usize>(
    ptrs: &mut [P; N],
) -> &mut [DerefChecked<P>; N] {
    unsafe { &mut *(ptrs as *mut [P; N] as *mut [DerefChecked<P>; N]) }
}

/// Views a slice of [`NotNull`] as a slice of the raw values.
///
/// Total, and the inverse of [`as_notnull_slice`]. There is no mutable
/// counterpart: writing arbitrary raw values through it could plant a falsy
/// element behind a [`NotNull`].
pub fn notnull_slice_as_inner<P>(ptrs: &[NotNull<P>]) -> &[P] {
    unsafe { core::slice::from_raw_parts(ptrs.as_ptr() as *const P, ptrs.len()) }
}

/// Views a slice of [`DerefChecked`] as a slice of the raw values.
pub fn deref_checked_slice_as_inner<P>(ptrs: &[DerefChecked<P>]) -> &[P] {
    DerefChecked::peel_slice(ptrs)
}

/// Mutable counterpart of [`deref_checked_slice_as_inner`]; permitted
/// because [`DerefChecked`] has no invariant to protect.
pub fn deref_checked_slice_as_inner_mut<P>(ptrs: &mut [DerefChecked<P>]) -> &mut [P] {
    DerefChecked::peel_slice_mut(ptrs)
}
