use core::cmp::Ordering;
use core::convert::TryFrom;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::error::NullPointerError;
use crate::not_null::NotNull;
use crate::truthy::{Nullable, Referent, ReferentMut, Truthy};

/// A nullable wrapper that defers the null check to dereference time.
///
/// Any value of `P` may be stored, falsy included; nothing is validated on
/// construction or assignment. Dereferencing re-checks truthiness on every
/// call and surfaces a falsy value as [`NullPointerError`] instead of
/// undefined behavior: [`try_deref`](DerefChecked::try_deref) and
/// [`try_deref_mut`](DerefChecked::try_deref_mut) return the error, while
/// the `Deref`/`DerefMut` operator forms panic with its message. The layout
/// is identical to `P` itself.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct DerefChecked<P>(P);

impl<P> DerefChecked<P> {
    /// Wraps `ptr`, truthy or not.
    pub fn new(ptr: P) -> Self {
        Self(ptr)
    }

    /// Returns a shared reference to the contained value.
    pub fn get(&self) -> &P {
        &self.0
    }

    /// Returns a mutable reference to the contained value.
    pub fn get_mut(&mut self) -> &mut P {
        &mut self.0
    }

    /// Consumes the wrapper and returns the contained value.
    pub fn into_inner(self) -> P {
        self.0
    }

    /// Stores `ptr`, truthy or not.
    pub fn set(&mut self, ptr: P) {
        self.0 = ptr;
    }

    /// Stores `ptr` and returns the previous contents.
    pub fn replace(&mut self, ptr: P) -> P {
        mem::replace(&mut self.0, ptr)
    }

    /// Swaps contents with another wrapper.
    pub fn swap(&mut self, other: &mut DerefChecked<P>) {
        mem::swap(&mut self.0, &mut other.0);
    }

    /// Swaps contents with a raw value.
    pub fn swap_raw(&mut self, other: &mut P) {
        mem::swap(&mut self.0, other);
    }
}

impl<P: Nullable> DerefChecked<P> {
    /// A wrapper holding the null sentinel.
    pub fn null() -> Self {
        Self(P::null())
    }

    /// Resets the contained value to the null sentinel.
    pub fn clear(&mut self) {
        self.0 = P::null();
    }

    /// Takes the contained value, leaving the null sentinel behind.
    pub fn take(&mut self) -> P {
        mem::replace(&mut self.0, P::null())
    }
}

impl<P: Truthy> DerefChecked<P> {
    /// Delegates to `P`'s truthiness test. Never fails.
    pub fn is_truthy(&self) -> bool {
        self.0.is_truthy()
    }

    pub fn is_null(&self) -> bool {
        !self.0.is_truthy()
    }

    /// Dereferences the contained value, re-checking truthiness first.
    ///
    /// Fails with [`NullPointerError`] if the value is falsy at this moment;
    /// the check is re-evaluated on every call, never cached.
    pub fn try_deref(&self) -> Result<&<P as Referent>::Target, NullPointerError>
    where
        P: Referent,
    {
        self.0.referent().ok_or(NullPointerError)
    }

    /// Mutable counterpart of [`try_deref`](Self::try_deref).
    pub fn try_deref_mut(&mut self) -> Result<&mut <P as Referent>::Target, NullPointerError>
    where
        P: ReferentMut,
    {
        self.0.referent_mut().ok_or(NullPointerError)
    }

    /// Validates the contained value and converts to [`NotNull`].
    pub fn try_into_notnull(self) -> Result<NotNull<P>, NullPointerError> {
        NotNull::new(self.0)
    }
}

impl<P: Nullable> Default for DerefChecked<P> {
    fn default() -> Self {
        Self::null()
    }
}

impl<P> From<P> for DerefChecked<P> {
    fn from(ptr: P) -> Self {
        Self(ptr)
    }
}

/// Always succeeds; the source is truthy by construction.
impl<P> From<NotNull<P>> for DerefChecked<P> {
    fn from(ptr: NotNull<P>) -> Self {
        Self(ptr.into_inner())
    }
}

impl<P: Truthy> TryFrom<DerefChecked<P>> for NotNull<P> {
    type Error = NullPointerError;

    fn try_from(ptr: DerefChecked<P>) -> Result<Self, NullPointerError> {
        ptr.try_into_notnull()
    }
}

impl<P: Referent> Deref for DerefChecked<P> {
    type Target = <P as Referent>::Target;

    #[track_caller]
    fn deref(&self) -> &Self::Target {
        match self.try_deref() {
            Ok(target) => target,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<P: ReferentMut> DerefMut for DerefChecked<P> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self.try_deref_mut() {
            Ok(target) => target,
            Err(err) => panic!("{}", err),
        }
    }
}

// SAFETY: repr(transparent) over the single `P` field, and any value of `P`
// is a valid DerefChecked<P>, so wrapping and peeling are unrestricted.
// NotNull deliberately has no such impl: its safe `wrap` would bypass
// validation.
unsafe impl<P> bytemuck::TransparentWrapper<P> for DerefChecked<P> {}

impl<P> AsRef<P> for DerefChecked<P> {
    fn as_ref(&self) -> &P {
        &self.0
    }
}

impl<P: Truthy> Truthy for DerefChecked<P> {
    fn is_truthy(&self) -> bool {
        self.0.is_truthy()
    }
}

impl<P: Nullable> Nullable for DerefChecked<P> {
    fn null() -> Self {
        DerefChecked(P::null())
    }
}

impl<P: PartialEq> PartialEq<P> for DerefChecked<P> {
    fn eq(&self, other: &P) -> bool {
        self.0 == *other
    }
}

impl<P: PartialOrd> PartialOrd<P> for DerefChecked<P> {
    fn partial_cmp(&self, other: &P) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl<P: PartialEq> PartialEq<NotNull<P>> for DerefChecked<P> {
    fn eq(&self, other: &NotNull<P>) -> bool {
        self.0 == *other.get()
    }
}

impl<P: PartialOrd> PartialOrd<NotNull<P>> for DerefChecked<P> {
    fn partial_cmp(&self, other: &NotNull<P>) -> Option<Ordering> {
        self.0.partial_cmp(other.get())
    }
}

impl<P: PartialEq> PartialEq<DerefChecked<P>> for NotNull<P> {
    fn eq(&self, other: &DerefChecked<P>) -> bool {
        *self.get() == other.0
    }
}

impl<P: PartialOrd> PartialOrd<DerefChecked<P>> for NotNull<P> {
    fn partial_cmp(&self, other: &DerefChecked<P>) -> Option<Ordering> {
        self.get().partial_cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::TryFrom;

    use super::DerefChecked;
    use crate::not_null::NotNull;
    use crate::truthy::Nullable;

    #[test]
    fn test_construction_never_validates() {
        let d = DerefChecked::new(<*const i32>::null());
        assert!(d.is_null());

        let e: DerefChecked<*const i32> = DerefChecked::null();
        assert!(!e.is_truthy());

        let f: DerefChecked<*const i32> = Default::default();
        assert_eq!(f, e);
    }

    #[test]
    fn test_deref_checks_at_call_time() {
        extern crate alloc;
        use alloc::boxed::Box;

        let mut d = DerefChecked::new(Some(Box::new(5)));
        assert_eq!(*d.try_deref().unwrap(), 5);

        d.clear();
        assert!(d.try_deref().is_err());

        // The check is re-evaluated on every call, not cached.
        d.set(Some(Box::new(6)));
        *d.try_deref_mut().unwrap() += 1;
        assert_eq!(*d.try_deref().unwrap(), 7);
    }

    #[test]
    fn test_deref_operators() {
        let x = 4;
        let mut d = DerefChecked::new(Some(&x));
        assert_eq!(*d, 4);

        d.clear();
        assert!(d.is_null());
    }

    #[test]
    #[should_panic(expected = "value is null")]
    fn test_deref_operator_panics_on_null() {
        let d: DerefChecked<Option<&i32>> = DerefChecked::null();
        let _ = *d;
    }

    #[test]
    fn test_conversion_round_trip() {
        let x = 5;
        let p = NotNull::new(&x as *const i32).unwrap();

        let d: DerefChecked<*const i32> = p.into();
        assert!(d.is_truthy());

        let q = NotNull::try_from(d).unwrap();
        assert_eq!(p, q);
    }

    #[test]
    fn test_falsy_conversion_to_notnull_fails() {
        let d: DerefChecked<*const i32> = DerefChecked::null();
        assert!(d.try_into_notnull().is_err());
    }

    #[test]
    fn test_take_and_replace() {
        let mut d = DerefChecked::new(4);

        assert_eq!(d.take(), 4);
        assert!(d.is_null());

        assert_eq!(d.replace(9), 0);
        assert_eq!(*d.get(), 9);
    }

    #[test]
    fn test_swap() {
        let mut d = DerefChecked::new(1);
        let mut e = DerefChecked::new(2);
        d.swap(&mut e);
        assert_eq!(*d.get(), 2);
        assert_eq!(*e.get(), 1);

        let mut raw = 7;
        d.swap_raw(&mut raw);
        assert_eq!(*d.get(), 7);
        assert_eq!(raw, 2);
    }

    #[test]
    fn test_comparisons_tolerate_null() {
        let a = [10, 20];
        let p = DerefChecked::new(&a[0] as *const i32);
        let q = DerefChecked::new(&a[1] as *const i32);
        let r: DerefChecked<*const i32> = DerefChecked::null();

        assert_ne!(p, q);
        assert!(p < q);
        assert!(q >= p);
        assert_eq!(q, &a[1] as *const i32);
        assert_eq!(r, <*const i32>::null());

        let nn = NotNull::new(&a[0] as *const i32).unwrap();
        assert_eq!(p, nn);
        assert_eq!(nn, p);
        assert!(nn < q);
        assert_ne!(nn, r);
    }

    #[test]
    fn test_mutation_through_raw_access() {
        let mut x = 1;
        let mut d = DerefChecked::new(&mut x as *mut i32);
        unsafe { **d.get_mut() = 3 };
        assert_eq!(x, 3);
    }
}
