use thiserror::Error;

/// An operation required a truthy (non-null) value but observed a falsy one.
///
/// This is the only error kind in the crate. It is returned by the checked
/// construction and assignment paths of [`NotNull`](crate::NotNull), by the
/// checked dereference of [`DerefChecked`](crate::DerefChecked), and by the
/// validating bulk slice conversions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("value is null")]
pub struct NullPointerError;
