use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

use crate::check::ensure_not_null;
use crate::nullable::Nullable;

/// A value guaranteed to never be its null sentinel.
///
/// Same layout as `T`. In checked mode the guarantee is validated at
/// construction and re-validated on every access, reaching the installed
/// [violation handler](crate::set_violation_handler) when broken. With the
/// `unchecked` feature no comparison is performed anywhere and breaking the
/// guarantee is undefined behaviour.
///
/// # Example
/// ```
/// let value = 9;
/// let nn: sref::NotNull<*const i32> = sref::NotNull::new(&value as *const i32);
///
/// assert_eq!(unsafe { **nn.get() }, 9);
/// ```
///
/// Comparing the wrapper against the sentinel itself is rejected at compile
/// time, since by the invariant it could only ever be false:
/// ```compile_fail
/// let nn = sref::NotNull::new(Some(42));
/// assert!(nn == None);
/// ```
///
/// So is pointer-style arithmetic, whose result could silently escape
/// validation:
/// ```compile_fail
/// let mut nn = sref::NotNull::new(Box::into_raw(Box::new(1)));
/// nn += 1;
/// ```
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct NotNull<T: Nullable>(T);

impl<T: Nullable> NotNull<T> {
    /// Wraps a value, validating it against the null sentinel in checked
    /// mode.
    pub fn new<U: Into<T>>(value: U) -> Self {
        let value = value.into();
        ensure_not_null(&value);
        Self(value)
    }

    /// Returns the wrapped value, re-validating it in checked mode.
    pub fn get(&self) -> &T {
        ensure_not_null(&self.0);
        &self.0
    }

    /// Unwraps the value, re-validating it in checked mode.
    pub fn into_inner(self) -> T {
        ensure_not_null(&self.0);
        self.0
    }

    /// Converts into a wrapper around a type `T` converts to.
    ///
    /// The converted value is validated like any other construction.
    pub fn convert<U>(self) -> NotNull<U>
    where
        T: Into<U>,
        U: Nullable,
    {
        NotNull::new(self.into_inner())
    }
}

impl<T: Nullable> From<T> for NotNull<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Nullable> Deref for NotNull<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, U> PartialEq<NotNull<U>> for NotNull<T>
where
    T: Nullable + PartialEq<U>,
    U: Nullable,
{
    fn eq(&self, other: &NotNull<U>) -> bool {
        self.get() == other.get()
    }
}

impl<T: Nullable + Eq> Eq for NotNull<T> {}

impl<T, U> PartialOrd<NotNull<U>> for NotNull<T>
where
    T: Nullable + PartialOrd<U>,
    U: Nullable,
{
    fn partial_cmp(&self, other: &NotNull<U>) -> Option<Ordering> {
        T::partial_cmp(self.get(), other.get())
    }
}

impl<T: Nullable + Ord> Ord for NotNull<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(other.get())
    }
}

/// The hash of the wrapper is the hash of the wrapped value, so the wrapper
/// composes into maps keyed by the value.
impl<T: Nullable + Hash> Hash for NotNull<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<T: Nullable + fmt::Display> fmt::Display for NotNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

impl<T: Nullable + fmt::Debug> fmt::Debug for NotNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.get(), f)
    }
}
