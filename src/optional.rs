//! An explicit optional value.
//!
//! See documentation for [`Optional`].
use crate::Error;

/// A value that is either present ([`Optional::Some`]) or absent ([`Optional::None`]).
///
/// This is what [`PriorityQueue::pop()`](crate::PriorityQueue::pop) hands back. Getting at the
/// value always goes through a checked path: pattern matching, a fallback accessor, or
/// [`Optional::unwrap()`], which reports absence as [`Error::EmptyUnwrap`] rather than panicking.
///
/// ```rust
/// # use bounded_priority::{Error, Optional};
/// let some = Optional::Some(3);
/// assert_eq!(some.map(|x| x * 2).unwrap(), Ok(6));
///
/// let none: Optional<i32> = Optional::None;
/// assert_eq!(none.unwrap(), Err(Error::EmptyUnwrap));
/// assert_eq!(none.unwrap_or(7), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Optional<T> {
    /// Whether a value is present.
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    /// Whether the value is absent.
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Take the value, or fail with [`Error::EmptyUnwrap`].
    ///
    /// Unlike [`Option::unwrap()`], this never panics: absence comes back as an `Err` for the
    /// caller to propagate with `?`.
    pub fn unwrap(self) -> Result<T, Error> {
        self.expect(Error::EmptyUnwrap)
    }

    /// Take the value, or fall back to `def`.
    pub fn unwrap_or(self, def: T) -> T {
        match self {
            Optional::Some(t) => t,
            Optional::None => def,
        }
    }

    /// Take the value, or compute a fallback.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Optional::Some(t) => t,
            Optional::None => f(),
        }
    }

    /// Take the value, or fail with the caller's error `e`, returned untouched.
    pub fn expect<E>(self, e: E) -> Result<T, E> {
        match self {
            Optional::Some(t) => Ok(t),
            Optional::None => Err(e),
        }
    }

    /// Keep the value only if `predicate` accepts it.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        if let Optional::Some(t) = self {
            if predicate(&t) {
                return Optional::Some(t);
            }
        }
        Optional::None
    }

    /// Transform a present value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Some(t) => Optional::Some(f(t)),
            Optional::None => Optional::None,
        }
    }

    /// Transform a present value, or return `def`.
    ///
    /// Unlike [`Option::map_or()`], the transform comes first.
    pub fn map_or<U>(self, f: impl FnOnce(T) -> U, def: U) -> U {
        match self {
            Optional::Some(t) => f(t),
            Optional::None => def,
        }
    }

    /// Transform a present value, or compute a fallback.
    pub fn map_or_else<U>(self, f: impl FnOnce(T) -> U, default: impl FnOnce() -> U) -> U {
        match self {
            Optional::Some(t) => f(t),
            Optional::None => default(),
        }
    }

    /// Chain a computation that may itself produce nothing.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Optional<U>) -> Optional<U> {
        match self {
            Optional::Some(t) => f(t),
            Optional::None => Optional::None,
        }
    }

    /// Combine with another optional; `None` if either side is empty.
    pub fn zip_with<U, V>(
        self,
        other: Optional<U>,
        f: impl FnOnce(T, U) -> Optional<V>,
    ) -> Optional<V> {
        match (self, other) {
            (Optional::Some(t), Optional::Some(u)) => f(t, u),
            _ => Optional::None,
        }
    }

    /// Run `some` with the value if present, `none` otherwise.
    pub fn match_with(self, some: impl FnOnce(T), none: impl FnOnce()) {
        match self {
            Optional::Some(t) => some(t),
            Optional::None => none(),
        }
    }

    /// Run `f` with the value if present.
    pub fn match_some(self, f: impl FnOnce(T)) {
        if let Optional::Some(t) = self {
            f(t)
        }
    }

    /// Run `f` if the value is absent.
    pub fn match_none(self, f: impl FnOnce()) {
        if self.is_none() {
            f()
        }
    }

    /// `self` if present, otherwise `other`.
    pub fn or(self, other: Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(_) => self,
            Optional::None => other,
        }
    }

    /// `self` if present, otherwise whatever `f` produces.
    pub fn or_else(self, f: impl FnOnce() -> Optional<T>) -> Optional<T> {
        match self {
            Optional::Some(_) => self,
            Optional::None => f(),
        }
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(t) => Optional::Some(t),
            Optional::None => Optional::None,
        }
    }

    /// Convert into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(t) => Optional::Some(t),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(t) => Some(t),
            Optional::None => None,
        }
    }
}
