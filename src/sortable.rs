//! The comparison capability every queued element provides.

use std::cmp::{Ordering, Reverse};

/// Three-way priority comparison.
///
/// `a.compare(&b)` returns [`Ordering::Less`] if `a` ranks below `b`, [`Ordering::Equal`] if they
/// rank the same, and [`Ordering::Greater`] if `a` ranks above `b`. The [`PriorityQueue`] trusts
/// this to describe a consistent ordering; it does not check. An inconsistent comparator leaves
/// the queue in some unspecified order, but never panics.
///
/// For primitives and strings, a larger value ranks higher. Wrap a value in [`Reverse`] to flip
/// that, or derive the trait from a single field:
///
/// ```rust
/// # use bounded_priority::Sortable;
/// #[derive(Sortable)]
/// struct Job {
///     name: &'static str,
///     #[sortable]
///     urgency: u32,
/// }
///
/// let a = Job { name: "a", urgency: 1 };
/// let b = Job { name: "b", urgency: 7 };
/// assert_eq!(a.compare(&b), std::cmp::Ordering::Less);
/// ```
///
/// [`PriorityQueue`]: crate::PriorityQueue
pub trait Sortable {
    /// Compare the rank of `self` against `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sortable_for_ord {
    () => {};
    ($ty:ty, $($toks:tt)*) => {
        impl Sortable for $ty {
            #[inline]
            fn compare(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }
        impl_sortable_for_ord!{$($toks)*}
    };
}

impl_sortable_for_ord! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, str, String,
}

impl<T: Sortable + ?Sized> Sortable for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        T::compare(*self, *other)
    }
}

impl<T: Sortable> Sortable for Reverse<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        other.0.compare(&self.0)
    }
}
