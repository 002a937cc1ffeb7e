//! Orderings a [`Tree`][crate::Tree] can be keyed on.

use std::cmp::Ordering;

/// A total order over `T`. The tree calls [`compare`][Compare::compare] once per step of a
/// search and never caches the result.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator, so closures can be passed straight to
/// [`Tree::with_comparator`][crate::Tree::with_comparator].
pub trait Compare<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The comparator used by default. Defers to `T`'s [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
