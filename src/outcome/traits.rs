use crate::types::alloc_type::Vec;
use crate::types::{ErrorVec, ValidationErrors};

/// Associative, order-preserving concatenation of failure payloads.
///
/// Used by [`Outcome::zip_with`](crate::Outcome::zip_with) when both sides
/// failed. Implementations must keep every item of `self` ahead of every
/// item of `other`.
///
/// # Examples
///
/// ```
/// use check_rail::outcome::Combine;
///
/// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
/// ```
pub trait Combine {
    fn combine(self, other: Self) -> Self;
}

impl Combine for ValidationErrors {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

impl<T> Combine for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Combine for ErrorVec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
