use crate::types::alloc_type::{BTreeMap, Vec};
use crate::types::{AnyError, ErrorKind, ErrorVec};
use core::fmt::Debug;

/// Ordered list of errors reported by a failed validation.
///
/// A single failing check contributes exactly one error. Lists coming from
/// independent checks are combined with [`merge`](ValidationErrors::merge),
/// which keeps the left list's errors ahead of the right list's.
///
/// # Examples
///
/// ```
/// use check_rail::{AnyError, ValidationErrors};
///
/// let left = ValidationErrors::single(AnyError::new("too short"));
/// let right = ValidationErrors::single(AnyError::new("missing @"));
/// let merged = left.merge(right);
///
/// assert_eq!(merged.of_kind::<&str>(), vec!["too short", "missing @"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors {
    items: ErrorVec<AnyError>,
}

impl ValidationErrors {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self { items: ErrorVec::new() }
    }

    /// Creates a list holding exactly one error.
    #[inline]
    pub fn single(error: AnyError) -> Self {
        let mut items = ErrorVec::new();
        items.push(error);
        Self { items }
    }

    /// Appends `other` after the errors already held, returning the combined list.
    #[must_use]
    #[inline]
    pub fn merge(mut self, other: Self) -> Self {
        self.items.extend(other.items);
        self
    }

    /// Adds a single error at the end.
    #[inline]
    pub fn push(&mut self, error: AnyError) {
        self.items.push(error);
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of errors.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the errors in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, AnyError> {
        self.items.iter()
    }

    /// Returns the first error, if any.
    #[inline]
    pub fn first(&self) -> Option<&AnyError> {
        self.items.first()
    }

    /// Returns the kind tag of every error, in order.
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.items.iter().map(AnyError::kind).collect()
    }

    /// Returns clones of every error of type `E`, in order.
    ///
    /// Errors of any other kind are skipped.
    pub fn of_kind<E>(&self) -> Vec<E>
    where
        E: Clone + 'static,
    {
        self.items.iter().filter_map(|err| err.downcast_ref::<E>().cloned()).collect()
    }

    /// Groups the errors of type `E` by the key `field` derives from each one.
    ///
    /// Errors inside a group keep their relative order. Errors of any other
    /// kind are skipped, so the map is empty when nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::{AnyError, ValidationErrors};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct FieldError { field: &'static str, code: u8 }
    ///
    /// let errors: ValidationErrors = [
    ///     AnyError::new(FieldError { field: "name", code: 1 }),
    ///     AnyError::new(FieldError { field: "email", code: 2 }),
    ///     AnyError::new(FieldError { field: "name", code: 3 }),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let grouped = errors.grouped_by(|e: &FieldError| e.field);
    /// assert_eq!(grouped["name"].len(), 2);
    /// assert_eq!(grouped["name"][1].code, 3);
    /// assert_eq!(grouped["email"].len(), 1);
    /// ```
    pub fn grouped_by<E, K, F>(&self, field: F) -> BTreeMap<K, Vec<E>>
    where
        E: Clone + 'static,
        K: Ord,
        F: Fn(&E) -> K,
    {
        let mut groups: BTreeMap<K, Vec<E>> = BTreeMap::new();
        for err in self.items.iter().filter_map(AnyError::downcast_ref::<E>) {
            groups.entry(field(err)).or_default().push(err.clone());
        }
        groups
    }

    /// Consumes the list and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<AnyError> {
        self.items
    }
}

impl From<AnyError> for ValidationErrors {
    fn from(error: AnyError) -> Self {
        Self::single(error)
    }
}

impl From<ErrorVec<AnyError>> for ValidationErrors {
    fn from(items: ErrorVec<AnyError>) -> Self {
        Self { items }
    }
}

impl FromIterator<AnyError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = AnyError>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl Extend<AnyError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = AnyError>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = AnyError;
    type IntoIter = smallvec::IntoIter<[AnyError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a AnyError;
    type IntoIter = core::slice::Iter<'a, AnyError>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
