//! Type-erased error values carried by failed validations.
//!
//! Validators never inspect the errors they report, so errors of unrelated
//! types can live side by side in one [`ValidationErrors`](crate::ValidationErrors)
//! list. Each [`AnyError`] keeps an explicit [`ErrorKind`] tag next to its payload,
//! which is what the typed extraction helpers filter on.
//!
//! # Examples
//!
//! ```
//! use check_rail::AnyError;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct TooShort(usize);
//!
//! let err = AnyError::new(TooShort(5));
//! assert!(err.is::<TooShort>());
//! assert!(!err.is::<&str>());
//! assert_eq!(err.downcast_ref::<TooShort>(), Some(&TooShort(5)));
//! ```

use crate::types::alloc_type::Arc;
use core::any::{Any, TypeId};
use core::fmt;

/// Explicit kind tag attached to every [`AnyError`].
///
/// Two tags are equal exactly when they were built from the same concrete
/// error type.
#[derive(Clone, Copy)]
pub struct ErrorKind {
    id: TypeId,
    name: &'static str,
}

impl ErrorKind {
    /// Returns the tag for the error type `E`.
    #[inline]
    pub fn of<E: 'static>() -> Self {
        Self { id: TypeId::of::<E>(), name: core::any::type_name::<E>() }
    }

    /// Returns the type name recorded for this kind.
    ///
    /// Intended for diagnostics only; the exact text is not stable across
    /// compiler versions.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorKind {}

impl core::hash::Hash for ErrorKind {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Object-safe view of an error payload.
///
/// Implemented for every `'static` type that is `Debug + PartialEq + Send + Sync`,
/// so callers never implement it by hand.
trait ErasedError: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn Any) -> bool;
    fn dyn_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<E> ErasedError for E
where
    E: fmt::Debug + PartialEq + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<E>().is_some_and(|other| self == other)
    }

    fn dyn_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An opaque, application-supplied error value.
///
/// Cloning is cheap: the payload is shared behind an [`Arc`] and never
/// mutated after construction.
#[derive(Clone)]
pub struct AnyError {
    kind: ErrorKind,
    payload: Arc<dyn ErasedError>,
}

impl AnyError {
    /// Wraps an error value, tagging it with its [`ErrorKind`].
    ///
    /// Passing an existing `AnyError` returns it as is, keeping its original
    /// kind, so errors taken out of one validator can be reported by another.
    ///
    /// ```
    /// use check_rail::AnyError;
    ///
    /// let inner = AnyError::new(42_u8);
    /// let again = AnyError::new(inner.clone());
    ///
    /// assert!(again.is::<u8>());
    /// assert_eq!(again, inner);
    /// ```
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: fmt::Debug + PartialEq + Send + Sync + 'static,
    {
        if let Some(existing) = (&error as &dyn Any).downcast_ref::<AnyError>() {
            return existing.clone();
        }
        Self { kind: ErrorKind::of::<E>(), payload: Arc::new(error) }
    }

    /// Returns the kind tag of the wrapped error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if the wrapped error is of type `E`.
    #[inline]
    pub fn is<E: 'static>(&self) -> bool {
        self.kind == ErrorKind::of::<E>()
    }

    /// Returns the wrapped error if it is of type `E`.
    #[inline]
    pub fn downcast_ref<E: 'static>(&self) -> Option<&E> {
        if self.is::<E>() {
            self.payload.as_any().downcast_ref::<E>()
        } else {
            None
        }
    }
}

impl PartialEq for AnyError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.payload.dyn_eq(other.payload.as_any())
    }
}

impl fmt::Debug for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.payload.dyn_fmt(f)
    }
}
