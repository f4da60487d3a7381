//! Error storage types.
//!
//! This module provides the type-erased [`AnyError`] and the ordered
//! [`ValidationErrors`] list that failed validators return.
//!
//! # Examples
//!
//! ```
//! use check_rail::{AnyError, ValidationErrors};
//!
//! let mut errors = ValidationErrors::single(AnyError::new("empty name"));
//! errors.push(AnyError::new(42_u32));
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.of_kind::<u32>(), vec![42]);
//! ```
use smallvec::SmallVec;

pub(crate) mod alloc_type;
pub mod any_error;
pub mod validation_errors;

pub use any_error::*;
pub use validation_errors::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, which covers the common case of a
/// single failing check without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
