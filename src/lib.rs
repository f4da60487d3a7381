//! Composable validators for arbitrary data.
//!
//! A [`Validator<S, T>`] is a pure function from a subject `S` to an
//! [`Outcome`] holding either a (possibly transformed) `T` or the
//! [`ValidationErrors`] explaining why the subject was rejected. Small checks
//! are combined into larger ones either sequentially, stopping at the first
//! failure, or in parallel, accumulating every failure.
//!
//! # Examples
//!
//! ## Sequential vs Parallel Composition
//!
//! ```
//! use check_rail::factory::{at_once, in_order, that};
//! use check_rail::Validator;
//!
//! let checks = || [
//!     that(|s: &String| s.len() >= 5, "too short"),
//!     that(|s: &String| s.contains('@'), "missing @"),
//! ];
//!
//! let sequential: Validator<String> = in_order(checks());
//! let parallel: Validator<String> = at_once(checks());
//!
//! assert_eq!(sequential.errors(String::new()).len(), 1);
//! assert_eq!(parallel.errors(String::new()).len(), 2);
//! ```
//!
//! ## Field Focus and Grouping
//!
//! ```
//! use check_rail::factory::{at, at_once, that};
//! use check_rail::Validator;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Form { name: String, age: u8 }
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct FieldError { field: &'static str, reason: &'static str }
//!
//! let form: Validator<Form> = at_once([
//!     at(|f: &Form| f.name.clone(), that(|n: &String| !n.is_empty(),
//!         FieldError { field: "name", reason: "empty" })),
//!     at(|f: &Form| f.age, that(|a: &u8| *a >= 18,
//!         FieldError { field: "age", reason: "underage" })),
//! ]);
//!
//! let grouped = form.grouped_errors(Form { name: String::new(), age: 9 }, |e: &FieldError| e.field);
//! assert_eq!(grouped.len(), 2);
//! assert_eq!(grouped["age"][0].reason, "underage");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome`, `Result` and `Option`
pub mod convert;
/// Constructors for primitive validators and list-based composition
pub mod factory;
/// `in_order!` and `at_once!` list-building macros
pub mod macros;
/// The `Outcome` type and its helpers
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Type-erased errors and the ordered error list
pub mod types;
/// The `Validator` type and its combinators
pub mod validator;

pub use outcome::{Combine, Outcome};
pub use types::{AnyError, ErrorKind, ErrorVec, ValidationErrors};
pub use validator::Validator;
