//! The [`Outcome`] type produced by every validator.
//!
//! An outcome is either a success value or a failure payload. Validators
//! always fail with [`ValidationErrors`](crate::ValidationErrors); the
//! [`Combine`] trait describes how two failure payloads are concatenated when
//! independent checks are combined.
//!
//! # Examples
//!
//! ```
//! use check_rail::Outcome;
//!
//! let outcome = Outcome::<i32, &str>::success(20).map(|n| n + 1);
//! assert_eq!(outcome.unwrap_or(0), 21);
//!
//! let failed = Outcome::<i32, &str>::failure("nope");
//! assert_eq!(failed.unwrap_or_default(), 0);
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
pub use self::traits::*;
