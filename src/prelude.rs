//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use check_rail::prelude::*;
//!
//! let username: Validator<String> = in_order![
//!     that(|s: &String| !s.is_empty(), "empty"),
//!     that(|s: &String| s.chars().all(char::is_alphanumeric), "invalid characters"),
//! ];
//!
//! assert!(username.is_valid("alice42".to_string()));
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`in_order!`], [`at_once!`]
//! - **Types**: [`Validator`], [`Outcome`], [`ValidationErrors`], [`AnyError`]
//! - **Factories**: everything in [`crate::factory`]

// Macros
pub use crate::{at_once, in_order};

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::{AnyError, ValidationErrors};
pub use crate::validator::Validator;

// Factories
pub use crate::factory::{at, at_once, at_once_with, error, in_order, optional, property, that, valid};
