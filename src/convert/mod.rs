//! Conversion helpers between `Result`, `Option`, and validator outcomes.
//!
//! These adapters let existing fallible code feed into validators, and let
//! validator outcomes flow back into `?`-based code.
//!
//! # Examples
//!
//! ```
//! use check_rail::convert::*;
//!
//! let outcome = result_to_outcome("42".parse::<i32>());
//! assert!(outcome.is_success());
//!
//! let missing = option_to_outcome(None::<i32>, "absent");
//! assert_eq!(outcome_to_result(missing).unwrap_err().len(), 1);
//! ```

use crate::outcome::Outcome;
use crate::types::{AnyError, ValidationErrors};
use core::fmt::Debug;

/// Converts a `Result` into a validator outcome.
///
/// The error, if any, becomes the single error of the failure.
///
/// # Examples
///
/// ```
/// use check_rail::convert::result_to_outcome;
///
/// let err: Result<i32, &str> = Err("boom");
/// let outcome = result_to_outcome(err);
/// assert_eq!(outcome.into_failure().unwrap().of_kind::<&str>(), vec!["boom"]);
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, ValidationErrors>
where
    E: Debug + PartialEq + Send + Sync + 'static,
{
    match result {
        Ok(value) => Outcome::Success(value),
        Err(error) => Outcome::Failure(ValidationErrors::single(AnyError::new(error))),
    }
}

/// Converts an `Option` into a validator outcome, failing with `missing` on `None`.
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, missing: E) -> Outcome<T, ValidationErrors>
where
    E: Debug + PartialEq + Send + Sync + 'static,
{
    match option {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(ValidationErrors::single(AnyError::new(missing))),
    }
}

/// Converts a validator outcome into a `Result` carrying the whole error list.
///
/// # Examples
///
/// ```
/// use check_rail::convert::outcome_to_result;
/// use check_rail::factory::{at_once, error};
/// use check_rail::Validator;
///
/// let v: Validator<u8> = at_once([error("a"), error("b")]);
/// let errors = outcome_to_result(v.validate(0)).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T, ValidationErrors>) -> Result<T, ValidationErrors> {
    outcome.to_result()
}

/// Converts a validator outcome into a `Result` carrying only the first error.
///
/// Returns `None` as the error when a failure somehow holds no errors,
/// which no factory in this crate produces.
#[inline]
pub fn outcome_to_first_error<T>(outcome: Outcome<T, ValidationErrors>) -> Result<T, Option<AnyError>> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(errors) => Err(errors.into_iter().next()),
    }
}
