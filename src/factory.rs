//! Constructors for primitive validators and list-based composition.
//!
//! Every function here is generic over the subject type, which is usually
//! inferred from the predicate or from the binding's annotation.
//!
//! # Examples
//!
//! ```
//! use check_rail::factory::{at, at_once, in_order, that};
//! use check_rail::Validator;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Signup { name: String, email: String }
//!
//! let name: Validator<String> = in_order([
//!     that(|s: &String| !s.is_empty(), "name: empty"),
//!     that(|s: &String| s.len() <= 32, "name: too long"),
//! ]);
//! let email = that(|s: &String| s.contains('@'), "email: missing @");
//!
//! let signup: Validator<Signup> = at_once([
//!     at(|s: &Signup| s.name.clone(), name),
//!     at(|s: &Signup| s.email.clone(), email),
//! ]);
//!
//! let form = Signup { name: String::new(), email: "nobody".into() };
//! assert_eq!(signup.errors_of::<&str>(form), vec!["name: empty", "email: missing @"]);
//! ```

use crate::outcome::Outcome;
use crate::types::alloc_type::Arc;
use crate::types::{AnyError, ValidationErrors};
use crate::validator::Validator;
use core::fmt::Debug;

/// Builds a check that passes subjects satisfying `predicate`.
///
/// Passing subjects are returned unchanged; failing ones produce exactly one
/// error, `otherwise`.
///
/// # Examples
///
/// ```
/// use check_rail::factory::that;
/// use check_rail::Outcome;
///
/// let even = that(|n: &i32| n % 2 == 0, "odd");
/// assert_eq!(even.validate(4), Outcome::Success(4));
/// assert_eq!(even.errors_of::<&str>(3), vec!["odd"]);
/// ```
pub fn that<S, P, E>(predicate: P, otherwise: E) -> Validator<S>
where
    P: Fn(&S) -> bool + Send + Sync + 'static,
    E: Debug + PartialEq + Send + Sync + 'static,
{
    let otherwise = AnyError::new(otherwise);
    Validator::new(move |subject| {
        if predicate(&subject) {
            Outcome::Success(subject)
        } else {
            Outcome::Failure(ValidationErrors::single(otherwise.clone()))
        }
    })
}

/// Same as [`that`]; reads better when the predicate names a property.
///
/// # Examples
///
/// ```
/// use check_rail::factory::property;
///
/// fn is_ascii(s: &String) -> bool {
///     s.is_ascii()
/// }
///
/// let ascii = property(is_ascii, "non-ascii");
/// assert!(ascii.is_valid("plain".to_string()));
/// assert!(!ascii.is_valid("naïve".to_string()));
/// ```
pub fn property<S, P, E>(predicate: P, otherwise: E) -> Validator<S>
where
    P: Fn(&S) -> bool + Send + Sync + 'static,
    E: Debug + PartialEq + Send + Sync + 'static,
{
    that(predicate, otherwise)
}

/// Builds a validator that ignores its subject and always succeeds with `value`.
pub fn valid<S, T>(value: T) -> Validator<S, T>
where
    T: Clone + Send + Sync + 'static,
{
    Validator::new(move |_| Outcome::Success(value.clone()))
}

/// Builds a validator that ignores its subject and always fails with `[error]`.
pub fn error<S, T, E>(error: E) -> Validator<S, T>
where
    E: Debug + PartialEq + Send + Sync + 'static,
{
    let error = AnyError::new(error);
    Validator::new(move |_| Outcome::Failure(ValidationErrors::single(error.clone())))
}

/// Applies `check` to the field `project` selects, keeping the parent on success.
///
/// Equivalent to `Validator::lift(|s| s).then_on(project, check)`.
///
/// # Examples
///
/// ```
/// use check_rail::factory::{at, that};
/// use check_rail::Outcome;
///
/// let first_positive = at(|pair: &(i32, i32)| pair.0, that(|n: &i32| *n > 0, "first <= 0"));
///
/// assert_eq!(first_positive.validate((1, -5)), Outcome::Success((1, -5)));
/// assert_eq!(first_positive.errors_of::<&str>((0, 5)), vec!["first <= 0"]);
/// ```
pub fn at<S, F, G, P>(project: P, check: Validator<F, G>) -> Validator<S>
where
    S: 'static,
    F: 'static,
    G: 'static,
    P: Fn(&S) -> F + Send + Sync + 'static,
{
    Validator::lift(|subject: S| subject).then_on(project, check)
}

/// Lifts a validator to optional subjects.
///
/// `None` always succeeds with `None`; `Some(s)` runs `validator` on `s`
/// and wraps its success value in `Some`.
///
/// # Examples
///
/// ```
/// use check_rail::factory::{optional, that};
/// use check_rail::Outcome;
///
/// let nickname = optional(that(|s: &String| s.len() >= 3, "too short"));
///
/// assert_eq!(nickname.validate(None), Outcome::Success(None));
/// assert!(!nickname.is_valid(Some("ab".to_string())));
/// ```
pub fn optional<S, T>(validator: Validator<S, T>) -> Validator<Option<S>, Option<T>>
where
    S: 'static,
    T: 'static,
{
    Validator::new(move |subject: Option<S>| match subject {
        None => Outcome::Success(None),
        Some(subject) => validator.validate(subject).map(Some),
    })
}

/// Chains `validators` left to right with [`Validator::and_then`].
///
/// Only the first failing validator contributes errors; the ones after it
/// never run.
///
/// # Panics
///
/// Panics if `validators` is empty. An empty composition is a programming
/// error, not a passing check.
///
/// # Examples
///
/// ```
/// use check_rail::factory::{in_order, that};
/// use check_rail::Validator;
///
/// let email: Validator<String> = in_order([
///     that(|s: &String| s.len() >= 5, "too short"),
///     that(|s: &String| s.contains('@'), "missing @"),
/// ]);
///
/// assert_eq!(email.errors_of::<&str>(String::new()), vec!["too short"]);
/// ```
pub fn in_order<S, I>(validators: I) -> Validator<S>
where
    S: 'static,
    I: IntoIterator<Item = Validator<S>>,
{
    match validators.into_iter().reduce(|chain, next| chain.and_then(next)) {
        Some(chain) => chain,
        None => panic!("in_order requires at least one validator"),
    }
}

/// Runs every validator against the same subject, accumulating all errors.
///
/// Errors appear in the order of `validators`. On success the first
/// validator's value is returned.
///
/// # Panics
///
/// Panics if `validators` is empty.
///
/// # Examples
///
/// ```
/// use check_rail::factory::{at_once, that};
/// use check_rail::Validator;
///
/// let email: Validator<String> = at_once([
///     that(|s: &String| s.len() >= 5, "too short"),
///     that(|s: &String| s.contains('@'), "missing @"),
/// ]);
///
/// assert_eq!(email.errors_of::<&str>(String::new()), vec!["too short", "missing @"]);
/// ```
pub fn at_once<S, I>(validators: I) -> Validator<S>
where
    S: Clone + 'static,
    I: IntoIterator<Item = Validator<S>>,
{
    at_once_with(validators, |first, _| first)
}

/// [`at_once`] with an explicit `merge` for joining success values.
///
/// Values are merged left to right, so three validators yield
/// `merge(merge(a, b), c)`.
///
/// # Panics
///
/// Panics if `validators` is empty.
///
/// # Examples
///
/// ```
/// use check_rail::factory::at_once_with;
/// use check_rail::Validator;
///
/// let sum: Validator<i32> = at_once_with(
///     [Validator::lift(|n: i32| n + 1), Validator::lift(|n: i32| n * 10)],
///     |a, b| a + b,
/// );
/// assert_eq!(sum.validate(2).into_success(), Some(23));
/// ```
pub fn at_once_with<S, I, M>(validators: I, merge: M) -> Validator<S>
where
    S: Clone + 'static,
    I: IntoIterator<Item = Validator<S>>,
    M: Fn(S, S) -> S + Send + Sync + 'static,
{
    let merge = Arc::new(merge);
    let folded = validators.into_iter().reduce(|acc, next| {
        let merge = Arc::clone(&merge);
        acc.add(next, move |a, b| merge(a, b))
    });

    match folded {
        Some(validator) => validator,
        None => panic!("at_once requires at least one validator"),
    }
}
