//! The composable [`Validator`] and its combinators.
//!
//! A validator wraps a pure function `S -> Outcome<T, ValidationErrors>`.
//! Validators are built once and invoked any number of times; composing two
//! validators produces a new one that shares its parts behind an [`Arc`].
//!
//! Two composition styles exist:
//!
//! - [`and_then`](Validator::and_then) runs checks in sequence and stops at the
//!   first failure, so at most one link reports errors.
//! - [`add`](Validator::add) runs both checks against the same subject and
//!   accumulates the errors of every failing side, left before right.
//!
//! # Examples
//!
//! ```
//! use check_rail::factory::that;
//!
//! let non_empty = that(|s: &String| !s.is_empty(), "empty");
//! let has_at = that(|s: &String| s.contains('@'), "missing @");
//!
//! let sequential = non_empty.clone().and_then(has_at.clone());
//! assert_eq!(sequential.errors(String::new()).len(), 1);
//!
//! let parallel = non_empty.add_first(has_at);
//! assert_eq!(parallel.errors(String::new()).len(), 2);
//! ```

use crate::outcome::Outcome;
use crate::types::alloc_type::Arc;
use crate::types::{AnyError, ValidationErrors};
use core::fmt;

mod extract;
mod focus;
#[cfg(feature = "tracing")]
mod tracing_ext;

type CheckFn<S, T> = dyn Fn(S) -> Outcome<T, ValidationErrors> + Send + Sync;

/// A reusable check over subjects of type `S` that produces a `T` on success.
///
/// `Validator<S>` (with `T = S`) is the common case: a check that hands the
/// subject back unchanged when it passes.
///
/// Cloning is cheap and shares the wrapped function.
#[must_use]
pub struct Validator<S, T = S> {
    check: Arc<CheckFn<S, T>>,
}

impl<S, T> Clone for Validator<S, T> {
    fn clone(&self) -> Self {
        Self { check: Arc::clone(&self.check) }
    }
}

impl<S, T> fmt::Debug for Validator<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("subject", &core::any::type_name::<S>())
            .field("output", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<S, T> Validator<S, T> {
    /// Wraps a function as a validator.
    ///
    /// The function is expected to be pure; nothing checks that it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::{AnyError, Outcome, ValidationErrors, Validator};
    ///
    /// let positive = Validator::new(|n: i32| {
    ///     if n > 0 {
    ///         Outcome::success(n)
    ///     } else {
    ///         Outcome::failure(ValidationErrors::single(AnyError::new("not positive")))
    ///     }
    /// });
    /// assert!(positive.is_valid(3));
    /// assert!(!positive.is_valid(-3));
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(S) -> Outcome<T, ValidationErrors> + Send + Sync + 'static,
    {
        Self { check: Arc::new(f) }
    }

    /// Runs the validator against `subject`.
    #[inline]
    pub fn validate(&self, subject: S) -> Outcome<T, ValidationErrors> {
        (self.check)(subject)
    }

    /// Returns `true` if `subject` passes.
    #[inline]
    pub fn is_valid(&self, subject: S) -> bool {
        self.validate(subject).is_success()
    }

    /// Builds a validator that always succeeds with `f(subject)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::{Outcome, Validator};
    ///
    /// let len = Validator::lift(|s: String| s.len());
    /// assert_eq!(len.validate("abc".to_string()), Outcome::Success(3));
    /// ```
    pub fn lift<F>(f: F) -> Self
    where
        F: Fn(S) -> T + Send + Sync + 'static,
    {
        Self::new(move |subject| Outcome::Success(f(subject)))
    }

    /// Builds a validator from a fallible conversion.
    ///
    /// `Err(e)` becomes a failure carrying `e` as its single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Validator;
    ///
    /// let port = Validator::try_from_fn(|s: String| s.parse::<u16>());
    /// assert_eq!(port.validate("8080".to_string()).into_success(), Some(8080));
    /// assert_eq!(port.errors("http".to_string()).len(), 1);
    /// ```
    pub fn try_from_fn<F, E>(f: F) -> Self
    where
        F: Fn(S) -> Result<T, E> + Send + Sync + 'static,
        E: fmt::Debug + PartialEq + Send + Sync + 'static,
    {
        Self::new(move |subject| match f(subject) {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(ValidationErrors::single(AnyError::new(error))),
        })
    }
}

impl<S: 'static, T: 'static> Validator<S, T> {
    /// Transforms the success value.
    ///
    /// Failures pass through unchanged and `transform` is not called.
    pub fn map<O, F>(self, transform: F) -> Validator<S, O>
    where
        F: Fn(T) -> O + Send + Sync + 'static,
    {
        Validator::new(move |subject| self.validate(subject).map(&transform))
    }

    /// Rewrites every error of a failure, leaving successes untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::{AnyError, factory::that};
    ///
    /// let tagged = that(|n: &i32| *n > 0, "not positive")
    ///     .map_errors(|_| AnyError::new(("age", "not positive")));
    ///
    /// assert_eq!(tagged.errors_of::<(&str, &str)>(-1), vec![("age", "not positive")]);
    /// ```
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: Fn(AnyError) -> AnyError + Send + Sync + 'static,
    {
        Validator::new(move |subject| {
            self.validate(subject).map_err(|errors| errors.into_iter().map(&f).collect())
        })
    }

    /// Runs `next` on this validator's output, stopping at the first failure.
    ///
    /// If `self` fails, its errors are returned as they are and `next` never
    /// runs; otherwise `next`'s outcome is the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::factory::error;
    /// use check_rail::Validator;
    ///
    /// let first: Validator<i32> = error("e1");
    /// let second: Validator<i32> = error("e2");
    ///
    /// let chained = first.and_then(second);
    /// assert_eq!(chained.errors_of::<&str>(0), vec!["e1"]);
    /// ```
    pub fn and_then<O: 'static>(self, next: Validator<T, O>) -> Validator<S, O> {
        Validator::new(move |subject| self.validate(subject).and_then(|value| next.validate(value)))
    }

    /// Runs both validators against the same subject and combines the outcomes.
    ///
    /// Both successes are joined with `merge`. If either side fails, the
    /// result fails with every failing side's errors, `self`'s first.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::factory::error;
    /// use check_rail::Validator;
    ///
    /// let left: Validator<i32> = error("e1");
    /// let right: Validator<i32> = error("e2");
    ///
    /// let both = left.add(right, |a, _| a);
    /// assert_eq!(both.errors_of::<&str>(0), vec!["e1", "e2"]);
    /// ```
    pub fn add<T2, O, M>(self, other: Validator<S, T2>, merge: M) -> Validator<S, O>
    where
        S: Clone,
        T2: 'static,
        M: Fn(T, T2) -> O + Send + Sync + 'static,
    {
        Validator::new(move |subject: S| {
            let left = self.validate(subject.clone());
            let right = other.validate(subject);
            left.zip_with(right, &merge)
        })
    }

    /// [`add`](Validator::add) keeping this validator's success value.
    pub fn add_first<T2: 'static>(self, other: Validator<S, T2>) -> Self
    where
        S: Clone,
    {
        self.add(other, |first, _| first)
    }
}
