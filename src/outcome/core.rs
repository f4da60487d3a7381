use crate::outcome::traits::Combine;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-case result of running a check: a success value or the failure's errors.
///
/// At the validator boundary `E` is always
/// [`ValidationErrors`](crate::ValidationErrors), but the helpers here work
/// for any error payload.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do.
///
/// # Examples
///
/// ```
/// use check_rail::Outcome;
///
/// let ok = Outcome::<i32, &str>::success(42);
/// assert!(ok.is_success());
///
/// let failed = Outcome::<i32, &str>::failure("too small");
/// assert!(failed.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome holds errors.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the success value using the provided function.
    ///
    /// If the outcome is a failure, the errors are preserved unchanged and
    /// `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::success(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::Success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure payload while preserving the success branch.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chains a computation that runs only on success.
    ///
    /// Behaves like [`Result::and_then`]: a failure is returned as is and
    /// `f` is never invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// fn even(input: i32) -> Outcome<i32, &'static str> {
    ///     if input % 2 == 0 { Outcome::success(input) } else { Outcome::failure("odd") }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).and_then(even), Outcome::Success(4));
    /// assert_eq!(Outcome::success(3).and_then(even), Outcome::Failure("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Calls `op` on failure, otherwise returns the success value.
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => op(error),
        }
    }

    /// Combines two outcomes, accumulating the errors of both.
    ///
    /// | `self` | `other` | result |
    /// |---|---|---|
    /// | success(a) | success(b) | success(merge(a, b)) |
    /// | failure(e1) | failure(e2) | failure(e1 ++ e2) |
    /// | success | failure(e2) | failure(e2) |
    /// | failure(e1) | success | failure(e1) |
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::Outcome;
    ///
    /// let a = Outcome::<i32, Vec<&str>>::failure(vec!["e1"]);
    /// let b = Outcome::<i32, Vec<&str>>::failure(vec!["e2"]);
    /// assert_eq!(a.zip_with(b, |x, y| x + y), Outcome::Failure(vec!["e1", "e2"]));
    /// ```
    #[inline]
    pub fn zip_with<U, O, F>(self, other: Outcome<U, E>, merge: F) -> Outcome<O, E>
    where
        E: Combine,
        F: FnOnce(T, U) -> O,
    {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(merge(a, b)),
            (Outcome::Failure(e), Outcome::Success(_)) => Outcome::Failure(e),
            (Outcome::Success(_), Outcome::Failure(e)) => Outcome::Failure(e),
            (Outcome::Failure(e1), Outcome::Failure(e2)) => Outcome::Failure(e1.combine(e2)),
        }
    }

    /// Combines two outcomes into a tuple, accumulating the errors of both.
    #[inline]
    pub fn zip<U>(self, other: Outcome<U, E>) -> Outcome<(T, U), E>
    where
        E: Combine,
    {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the errors.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Converts into a `Result`.
    #[inline]
    pub fn to_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a `Result`, mapping `Ok` to success and `Err` to failure.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Extracts the success value, if any.
    #[must_use]
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure payload, if any.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_result()
    }
}
