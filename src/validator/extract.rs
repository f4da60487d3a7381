use crate::outcome::Outcome;
use crate::types::alloc_type::{BTreeMap, Vec};
use crate::types::ValidationErrors;
use crate::validator::Validator;

impl<S, T> Validator<S, T> {
    /// Runs the validator and returns its errors.
    ///
    /// The list is empty when `subject` passes.
    pub fn errors(&self, subject: S) -> ValidationErrors {
        match self.validate(subject) {
            Outcome::Success(_) => ValidationErrors::new(),
            Outcome::Failure(errors) => errors,
        }
    }

    /// Runs the validator and returns the errors of type `E`.
    ///
    /// Errors of any other kind are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::factory::{at_once, error};
    /// use check_rail::Validator;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Code(u16);
    ///
    /// let v: Validator<()> = at_once([error(Code(1)), error("text"), error(Code(2))]);
    /// assert_eq!(v.errors_of::<Code>(()), vec![Code(1), Code(2)]);
    /// ```
    pub fn errors_of<E>(&self, subject: S) -> Vec<E>
    where
        E: Clone + 'static,
    {
        self.errors(subject).of_kind::<E>()
    }

    /// Runs the validator and groups the errors of type `E` by `field`.
    ///
    /// Errors of other kinds are dropped. Inside each group errors keep the
    /// order they were reported in. The map is empty when nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::factory::{at_once, error};
    /// use check_rail::Validator;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// enum SignupError {
    ///     Name(&'static str),
    ///     Email(&'static str),
    /// }
    ///
    /// impl SignupError {
    ///     fn field(&self) -> &'static str {
    ///         match self {
    ///             SignupError::Name(_) => "name",
    ///             SignupError::Email(_) => "email",
    ///         }
    ///     }
    /// }
    ///
    /// let v: Validator<()> = at_once([
    ///     error(SignupError::Name("empty")),
    ///     error(SignupError::Email("missing @")),
    /// ]);
    ///
    /// let grouped = v.grouped_errors((), |e: &SignupError| e.field());
    /// assert_eq!(grouped.len(), 2);
    /// assert_eq!(grouped["email"], vec![SignupError::Email("missing @")]);
    /// ```
    pub fn grouped_errors<E, K, F>(&self, subject: S, field: F) -> BTreeMap<K, Vec<E>>
    where
        E: Clone + 'static,
        K: Ord,
        F: Fn(&E) -> K,
    {
        self.errors(subject).grouped_by(field)
    }
}
