use crate::outcome::Outcome;
use crate::validator::Validator;

impl<S: 'static, T: 'static> Validator<S, T> {
    /// Checks a field projected out of this validator's output.
    ///
    /// `project` picks the field and `check` validates it. When `check`
    /// passes the original value is returned unchanged, so a field check
    /// never rewrites its parent. When it fails its errors are returned
    /// verbatim. If `self` fails, `check` never runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::factory::that;
    /// use check_rail::{Outcome, Validator};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct User { name: String, age: u8 }
    ///
    /// let user = Validator::lift(|u: User| u)
    ///     .then_on(|u: &User| u.age, that(|age: &u8| *age >= 18, "underage"));
    ///
    /// let adult = User { name: "Ann".into(), age: 30 };
    /// assert_eq!(user.validate(adult.clone()), Outcome::Success(adult));
    ///
    /// let minor = User { name: "Bo".into(), age: 12 };
    /// assert_eq!(user.errors_of::<&str>(minor), vec!["underage"]);
    /// ```
    pub fn then_on<F, G, P>(self, project: P, check: Validator<F, G>) -> Self
    where
        F: 'static,
        G: 'static,
        P: Fn(&T) -> F + Send + Sync + 'static,
    {
        Validator::new(move |subject| {
            self.validate(subject).and_then(|value| match check.validate(project(&value)) {
                Outcome::Success(_) => Outcome::Success(value),
                Outcome::Failure(errors) => Outcome::Failure(errors),
            })
        })
    }
}

impl<S: 'static> Validator<S, S> {
    /// Skips this validator for subjects matching `when`.
    ///
    /// Matching subjects succeed unchanged without running the wrapped
    /// check; every other subject gets exactly the wrapped behaviour.
    ///
    /// # Examples
    ///
    /// ```
    /// use check_rail::factory::that;
    ///
    /// let long_or_blank = that(|s: &String| s.len() >= 5, "too short")
    ///     .ignore(|s: &String| s.is_empty());
    ///
    /// assert!(long_or_blank.is_valid(String::new()));
    /// assert!(!long_or_blank.is_valid("abc".to_string()));
    /// ```
    pub fn ignore<P>(self, when: P) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Validator::new(move |subject| {
            if when(&subject) {
                Outcome::Success(subject)
            } else {
                self.validate(subject)
            }
        })
    }
}
