//! Tracing integration for validators.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! check-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::outcome::Outcome;
use crate::validator::Validator;

impl<S: 'static, T: 'static> Validator<S, T> {
    /// Wraps every invocation in a `validate` span named after `name`.
    ///
    /// Failures emit a `debug` event carrying the number of errors,
    /// successes a `trace` event. The outcome itself is returned untouched.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use check_rail::factory::that;
    ///
    /// let email = that(|s: &String| s.contains('@'), "missing @").instrumented("email");
    /// let _ = email.validate("nobody".to_string());
    /// // DEBUG validate{validator="email"}: validation failed error_count=1
    /// ```
    pub fn instrumented(self, name: &'static str) -> Self {
        Validator::new(move |subject| {
            let span = tracing::debug_span!("validate", validator = name);
            let _entered = span.enter();

            let outcome = self.validate(subject);
            match &outcome {
                Outcome::Success(_) => tracing::trace!("validation passed"),
                Outcome::Failure(errors) => {
                    tracing::debug!(error_count = errors.len(), "validation failed")
                },
            }
            outcome
        })
    }
}
