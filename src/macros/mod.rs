//! List-building shorthands for composing validators.
//!
//! - [`macro@crate::in_order`] - collects validators and forwards to
//!   [`factory::in_order`](crate::factory::in_order).
//! - [`macro@crate::at_once`] - collects validators and forwards to
//!   [`factory::at_once`](crate::factory::at_once), or to
//!   [`factory::at_once_with`](crate::factory::at_once_with) when a
//!   `merge = ...` clause follows the list.
//!
//! Both are purely notational: the macro form and the list form build the
//! same validator.
//!
//! # Examples
//!
//! ```
//! use check_rail::factory::that;
//! use check_rail::{at_once, in_order, Validator};
//!
//! let password: Validator<String> = at_once![
//!     in_order![
//!         that(|s: &String| !s.is_empty(), "empty"),
//!         that(|s: &String| s.len() >= 8, "too short"),
//!     ],
//!     that(|s: &String| s.chars().any(|c| c.is_ascii_digit()), "no digit"),
//! ];
//!
//! assert_eq!(password.errors_of::<&str>(String::new()), vec!["empty", "no digit"]);
//! ```

/// Composes validators sequentially; only the first failure is reported.
///
/// Expands to [`factory::in_order`](crate::factory::in_order) over an array
/// of the given validators, and shares its panic on an empty list.
///
/// # Examples
///
/// ```
/// use check_rail::factory::that;
/// use check_rail::{in_order, Validator};
///
/// let v: Validator<i32> = in_order![
///     that(|n: &i32| *n > 0, "not positive"),
///     that(|n: &i32| *n < 100, "too large"),
/// ];
///
/// assert_eq!(v.errors_of::<&str>(-1), vec!["not positive"]);
/// ```
#[macro_export]
macro_rules! in_order {
    ($($validator:expr),+ $(,)?) => {
        $crate::factory::in_order([$($validator),+])
    };
}

/// Composes validators in parallel; every failure is reported in order.
///
/// Accepts an optional trailing `; merge = <fn>` clause that selects
/// [`factory::at_once_with`](crate::factory::at_once_with).
///
/// # Examples
///
/// ```
/// use check_rail::factory::that;
/// use check_rail::{at_once, Validator};
///
/// let v: Validator<i32> = at_once![
///     that(|n: &i32| *n > 0, "not positive"),
///     that(|n: &i32| n % 2 == 0, "odd"),
/// ];
/// assert_eq!(v.errors_of::<&str>(-3), vec!["not positive", "odd"]);
///
/// let sum: Validator<i32> = at_once![
///     Validator::lift(|n: i32| n),
///     Validator::lift(|n: i32| n * 2);
///     merge = |a, b| a + b
/// ];
/// assert_eq!(sum.validate(5).into_success(), Some(15));
/// ```
#[macro_export]
macro_rules! at_once {
    ($($validator:expr),+ $(,)? ; merge = $merge:expr $(,)?) => {
        $crate::factory::at_once_with([$($validator),+], $merge)
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::factory::at_once([$($validator),+])
    };
}
