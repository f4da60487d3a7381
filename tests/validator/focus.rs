use crate::common::{min_length, Field, FieldError, FormError, User};
use check_rail::factory::{error, that};
use check_rail::{Outcome, Validator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn then_on_returns_parent_unchanged_on_success() {
    let v = Validator::lift(|u: User| u).then_on(|u: &User| u.name.clone(), min_length(3, FormError::E1));

    let user = User::valid();
    assert_eq!(v.validate(user.clone()), Outcome::Success(user));
}

#[test]
fn then_on_ignores_transformed_field_value() {
    let shout = Validator::lift(|s: String| s.to_uppercase());
    let v = Validator::lift(|u: User| u).then_on(|u: &User| u.name.clone(), shout);

    assert_eq!(v.validate(User::valid()).into_success().unwrap().name, "alice");
}

#[test]
fn then_on_propagates_field_errors_verbatim() {
    let v = Validator::lift(|u: User| u).then_on(
        |u: &User| u.age,
        that(|age: &u8| *age >= 18, FieldError::new(Field::Age, "underage")),
    );

    let minor = User { age: 9, ..User::valid() };
    assert_eq!(v.errors_of::<FieldError>(minor), vec![FieldError::new(Field::Age, "underage")]);
}

#[test]
fn then_on_skips_field_check_when_parent_fails() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let check = Validator::lift(move |age: u8| {
        counter.fetch_add(1, Ordering::SeqCst);
        age
    });

    let parent: Validator<User> = error(FormError::E2);
    let v = parent.then_on(|u: &User| u.age, check);

    assert_eq!(v.errors_of::<FormError>(User::valid()), vec![FormError::E2]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn ignore_bypasses_failing_validator() {
    let v = that(|s: &String| s.len() >= 5, FormError::E1).ignore(|s: &String| s.is_empty());

    assert_eq!(v.validate(String::new()), Outcome::Success(String::new()));
    assert_eq!(v.errors_of::<FormError>("abc".to_string()), vec![FormError::E1]);
    assert!(v.is_valid("abcdef".to_string()));
}

#[test]
fn ignore_does_not_invoke_wrapped_validator() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let v = Validator::lift(move |n: i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        n + 1
    })
    .ignore(|n: &i32| *n < 0);

    assert_eq!(v.validate(-4), Outcome::Success(-4));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(v.validate(4), Outcome::Success(5));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
