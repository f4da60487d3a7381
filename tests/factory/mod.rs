use crate::common::{contains, min_length, Field, FieldError, FormError, User};
use check_rail::factory::{at, at_once, at_once_with, error, in_order, optional, property, that, valid};
use check_rail::{AnyError, Outcome, Validator};

#[test]
fn that_returns_subject_unchanged_or_single_error() {
    let v = that(|s: &String| s.starts_with('a'), FormError::E1);

    assert_eq!(v.validate("abc".to_string()), Outcome::Success("abc".to_string()));
    let errors = v.errors("xyz".to_string());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.of_kind::<FormError>(), vec![FormError::E1]);
}

#[test]
fn property_behaves_like_that() {
    fn is_even(n: &i32) -> bool {
        n % 2 == 0
    }

    let by_property = property(is_even, FormError::E2);
    let by_that = that(is_even, FormError::E2);

    for n in -3..3 {
        assert_eq!(by_property.validate(n), by_that.validate(n));
    }
}

#[test]
fn valid_ignores_input() {
    let v: Validator<String, u32> = valid(7);
    assert_eq!(v.validate(String::new()), Outcome::Success(7));
    assert_eq!(v.validate("anything".to_string()), Outcome::Success(7));
}

#[test]
fn error_always_fails_with_one_error() {
    let v: Validator<i32, String> = error(FormError::E3);
    for n in [0, 1, -1] {
        assert_eq!(v.errors_of::<FormError>(n), vec![FormError::E3]);
    }
}

#[test]
fn at_focuses_on_field_and_keeps_parent() {
    let email = at(|u: &User| u.email.clone(), contains("@", FieldError::new(Field::Email, "missing @")));

    let user = User::valid();
    assert_eq!(email.validate(user.clone()), Outcome::Success(user));

    let broken = User { email: "nobody".to_string(), ..User::valid() };
    assert_eq!(email.errors_of::<FieldError>(broken), vec![FieldError::new(Field::Email, "missing @")]);
}

#[test]
fn at_matches_lift_then_on() {
    let check = || that(|age: &u8| *age >= 18, FormError::E1);
    let via_at = at(|u: &User| u.age, check());
    let via_then_on = Validator::lift(|u: User| u).then_on(|u: &User| u.age, check());

    for age in [0, 17, 18, 99] {
        let user = User { age, ..User::valid() };
        assert_eq!(via_at.validate(user.clone()), via_then_on.validate(user));
    }
}

#[test]
fn optional_none_always_succeeds() {
    let never: Validator<String> = error(FormError::E1);
    let v = optional(never);

    assert_eq!(v.validate(None), Outcome::Success(None));
}

#[test]
fn optional_some_delegates_and_wraps() {
    let len = optional(Validator::lift(|s: String| s.len()));
    assert_eq!(len.validate(Some("abcd".to_string())), Outcome::Success(Some(4)));

    let short = optional(min_length(3, FormError::E2));
    assert_eq!(short.errors_of::<FormError>(Some("ab".to_string())), vec![FormError::E2]);
}

#[test]
fn optional_field_via_at() {
    let nickname = at(|u: &User| u.nickname.clone(), optional(min_length(3, FormError::E3)));

    assert!(nickname.is_valid(User::valid()));
    assert!(nickname.is_valid(User { nickname: Some("ally".to_string()), ..User::valid() }));
    assert!(!nickname.is_valid(User { nickname: Some("al".to_string()), ..User::valid() }));
}

#[test]
fn in_order_reports_only_first_failure() {
    let v: Validator<i32> = in_order([error(FormError::E1), error(FormError::E2), error(FormError::E3)]);
    assert_eq!(v.errors_of::<FormError>(0), vec![FormError::E1]);
}

#[test]
fn in_order_single_element_is_that_element() {
    let v: Validator<i32> = in_order([that(|n: &i32| *n == 1, FormError::E1)]);
    assert!(v.is_valid(1));
    assert_eq!(v.errors_of::<FormError>(2), vec![FormError::E1]);
}

#[test]
fn in_order_stops_at_middle_failure() {
    let v: Validator<i32> = in_order([
        that(|n: &i32| *n > 0, FormError::E1),
        that(|n: &i32| *n < 10, FormError::E2),
        that(|n: &i32| n % 2 == 0, FormError::E3),
    ]);

    assert_eq!(v.errors_of::<FormError>(11), vec![FormError::E2]);
    assert_eq!(v.errors_of::<FormError>(3), vec![FormError::E3]);
    assert!(v.is_valid(4));
}

#[test]
#[should_panic(expected = "in_order requires at least one validator")]
fn in_order_panics_on_empty_list() {
    let _ = in_order(Vec::<Validator<i32>>::new());
}

#[test]
fn at_once_preserves_list_order() {
    let v: Validator<i32> = at_once([error(FormError::E1), error(FormError::E2)]);
    assert_eq!(v.errors_of::<FormError>(0), vec![FormError::E1, FormError::E2]);

    let v: Validator<i32> = at_once([error(FormError::E2), error(FormError::E1)]);
    assert_eq!(v.errors_of::<FormError>(0), vec![FormError::E2, FormError::E1]);
}

#[test]
fn at_once_skips_passing_validators() {
    let v: Validator<i32> = at_once([
        that(|n: &i32| *n > 0, FormError::E1),
        that(|n: &i32| *n < 10, FormError::E2),
        that(|n: &i32| n % 2 == 0, FormError::E3),
    ]);

    assert_eq!(v.errors_of::<FormError>(11), vec![FormError::E2, FormError::E3]);
    assert_eq!(v.validate(4), Outcome::Success(4));
}

#[test]
fn at_once_default_merge_keeps_first_value() {
    let v: Validator<i32> = at_once([Validator::lift(|n: i32| n + 1), Validator::lift(|n: i32| n + 100)]);
    assert_eq!(v.validate(1), Outcome::Success(2));
}

#[test]
fn at_once_with_merges_left_to_right() {
    let v: Validator<String> = at_once_with(
        [
            Validator::lift(|s: String| format!("{s}1")),
            Validator::lift(|s: String| format!("{s}2")),
            Validator::lift(|s: String| format!("{s}3")),
        ],
        |a, b| format!("({a}+{b})"),
    );

    assert_eq!(v.validate("x".to_string()), Outcome::Success("((x1+x2)+x3)".to_string()));
}

#[test]
#[should_panic(expected = "at_once requires at least one validator")]
fn at_once_panics_on_empty_list() {
    let _ = at_once(Vec::<Validator<i32>>::new());
}

#[test]
fn nested_composition_over_user() {
    let name = in_order([
        min_length(1, FieldError::new(Field::Name, "empty")),
        min_length(3, FieldError::new(Field::Name, "too short")),
    ]);
    let email = at_once([
        min_length(5, FieldError::new(Field::Email, "too short")),
        contains("@", FieldError::new(Field::Email, "missing @")),
    ]);
    let age = that(|a: &u8| *a >= 18, FieldError::new(Field::Age, "underage"));

    let user: Validator<User> = at_once([
        at(|u: &User| u.name.clone(), name),
        at(|u: &User| u.email.clone(), email),
        at(|u: &User| u.age, age),
    ]);

    assert!(user.is_valid(User::valid()));

    let broken = User { name: String::new(), email: String::new(), age: 3, nickname: None };
    let grouped = user.grouped_errors(broken, |e: &FieldError| e.field);

    assert_eq!(grouped[&Field::Name].len(), 1);
    assert_eq!(grouped[&Field::Email].len(), 2);
    assert_eq!(grouped[&Field::Age].len(), 1);
}

#[test]
fn error_reports_an_existing_any_error_unchanged() {
    let source: Validator<i32> = error(FormError::E1);
    let taken: AnyError = source.errors(0).first().cloned().unwrap();

    let reused: Validator<i32> = error(taken.clone());
    assert_eq!(reused.errors(0).into_iter().collect::<Vec<_>>(), vec![taken.clone()]);

    let combined: Validator<i32> = at_once([reused, error(FormError::E2)]);
    assert_eq!(combined.errors_of::<FormError>(0), vec![FormError::E1, FormError::E2]);
    assert_eq!(combined.errors(0).first(), Some(&taken));
}

#[test]
fn that_keeps_kind_of_a_reused_any_error() {
    let taken = AnyError::new(FieldError::new(Field::Email, "missing @"));
    let v = that(|s: &String| s.contains('@'), taken);

    let grouped = v.grouped_errors("nobody".to_string(), |e: &FieldError| e.field);
    assert_eq!(grouped[&Field::Email], vec![FieldError::new(Field::Email, "missing @")]);
}
