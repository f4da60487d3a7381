use crate::common::{contains, min_length, FormError};
use check_rail::factory::{self, error, that};
use check_rail::{at_once, in_order, Outcome, Validator};

#[test]
fn in_order_macro_short_circuits() {
    let v: Validator<String> = in_order![min_length(5, FormError::E1), contains("@", FormError::E2)];
    assert_eq!(v.errors_of::<FormError>(String::new()), vec![FormError::E1]);
}

#[test]
fn at_once_macro_accumulates() {
    let v: Validator<String> = at_once![min_length(5, FormError::E1), contains("@", FormError::E2),];
    assert_eq!(v.errors_of::<FormError>(String::new()), vec![FormError::E1, FormError::E2]);
}

#[test]
fn macros_match_list_form() {
    let by_macro: Validator<i32> = at_once![
        that(|n: &i32| *n > 0, FormError::E1),
        in_order![that(|n: &i32| *n < 10, FormError::E2), that(|n: &i32| n % 2 == 0, FormError::E3)],
    ];
    let by_list: Validator<i32> = factory::at_once([
        that(|n: &i32| *n > 0, FormError::E1),
        factory::in_order([that(|n: &i32| *n < 10, FormError::E2), that(|n: &i32| n % 2 == 0, FormError::E3)]),
    ]);

    for n in [-11, -2, 3, 4, 12] {
        assert_eq!(by_macro.validate(n), by_list.validate(n));
    }
}

#[test]
fn at_once_macro_with_merge_clause() {
    let v: Validator<i32> = at_once![
        Validator::lift(|n: i32| n),
        Validator::lift(|n: i32| n * 10);
        merge = |a, b| a + b
    ];
    assert_eq!(v.validate(2), Outcome::Success(22));
}

#[test]
fn single_element_macros() {
    let seq: Validator<i32> = in_order![error(FormError::E1)];
    let par: Validator<i32> = at_once![error(FormError::E2)];

    assert_eq!(seq.errors_of::<FormError>(0), vec![FormError::E1]);
    assert_eq!(par.errors_of::<FormError>(0), vec![FormError::E2]);
}

#[test]
fn at_once_macro_merge_clause_accepts_trailing_comma() {
    let v: Validator<i32> = at_once![
        Validator::lift(|n: i32| n + 1),
        Validator::lift(|n: i32| n * 3),;
        merge = |a, b| a * b,
    ];
    assert_eq!(v.validate(2), Outcome::Success(18));
}
