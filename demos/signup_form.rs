use check_rail::prelude::*;

#[derive(Debug, Clone)]
struct Signup {
    username: String,
    email: String,
    age: u8,
    referral_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Field {
    Username,
    Email,
    Age,
    ReferralCode,
}

#[derive(Debug, Clone, PartialEq)]
struct FieldError {
    field: Field,
    reason: &'static str,
}

fn fail(field: Field, reason: &'static str) -> FieldError {
    FieldError { field, reason }
}

fn signup_validator() -> Validator<Signup> {
    let username = in_order![
        that(|s: &String| !s.is_empty(), fail(Field::Username, "required")),
        that(|s: &String| s.chars().all(char::is_alphanumeric), fail(Field::Username, "letters and digits only")),
    ];

    let email = at_once![
        that(|s: &String| s.len() >= 5, fail(Field::Email, "too short")),
        that(|s: &String| s.contains('@'), fail(Field::Email, "missing @")),
    ];

    let age = that(|a: &u8| *a >= 18, fail(Field::Age, "must be an adult"));

    // Blank codes are treated as "not given".
    let referral_code = optional(that(|s: &String| s.len() == 8, fail(Field::ReferralCode, "must be 8 characters")))
        .ignore(|code: &Option<String>| code.as_deref() == Some(""));

    at_once![
        at(|s: &Signup| s.username.clone(), username),
        at(|s: &Signup| s.email.clone(), email),
        at(|s: &Signup| s.age, age),
        at(|s: &Signup| s.referral_code.clone(), referral_code),
    ]
}

fn main() {
    let validator = signup_validator();

    let submissions = [
        Signup {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 31,
            referral_code: None,
        },
        Signup {
            username: "b-o-b".to_string(),
            email: "bob".to_string(),
            age: 16,
            referral_code: Some("XYZ".to_string()),
        },
    ];

    for signup in submissions {
        let name = signup.username.clone();
        let grouped = validator.grouped_errors(signup, |e: &FieldError| e.field);

        if grouped.is_empty() {
            println!("{name}: ok");
            continue;
        }

        println!("{name}: rejected");
        for (field, errors) in grouped {
            let reasons: Vec<_> = errors.iter().map(|e| e.reason).collect();
            println!("  {field:?}: {}", reasons.join(", "));
        }
    }
}
