//! The signup form's schema and initial values

use crate::rule::Rule;
use crate::schema::{FieldSchema, Schema};
use crate::value::{FieldValue, FormValues};
use once_cell::sync::Lazy;
use regex::Regex;

static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]").expect("valid regex"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").expect("valid regex"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").expect("valid regex"));
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9]{10}$").expect("valid regex"));

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const AGE: &str = "age";
pub const PHONE_NUMBER: &str = "phone";
pub const WEBSITE: &str = "website";
pub const AGREEMENT: &str = "agreement";

/// Build the signup schema
///
/// | field     | rules                                          |
/// |-----------|------------------------------------------------|
/// | name      | required                                       |
/// | email     | required, email                                |
/// | password  | required, 8+ chars, lowercase, uppercase, digit |
/// | age       | required, number, 18..=100                     |
/// | phone     | required, exactly 10 digits                    |
/// | website   | required, url                                  |
/// | agreement | must be true                                   |
pub fn signup_schema() -> Schema {
    Schema::builder()
        .field(FieldSchema::text(NAME).required("Name is required"))
        .field(
            FieldSchema::text(EMAIL)
                .required("Email is required")
                .rule(Rule::email("Invalid email address")),
        )
        .field(
            FieldSchema::text(PASSWORD)
                .required("Password is required")
                .rule(Rule::min_length(8, "Password must be at least 8 characters"))
                .rule(Rule::matches(
                    LOWERCASE.clone(),
                    "Must contain at least one lowercase letter",
                ))
                .rule(Rule::matches(
                    UPPERCASE.clone(),
                    "Must contain at least one uppercase letter",
                ))
                .rule(Rule::matches(DIGIT.clone(), "Must contain at least one number")),
        )
        .field(
            FieldSchema::number(AGE)
                .required("Age is required")
                .type_message("Age must be a number")
                .rule(Rule::min(18.0, "You must be at least 18 years old"))
                .rule(Rule::max(100.0, "Age cannot exceed 100 years")),
        )
        .field(
            FieldSchema::text(PHONE_NUMBER)
                .required("Phone number is required")
                .rule(Rule::matches(
                    PHONE.clone(),
                    "Phone number must be exactly 10 digits",
                )),
        )
        .field(
            FieldSchema::text(WEBSITE)
                .required("Website URL is required")
                .rule(Rule::url("Invalid URL format")),
        )
        .field(
            // A missing checkbox counts the same as an unchecked one
            FieldSchema::boolean(AGREEMENT)
                .required("You must accept the terms and conditions")
                .type_message("You must accept the terms and conditions")
                .rule(Rule::is_true("You must accept the terms and conditions")),
        )
        .build()
}

/// Values the form starts from and resets to
pub fn initial_values() -> FormValues {
    [NAME, EMAIL, PASSWORD, AGE, PHONE_NUMBER, WEBSITE]
        .into_iter()
        .map(|name| (name.to_string(), FieldValue::default()))
        .chain([(AGREEMENT.to_string(), FieldValue::Bool(false))])
        .collect()
}
