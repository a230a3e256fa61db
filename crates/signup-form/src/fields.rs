// File: src/fields.rs
// Purpose: Presentation metadata for each rendered input

use signup_validation::signup::{AGE, AGREEMENT, EMAIL, NAME, PASSWORD, PHONE_NUMBER, WEBSITE};

/// HTML input type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
    Url,
    Checkbox,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Url => "url",
            InputType::Checkbox => "checkbox",
        }
    }
}

/// How one field is presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: InputType,
    pub placeholder: Option<&'static str>,
    pub autocomplete: Option<&'static str>,
}

impl FieldDef {
    const fn input(name: &'static str, label: &'static str, input_type: InputType) -> Self {
        Self {
            name,
            label,
            input_type,
            placeholder: None,
            autocomplete: None,
        }
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn autocomplete(mut self, autocomplete: &'static str) -> Self {
        self.autocomplete = Some(autocomplete);
        self
    }
}

/// Signup inputs in display order
pub fn signup_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::input(NAME, "Name", InputType::Text).placeholder("Enter your name"),
        FieldDef::input(EMAIL, "Email", InputType::Email)
            .placeholder("Enter your email")
            .autocomplete("username"),
        FieldDef::input(PASSWORD, "Password", InputType::Password)
            .placeholder("Enter your password")
            .autocomplete("current-password"),
        FieldDef::input(AGE, "Age", InputType::Number).placeholder("Enter your age"),
        FieldDef::input(PHONE_NUMBER, "Phone Number", InputType::Text)
            .placeholder("Enter your 10-digit phone number"),
        FieldDef::input(WEBSITE, "Website", InputType::Url).placeholder("Enter your website URL"),
        FieldDef::input(AGREEMENT, "I accept the terms and conditions", InputType::Checkbox),
    ]
}
