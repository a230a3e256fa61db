pub mod render;
pub mod session;
pub mod submit;
pub mod validate;

use anyhow::{Context, Result};
use colored::Colorize;
use signup_form::Form;
use signup_validation::{FormValues, ValidationErrors};
use std::fs;
use std::path::Path;

/// Read a JSON object of scalar values
pub fn read_values(path: &Path) -> Result<FormValues> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file: {:?}", path))?;
    parse_values(&content).with_context(|| format!("Failed to parse values file: {:?}", path))
}

pub fn parse_values(content: &str) -> Result<FormValues> {
    Ok(serde_json::from_str(content)?)
}

/// Apply a record to a form as change + blur per field
pub fn fill(form: &mut Form, values: &FormValues) -> Result<()> {
    for (field, value) in values {
        form.change(field, value.clone())?;
        form.blur(field)?;
    }
    Ok(())
}

/// Human-readable error listing, written to stderr so stdout stays machine-readable
pub fn print_errors(errors: &ValidationErrors) {
    for (field, message) in errors {
        eprintln!("  {} {}", format!("{}:", field).red().bold(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_form::Config;
    use signup_validation::FieldValue;

    #[test]
    fn test_parse_values() {
        let values = parse_values(r#"{"name": "Ann", "age": 30, "agreement": false}"#).unwrap();
        assert_eq!(values["age"], FieldValue::Number(30.0));
        assert_eq!(values["agreement"], FieldValue::Bool(false));
    }

    #[test]
    fn test_parse_values_rejects_nested() {
        assert!(parse_values(r#"{"name": {"first": "Ann"}}"#).is_err());
        assert!(parse_values("[1, 2]").is_err());
    }

    #[test]
    fn test_fill_rejects_unknown_field() {
        let mut form = Form::signup(Config::default());
        let values = parse_values(r#"{"nickname": "annie"}"#).unwrap();
        assert!(fill(&mut form, &values).is_err());
    }
}
