use super::{fill, print_errors, read_values};
use anyhow::{bail, Result};
use colored::Colorize;
use signup_form::{Config, Form, SubmitOutcome};
use signup_validation::FormValues;
use std::path::Path;

/// Format the confirmation shown for a submitted record
pub fn submitted_message(values: &FormValues) -> Result<String> {
    Ok(format!("Form submitted: {}", serde_json::to_string_pretty(values)?))
}

/// Submit a values record through the form
pub fn execute(config: Config, file: &Path) -> Result<()> {
    let mut form = Form::signup(config);
    fill(&mut form, &read_values(file)?)?;

    let mut message = None;
    let outcome = form.submit(&mut |values: &FormValues| message = Some(submitted_message(values)));

    match outcome {
        SubmitOutcome::Submitted(_) => {
            if let Some(message) = message {
                println!("{}", message?);
            }
            Ok(())
        }
        SubmitOutcome::Blocked(errors) => {
            eprintln!("{}", "Submission blocked:".red().bold());
            print_errors(&errors);
            bail!("{} field(s) invalid", errors.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use signup_validation::FieldValue;

    #[test]
    fn test_submitted_message() {
        let mut values = FormValues::new();
        values.insert("age".to_string(), FieldValue::Number(30.0));
        values.insert("name".to_string(), "Ann".into());

        assert_eq!(
            submitted_message(&values).unwrap(),
            "Form submitted: {\n  \"age\": 30,\n  \"name\": \"Ann\"\n}"
        );
    }
}
