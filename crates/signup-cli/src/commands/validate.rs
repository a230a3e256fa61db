use super::{print_errors, read_values};
use anyhow::{bail, Result};
use colored::Colorize;
use signup_validation::{signup_schema, FormValues, ValidationErrors};
use std::io::{self, Write};
use std::path::Path;

/// Validate `values` and write the error map to `out` as pretty JSON
pub fn run<W: Write>(values: &FormValues, out: &mut W) -> Result<ValidationErrors> {
    let errors = signup_schema().validate(values);
    serde_json::to_writer_pretty(&mut *out, &errors)?;
    writeln!(out)?;
    Ok(errors)
}

/// Validate a values record and print the error map as JSON
pub fn execute(file: &Path) -> Result<()> {
    let values = read_values(file)?;
    let errors = run(&values, &mut io::stdout().lock())?;

    if errors.is_empty() {
        eprintln!("{}", "✓ All fields valid".green());
        Ok(())
    } else {
        eprintln!("{}", "Validation failed:".red().bold());
        print_errors(&errors);
        bail!("{} field(s) invalid", errors.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_values;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_is_only_json() {
        let values = parse_values(
            r#"{"name": "", "email": "ann@", "password": "abc", "age": 17,
                "phone": "12345", "website": "x.com", "agreement": false}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        let errors = run(&values, &mut out).unwrap();

        let parsed: ValidationErrors = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, errors);
        assert_eq!(parsed.len(), 7);
        assert_eq!(parsed["age"], "You must be at least 18 years old");
    }

    #[test]
    fn test_valid_record_prints_empty_map() {
        let values = parse_values(
            r#"{"name": "Ann", "email": "a@b.com", "password": "Abcd1234", "age": 30,
                "phone": "1234567890", "website": "https://x.com", "agreement": true}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        assert!(run(&values, &mut out).unwrap().is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
    }
}
