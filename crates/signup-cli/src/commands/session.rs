use anyhow::{bail, Context, Result};
use colored::Colorize;
use signup_form::{Config, Form, FormEvent, EventOutcome, SubmitOutcome};
use signup_validation::{FieldKind, FieldValue, FormValues};
use std::io::{self, BufRead, Write};

/// One line of session input
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Set { field: String, value: String },
    Blur { field: String },
    Submit,
    Show,
    Quit,
}

/// Parse a session line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match verb {
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if field.is_empty() {
                bail!("usage: set <field> <value>");
            }
            SessionCommand::Set {
                field: field.to_string(),
                value: value.trim().to_string(),
            }
        }
        "blur" if !rest.is_empty() => SessionCommand::Blur {
            field: rest.to_string(),
        },
        "blur" => bail!("usage: blur <field>"),
        "submit" => SessionCommand::Submit,
        "show" => SessionCommand::Show,
        "quit" | "exit" => SessionCommand::Quit,
        other => bail!("unknown command: {}", other),
    };

    Ok(Some(command))
}

/// Read typed input the way the field's input would deliver it
fn to_field_value(form: &Form, field: &str, raw: &str) -> FieldValue {
    let kind = form.schema().field(field).map(|f| f.kind());
    match kind {
        Some(FieldKind::Boolean) => match raw {
            "true" | "on" | "yes" => FieldValue::Bool(true),
            "false" | "off" | "no" | "" => FieldValue::Bool(false),
            other => FieldValue::text(other),
        },
        Some(FieldKind::Number) => raw
            .parse::<f64>()
            .map(FieldValue::Number)
            .unwrap_or_else(|_| FieldValue::text(raw)),
        _ => FieldValue::text(raw),
    }
}

fn write_state<W: Write>(form: &Form, out: &mut W) -> Result<()> {
    for view in form.fields() {
        let marker = if view.touched { "*" } else { " " };
        match &view.error {
            Some(error) => writeln!(out, "{} {} = {:?}  ! {}", marker, view.name, view.display_value(), error)?,
            None => writeln!(out, "{} {} = {:?}", marker, view.name, view.display_value())?,
        }
    }
    Ok(())
}

/// Run session commands from `input`, reporting to `out`
///
/// Returns the records submitted during the session.
pub fn run<R: BufRead, W: Write>(form: &mut Form, input: R, out: &mut W) -> Result<Vec<FormValues>> {
    let mut submitted = Vec::new();

    for line in input.lines() {
        let line = line.context("Failed to read session input")?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };

        let event = match command {
            SessionCommand::Quit => break,
            SessionCommand::Show => {
                write_state(form, out)?;
                continue;
            }
            SessionCommand::Set { field, value } => {
                let value = to_field_value(form, &field, &value);
                FormEvent::Change { field, value }
            }
            SessionCommand::Blur { field } => FormEvent::Blur { field },
            SessionCommand::Submit => FormEvent::Submit,
        };

        let mut handler = |values: &FormValues| submitted.push(values.clone());
        match form.handle(event, &mut handler) {
            Ok(EventOutcome::Updated) => {}
            Ok(EventOutcome::Submitted(SubmitOutcome::Submitted(values))) => {
                writeln!(out, "Form submitted: {}", serde_json::to_string_pretty(&values)?)?;
            }
            Ok(EventOutcome::Submitted(SubmitOutcome::Blocked(errors))) => {
                writeln!(out, "submit blocked: {} field(s) invalid", errors.len())?;
                write_state(form, out)?;
            }
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }

    Ok(submitted)
}

/// Interactive session over stdin/stdout
pub fn execute(config: Config) -> Result<()> {
    let mut form = Form::signup(config);
    eprintln!(
        "{}",
        "Commands: set <field> <value> | blur <field> | submit | show | quit".cyan()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let submitted = run(&mut form, stdin.lock(), &mut stdout)?;

    eprintln!("{}", format!("{} record(s) submitted", submitted.len()).green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("  ").unwrap(), None);
        assert_eq!(parse_line("# comment").unwrap(), None);
        assert_eq!(
            parse_line("set name Ann Lee").unwrap(),
            Some(SessionCommand::Set {
                field: "name".to_string(),
                value: "Ann Lee".to_string()
            })
        );
        assert_eq!(
            parse_line("set name").unwrap(),
            Some(SessionCommand::Set {
                field: "name".to_string(),
                value: String::new()
            })
        );
        assert_eq!(
            parse_line("blur email").unwrap(),
            Some(SessionCommand::Blur {
                field: "email".to_string()
            })
        );
        assert_eq!(parse_line("submit").unwrap(), Some(SessionCommand::Submit));
        assert!(parse_line("blur").is_err());
        assert!(parse_line("jump").is_err());
    }

    #[test]
    fn test_session_submits_valid_record() {
        let script = "\
set name Ann
set email a@b.com
set password Abcd1234
set age 30
set phone 1234567890
set website https://x.com
set agreement true
submit
";
        let mut form = Form::signup(Config::default());
        let mut out = Vec::new();
        let submitted = run(&mut form, Cursor::new(script), &mut out).unwrap();

        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0]["age"], FieldValue::Number(30.0));
        assert_eq!(submitted[0]["agreement"], FieldValue::Bool(true));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Form submitted: {"));
        assert!(out.contains("\"age\": 30"));
    }

    #[test]
    fn test_session_reports_blocked_submit() {
        let mut form = Form::signup(Config::default());
        let mut out = Vec::new();
        let submitted = run(&mut form, Cursor::new("set age 17\nsubmit\nquit\nsubmit\n"), &mut out).unwrap();

        assert!(submitted.is_empty());
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("submit blocked: 7 field(s) invalid"));
        assert!(out.contains("* age = \"17\"  ! You must be at least 18 years old"));
        // nothing after quit runs
        assert_eq!(out.matches("submit blocked").count(), 1);
    }

    #[test]
    fn test_session_reports_bad_input_and_continues() {
        let mut form = Form::signup(Config::default());
        let mut out = Vec::new();
        run(&mut form, Cursor::new("frobnicate\nset nickname x\nshow\n"), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("error: unknown command: frobnicate"));
        assert!(out.contains("error: unknown field: nickname"));
        assert!(out.contains("  name = \"\""));
    }
}
