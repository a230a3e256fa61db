// File: src/form.rs
// Purpose: Field binding - values, touched flags and visible errors per field

use crate::config::{Config, StyleConfig};
use crate::error::{FormError, Result};
use crate::state::FormState;
use crate::submit::{SubmitHandler, SubmitOutcome};
use signup_validation::{initial_values, signup_schema, FieldValue, FormValues, Schema, ValidationErrors};
use tracing::debug;

/// A user interaction with the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Change { field: String, value: FieldValue },
    Blur { field: String },
    Submit,
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Updated,
    Submitted(SubmitOutcome),
}

/// One form instance: a schema plus the state it validates
#[derive(Debug, Clone)]
pub struct Form {
    schema: Schema,
    state: FormState,
    config: Config,
}

impl Form {
    pub fn new(schema: Schema, initial: FormValues, config: Config) -> Self {
        Self {
            schema,
            state: FormState::new(initial),
            config,
        }
    }

    /// The signup form with its schema and initial values
    pub fn signup(config: Config) -> Self {
        Self::new(signup_schema(), initial_values(), config)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn values(&self) -> &FormValues {
        self.state.values()
    }

    fn ensure_field(&self, field: &str) -> Result<()> {
        if self.schema.contains(field) {
            Ok(())
        } else {
            Err(FormError::UnknownField(field.to_string()))
        }
    }

    /// Update a field's value
    pub fn change(&mut self, field: &str, value: impl Into<FieldValue>) -> Result<()> {
        self.ensure_field(field)?;
        self.state.set_value(field, value.into());

        debug!(
            field,
            error = ?self.schema.validate_field(field, self.state.values()),
            "field changed"
        );
        Ok(())
    }

    /// Mark a field as interacted with, making its error visible
    pub fn blur(&mut self, field: &str) -> Result<()> {
        self.ensure_field(field)?;
        self.state.touch(field);
        debug!(field, "field blurred");
        Ok(())
    }

    /// Dispatch one event; `Submit` hands valid values to `handler`
    pub fn handle<H: SubmitHandler>(&mut self, event: FormEvent, handler: &mut H) -> Result<EventOutcome> {
        match event {
            FormEvent::Change { field, value } => {
                self.change(&field, value)?;
                Ok(EventOutcome::Updated)
            }
            FormEvent::Blur { field } => {
                self.blur(&field)?;
                Ok(EventOutcome::Updated)
            }
            FormEvent::Submit => Ok(EventOutcome::Submitted(self.submit(handler))),
        }
    }

    /// Every current error, touched or not
    pub fn errors(&self) -> ValidationErrors {
        self.schema.validate(self.state.values())
    }

    /// Errors for touched fields only
    pub fn visible_errors(&self) -> ValidationErrors {
        self.errors()
            .into_iter()
            .filter(|(field, _)| self.state.is_touched(field))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Snapshot of one field
    pub fn field(&self, name: &str) -> Option<FieldView<'_>> {
        let schema = self.schema.field(name)?;
        let touched = self.state.is_touched(name);
        let error = if touched {
            schema.evaluate(self.state.value(name)).err()
        } else {
            None
        };

        Some(FieldView {
            name: schema.name(),
            value: self.state.value(name),
            touched,
            error,
        })
    }

    /// Snapshots of every field in schema order
    pub fn fields(&self) -> Vec<FieldView<'_>> {
        self.schema
            .field_names()
            .filter_map(|name| self.field(name))
            .collect()
    }

    /// Return to the initial values with nothing touched
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// Read-only view of a field's value, touched flag and visible error
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView<'a> {
    pub name: &'a str,
    pub value: Option<&'a FieldValue>,
    pub touched: bool,
    /// Present only once the field is touched
    pub error: Option<String>,
}

/// Visual state derived from (touched, error)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldStyle {
    pub invalid: bool,
    pub message_visible: bool,
}

impl FieldStyle {
    pub fn from_state(touched: bool, error: Option<&str>) -> Self {
        let invalid = touched && error.is_some_and(|e| !e.is_empty());
        Self {
            invalid,
            message_visible: invalid,
        }
    }

    pub fn border_class(self, style: &StyleConfig) -> &str {
        if self.invalid {
            &style.error_border
        } else {
            &style.normal_border
        }
    }
}

impl FieldView<'_> {
    pub fn style(&self) -> FieldStyle {
        FieldStyle::from_state(self.touched, self.error.as_deref())
    }

    /// Value as rendered into an input's `value` attribute
    pub fn display_value(&self) -> String {
        self.value.map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, Some(FieldValue::Bool(true)))
    }
}
