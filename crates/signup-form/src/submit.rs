// File: src/submit.rs
// Purpose: Submission gating - only a fully valid record reaches the handler

use crate::form::Form;
use signup_validation::{FormValues, ValidationErrors};
use tracing::{info, warn};

/// Receives the values record of a successful submit
pub trait SubmitHandler {
    fn on_submit(&mut self, values: &FormValues);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&FormValues),
{
    fn on_submit(&mut self, values: &FormValues) {
        self(values)
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The handler was called with these values
    Submitted(FormValues),
    /// Validation failed; the handler was not called
    Blocked(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

impl Form {
    /// Attempt a submit
    ///
    /// Every field is marked touched first, so a blocked submit surfaces every
    /// error. On success the handler runs exactly once and the form resets
    /// when `reset_on_submit` is set.
    pub fn submit<H: SubmitHandler + ?Sized>(&mut self, handler: &mut H) -> SubmitOutcome {
        let names: Vec<String> = self.schema().field_names().map(str::to_string).collect();
        self.state_mut().touch_all(names.iter().map(String::as_str));

        let errors = self.errors();
        if !errors.is_empty() {
            warn!(
                fields = ?errors.keys().collect::<Vec<_>>(),
                "submit blocked by validation errors"
            );
            return SubmitOutcome::Blocked(errors);
        }

        let values = self.values().clone();
        handler.on_submit(&values);
        info!(fields = values.len(), "form submitted");

        if self.config().form.reset_on_submit {
            self.reset();
        }

        SubmitOutcome::Submitted(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_blocked_submit_touches_everything() {
        let mut form = Form::signup(Config::default());
        let mut calls = 0;

        let outcome = form.submit(&mut |_: &FormValues| calls += 1);

        assert_eq!(calls, 0);
        match outcome {
            SubmitOutcome::Blocked(errors) => assert_eq!(errors.len(), 7),
            other => panic!("expected blocked submit, got {:?}", other),
        }
        assert!(form.fields().iter().all(|f| f.touched && f.error.is_some()));
    }

    #[test]
    fn test_handler_struct() {
        struct Recorder(Vec<FormValues>);

        impl SubmitHandler for Recorder {
            fn on_submit(&mut self, values: &FormValues) {
                self.0.push(values.clone());
            }
        }

        let mut form = Form::signup(Config::default());
        let mut recorder = Recorder(Vec::new());
        assert!(!form.submit(&mut recorder).is_submitted());
        assert!(recorder.0.is_empty());
    }
}
