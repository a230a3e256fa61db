//! # signup-form
//!
//! Binds the signup schema to per-field state, gates submission on a valid
//! record and renders the current state as HTML.
//!
//! ```
//! use signup_form::{Config, Form, SubmitOutcome};
//! use signup_validation::FormValues;
//!
//! let mut form = Form::signup(Config::default());
//! form.change("name", "Ann").unwrap();
//! form.blur("name").unwrap();
//! assert!(form.field("name").unwrap().error.is_none());
//!
//! // The rest of the form is still empty, so submit is refused
//! let outcome = form.submit(&mut |_: &FormValues| unreachable!());
//! assert!(matches!(outcome, SubmitOutcome::Blocked(_)));
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod render;
pub mod state;
pub mod submit;

pub use config::Config;
pub use error::FormError;
pub use fields::{signup_fields, FieldDef, InputType};
pub use form::{EventOutcome, FieldStyle, FieldView, Form, FormEvent};
pub use render::{render_field, render_form, render_signup};
pub use state::FormState;
pub use submit::{SubmitHandler, SubmitOutcome};

// Re-export the validation crate for callers building custom schemas
pub use signup_validation as validation;
