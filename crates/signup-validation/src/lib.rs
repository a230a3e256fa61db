//! Signup Validation Core
//!
//! Pure validation functions and a declarative schema: each field carries an
//! ordered list of rules and reports the message of the first one that fails.
//!
//! ```
//! use signup_validation::{signup_schema, initial_values};
//!
//! let errors = signup_schema().validate(&initial_values());
//! assert_eq!(errors["name"], "Name is required");
//! ```

pub mod email;
pub mod numeric;
pub mod rule;
pub mod schema;
pub mod signup;
pub mod string;
pub mod value;

pub use rule::{Check, Rule};
pub use schema::{FieldSchema, Schema, SchemaBuilder, ValidationErrors};
pub use signup::{initial_values, signup_schema};
pub use value::{Coerced, FieldKind, FieldValue, FormValues, KindMismatch};
