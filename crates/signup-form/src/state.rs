// File: src/state.rs
// Purpose: Current values and touched flags owned by one form instance

use signup_validation::{FieldValue, FormValues};
use std::collections::BTreeMap;

/// Values and touched flags for a form
///
/// Holds no validation results: errors are always derived from `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: FormValues,
    touched: BTreeMap<String, bool>,
    initial: FormValues,
}

impl FormState {
    /// Create state starting from (and resetting to) `initial`
    pub fn new(initial: FormValues) -> Self {
        Self {
            values: initial.clone(),
            touched: BTreeMap::new(),
            initial,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn initial_values(&self) -> &FormValues {
        &self.initial
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn set_value(&mut self, field: &str, value: FieldValue) {
        self.values.insert(field.to_string(), value);
    }

    pub fn touch(&mut self, field: &str) {
        self.touched.insert(field.to_string(), true);
    }

    pub fn touch_all<'a>(&mut self, fields: impl IntoIterator<Item = &'a str>) {
        for field in fields {
            self.touch(field);
        }
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.get(field).copied().unwrap_or(false)
    }

    pub fn touched(&self) -> &BTreeMap<String, bool> {
        &self.touched
    }

    /// Restore initial values and clear every touched flag
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormValues::new())
    }
}
