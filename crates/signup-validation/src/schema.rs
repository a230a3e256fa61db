//! Ordered per-field rule sets and whole-record validation

use crate::rule::Rule;
use crate::value::{FieldKind, FieldValue, FormValues};
use std::collections::BTreeMap;

/// Field name to first failing message; an absent entry means the field is valid
pub type ValidationErrors = BTreeMap<String, String>;

/// Rules for one field, evaluated in declaration order
#[derive(Debug, Clone)]
pub struct FieldSchema {
    name: String,
    kind: FieldKind,
    required: Option<String>,
    type_message: String,
    rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();
        let type_message = match kind {
            FieldKind::Text => format!("{} must be text", name),
            FieldKind::Number => format!("{} must be a number", name),
            FieldKind::Boolean => format!("{} must be true or false", name),
        };

        Self {
            name,
            kind,
            required: None,
            type_message,
            rules: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Reject absent values with `message`
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    /// Message reported when a value cannot be read as this field's kind
    pub fn type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = message.into();
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate this field's value, stopping at the first failure
    ///
    /// Order: kind coercion, then the required check, then each rule.
    /// An absent value on an optional field skips the remaining rules.
    pub fn evaluate(&self, value: Option<&FieldValue>) -> Result<(), String> {
        let coerced = self
            .kind
            .coerce(value)
            .map_err(|_| self.type_message.clone())?;

        let Some(coerced) = coerced else {
            return match &self.required {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            };
        };

        self.rules
            .iter()
            .try_for_each(|rule| rule.evaluate(&coerced))
    }
}

/// An ordered set of field schemas
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Validate a whole record
    ///
    /// Pure: the result depends only on `values`. Fields missing from the
    /// record are evaluated as absent; keys the schema does not know are ignored.
    pub fn validate(&self, values: &FormValues) -> ValidationErrors {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .evaluate(values.get(field.name()))
                    .err()
                    .map(|message| (field.name().to_string(), message))
            })
            .collect()
    }

    /// Validate one field of a record
    pub fn validate_field(&self, name: &str, values: &FormValues) -> Option<String> {
        self.field(name)?.evaluate(values.get(name)).err()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSchema>,
}

impl SchemaBuilder {
    /// Add a field; redeclaring a name replaces the earlier schema in place
    pub fn field(mut self, field: FieldSchema) -> Self {
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, FieldValue)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_first_failure_wins() {
        let field = FieldSchema::text("code")
            .required("required")
            .rule(Rule::min_length(4, "short"))
            .rule(Rule::pattern("^[0-9]+$", "digits").unwrap());

        assert_eq!(field.evaluate(None), Err("required".to_string()));
        assert_eq!(field.evaluate(Some(&"ab".into())), Err("short".to_string()));
        assert_eq!(field.evaluate(Some(&"abcd".into())), Err("digits".to_string()));
        assert_eq!(field.evaluate(Some(&"1234".into())), Ok(()));
    }

    #[test]
    fn test_optional_absent_skips_rules() {
        let field = FieldSchema::text("nickname").rule(Rule::min_length(3, "short"));
        assert_eq!(field.evaluate(Some(&"".into())), Ok(()));
        assert_eq!(field.evaluate(Some(&"ab".into())), Err("short".to_string()));
    }

    #[test]
    fn test_type_message() {
        let field = FieldSchema::number("age")
            .required("Age is required")
            .type_message("Age must be a number");
        assert_eq!(field.evaluate(Some(&"old".into())), Err("Age must be a number".to_string()));
    }

    #[test]
    fn test_validate_collects_per_field() {
        let schema = Schema::builder()
            .field(FieldSchema::text("a").required("a required"))
            .field(FieldSchema::text("b").required("b required"))
            .build();

        let errors = schema.validate(&values(&[("a", "x".into()), ("extra", "y".into())]));
        let mut expected = ValidationErrors::new();
        expected.insert("b".to_string(), "b required".to_string());
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_validate_field_unknown_name() {
        let schema = Schema::builder()
            .field(FieldSchema::text("a").required("a required"))
            .build();
        assert_eq!(schema.validate_field("missing", &FormValues::new()), None);
        assert_eq!(
            schema.validate_field("a", &FormValues::new()),
            Some("a required".to_string())
        );
    }

    #[test]
    fn test_builder_redeclare_replaces_in_place() {
        let schema = Schema::builder()
            .field(FieldSchema::text("a"))
            .field(FieldSchema::text("b"))
            .field(FieldSchema::number("a"))
            .build();
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(schema.field("a").map(|f| f.kind()), Some(FieldKind::Number));
    }
}
