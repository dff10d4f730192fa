//! Field-level form validation.
//!
//! [`FormWithValidation`] tracks the value and the current error of every
//! declared field. The whole form is valid when every field passes its rules,
//! touched or not, so an untouched required field keeps the form invalid.

use std::collections::BTreeMap;

/// A constraint on a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), String> {
        match self {
            Rule::Required if value.is_empty() => Err("Please fill out this field.".to_string()),
            Rule::Email if !value.is_empty() && !looks_like_email(value) => Err(format!(
                "Please include an '@' in the email address. '{value}' is missing an '@'."
            )),
            _ => Ok(()),
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// A declared field and its rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &'static str, rules: &[Rule]) -> Self {
        Self {
            name,
            rules: rules.to_vec(),
        }
    }

    fn validate(&self, value: &str) -> Result<(), String> {
        self.rules.iter().try_for_each(|rule| rule.check(value))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormWithValidation {
    fields: Vec<FieldSpec>,
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
}

impl FormWithValidation {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            fields,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
        }
    }

    /// Record an edit. Unknown field names are ignored.
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) {
        let Some(spec) = self.fields.iter().find(|f| f.name == name) else {
            tracing::debug!("ignoring change to undeclared field {name}");
            return;
        };
        let value = value.into();
        match spec.validate(&value) {
            Ok(()) => {
                self.errors.remove(spec.name);
            }
            Err(message) => {
                self.errors.insert(spec.name, message);
            }
        }
        self.values.insert(spec.name, value);
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Error of a field the user has edited.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|spec| spec.validate(self.value(spec.name)).is_ok())
    }

    /// Clear values and errors, keeping the declared fields.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_in_form() -> FormWithValidation {
        FormWithValidation::new(vec![
            FieldSpec::new("email", &[Rule::Required, Rule::Email]),
            FieldSpec::new("password", &[Rule::Required]),
        ])
    }

    #[test]
    fn test_untouched_required_fields_keep_form_invalid() {
        let mut form = sign_in_form();
        assert!(!form.is_valid());
        assert!(form.error("email").is_none());

        form.handle_change("email", "cook@example.com");
        assert!(!form.is_valid());

        form.handle_change("password", "secret");
        assert!(form.is_valid());
    }

    #[test]
    fn test_errors_follow_the_latest_value() {
        let mut form = sign_in_form();
        form.handle_change("email", "cook");
        assert!(form.error("email").unwrap().contains("'@'"));

        form.handle_change("email", "");
        assert_eq!(form.error("email"), Some("Please fill out this field."));

        form.handle_change("email", "cook@example.com");
        assert!(form.error("email").is_none());
        assert_eq!(form.value("email"), "cook@example.com");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut form = FormWithValidation::new(vec![FieldSpec::new("name", &[Rule::Required])]);
        form.handle_change("nickname", "whatever");
        assert_eq!(form.value("nickname"), "");
        assert!(!form.is_valid());
        form.handle_change("name", "abc");
        assert!(form.is_valid());
    }

    #[test]
    fn test_reset() {
        let mut form = sign_in_form();
        form.handle_change("email", "nope");
        form.reset();
        assert_eq!(form.value("email"), "");
        assert!(form.error("email").is_none());
    }
}
