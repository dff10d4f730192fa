use crate::form::{FieldSpec, FormWithValidation, Rule};
use crate::models::PasswordChange;

pub const CURRENT_PASSWORD: &str = "current_password";
pub const NEW_PASSWORD: &str = "new_password";
pub const REPEAT_PASSWORD: &str = "repeat_password";

/// Form state of the "Change the password" page.
///
/// Strength rules are the backend's business; the form only requires all
/// three fields and that the two new passwords match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangePasswordPage {
    pub form: FormWithValidation,
}

impl Default for ChangePasswordPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangePasswordPage {
    pub fn new() -> Self {
        Self {
            form: FormWithValidation::new(vec![
                FieldSpec::new(CURRENT_PASSWORD, &[Rule::Required]),
                FieldSpec::new(NEW_PASSWORD, &[Rule::Required]),
                FieldSpec::new(REPEAT_PASSWORD, &[Rule::Required]),
            ]),
        }
    }

    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) {
        self.form.handle_change(name, value);
    }

    pub fn passwords_match(&self) -> bool {
        self.form.value(NEW_PASSWORD) == self.form.value(REPEAT_PASSWORD)
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_valid() && self.passwords_match()
    }

    pub fn payload(&self) -> PasswordChange {
        PasswordChange {
            current_password: self.form.value(CURRENT_PASSWORD).to_string(),
            new_password: self.form.value(NEW_PASSWORD).to_string(),
            repeat_password: self.form.value(REPEAT_PASSWORD).to_string(),
        }
    }
}
