use crate::form::{FieldSpec, FormWithValidation, Rule};
use crate::models::Credentials;

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";

/// Form state of the sign-in page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInPage {
    pub form: FormWithValidation,
}

impl Default for SignInPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInPage {
    pub fn new() -> Self {
        Self {
            form: FormWithValidation::new(vec![
                FieldSpec::new(EMAIL, &[Rule::Required, Rule::Email]),
                FieldSpec::new(PASSWORD, &[Rule::Required]),
            ]),
        }
    }

    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) {
        self.form.handle_change(name, value);
    }

    pub fn can_submit(&self) -> bool {
        self.form.is_valid()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.form.value(EMAIL).trim().to_string(),
            password: self.form.value(PASSWORD).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FoodgramClient;
    use crate::memory::MemoryClient;

    #[test]
    fn test_requires_valid_email() {
        let mut page = SignInPage::new();
        page.handle_change(EMAIL, "cook");
        page.handle_change(PASSWORD, "cookpass");
        assert!(!page.can_submit());
        assert!(page.form.error(EMAIL).is_some());

        page.handle_change(EMAIL, "cook@example.com");
        assert!(page.can_submit());
    }

    #[tokio::test]
    async fn test_credentials_sign_in() {
        let client = MemoryClient::new();
        client.sign_out().await.unwrap();

        let mut page = SignInPage::new();
        page.handle_change(EMAIL, " cook@example.com");
        page.handle_change(PASSWORD, "cookpass");
        let token = client.sign_in(&page.credentials()).await.unwrap();
        assert!(!token.is_empty());
        assert!(client.is_signed_in());
    }
}
