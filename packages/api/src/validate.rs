//! Pure credential-form validation, run before any identity-service call.

use crate::models::{AuthMode, CredentialInput};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field-level validation errors. An empty mapping means the input is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub confirm_password: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.name.is_none()
            && self.confirm_password.is_none()
    }
}

/// Validate form input for the given mode.
///
/// Every rule runs even when an earlier field already failed, so the form can
/// surface all errors at once. No network or store access.
pub fn validate(input: &CredentialInput, mode: AuthMode) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if input.email.is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !email_shape_ok(&input.email) {
        errors.email = Some("Please enter a valid email".to_string());
    }

    if input.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if input.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters".to_string());
    }

    if mode == AuthMode::SignUp {
        if input.name.is_empty() {
            errors.name = Some("Name is required".to_string());
        }
        if input.password != input.confirm_password {
            errors.confirm_password = Some("Passwords don't match".to_string());
        }
    }

    errors
}

/// Pragmatic `local@domain.tld` shape check. Exhaustive address-grammar
/// validation is the identity service's job.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_in_input(email: &str, password: &str) -> CredentialInput {
        CredentialInput {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_sign_in_input_has_no_errors() {
        let errors = validate(&sign_in_input("u@v.com", "secret1"), AuthMode::SignIn);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_short_password_only_flags_password() {
        let errors = validate(&sign_in_input("a@b.com", "12345"), AuthMode::SignIn);
        assert_eq!(
            errors.password.as_deref(),
            Some("Password must be at least 6 characters")
        );
        assert!(errors.email.is_none());
        assert!(errors.name.is_none());
        assert!(errors.confirm_password.is_none());
    }

    #[test]
    fn test_missing_fields_are_required() {
        let errors = validate(&sign_in_input("", ""), AuthMode::SignIn);
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn test_email_shape() {
        for bad in ["plain", "a@b", "@b.com", "a@.com", "a@b.", "a b@c.com"] {
            let errors = validate(&sign_in_input(bad, "secret1"), AuthMode::SignIn);
            assert_eq!(
                errors.email.as_deref(),
                Some("Please enter a valid email"),
                "expected {bad:?} to be rejected"
            );
        }
        for good in ["a@b.co", "first.last@sub.example.com"] {
            let errors = validate(&sign_in_input(good, "secret1"), AuthMode::SignIn);
            assert!(errors.email.is_none(), "expected {good:?} to be accepted");
        }
    }

    #[test]
    fn test_sign_up_requires_name() {
        let input = CredentialInput {
            email: "u@v.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            ..Default::default()
        };
        let errors = validate(&input, AuthMode::SignUp);
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_mismatched_passwords_flag_confirm_field_only() {
        let input = CredentialInput {
            email: "x@y.com".to_string(),
            password: "secret1".to_string(),
            name: "Jo".to_string(),
            confirm_password: "secret2".to_string(),
        };
        let errors = validate(&input, AuthMode::SignUp);
        assert_eq!(
            errors.confirm_password.as_deref(),
            Some("Passwords don't match")
        );
        assert!(errors.password.is_none());
        assert!(errors.email.is_none());
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_sign_in_ignores_sign_up_rules() {
        let input = CredentialInput {
            email: "u@v.com".to_string(),
            password: "secret1".to_string(),
            name: String::new(),
            confirm_password: "different".to_string(),
        };
        let errors = validate(&input, AuthMode::SignIn);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_all_errors_surface_together() {
        let errors = validate(&CredentialInput::default(), AuthMode::SignUp);
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(errors.name.is_some());
        // Empty password equals empty confirmation, so no mismatch here.
        assert!(errors.confirm_password.is_none());
    }
}
