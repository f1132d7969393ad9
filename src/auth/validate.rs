//! Input validation for the login and registration forms.
//!
//! The rules match what the screens enforce before submitting: employee
//! emails must belong to the organization domain and passwords need a
//! minimum length. `AuthClient::register` also applies them itself, so a
//! malformed registration never leaves the client.

use crate::api::AuthError;
use crate::models::RegistrationRequest;

/// Minimum accepted password length
const MIN_PASSWORD_LENGTH: usize = 6;

/// Check that an email reads `local@domain` with the organization's domain.
///
/// The local part accepts letters, digits and `._%+-`. The domain must match
/// exactly, so subdomains and lookalike hosts are rejected.
pub fn validate_email(email: &str, domain: &str) -> Result<(), AuthError> {
    if !email_matches(email, domain) {
        return Err(AuthError::Validation(format!(
            "Please enter a valid employee email (e.g., user@{})",
            domain
        )));
    }
    Ok(())
}

/// Check the password length rule shared by login and registration screens.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.is_empty() {
        return Err(AuthError::Validation(
            "Please enter your password".to_string(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::Validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Apply every registration rule, in the order the screen reports them.
pub fn validate_registration(
    request: &RegistrationRequest,
    domain: &str,
) -> Result<(), AuthError> {
    validate_email(&request.email, domain)?;
    validate_password(&request.password)?;

    if request.username.trim().is_empty()
        || request.first_name.trim().is_empty()
        || request.last_name.trim().is_empty()
    {
        return Err(AuthError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }
    Ok(())
}

fn email_matches(email: &str, domain: &str) -> bool {
    match email.split_once('@') {
        Some((local, host)) => {
            !local.is_empty()
                && host == domain
                && local
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "siemens-energy.com";

    fn registration() -> RegistrationRequest {
        RegistrationRequest {
            username: "gtadie".to_string(),
            first_name: "Gashaw".to_string(),
            last_name: "Tadie".to_string(),
            email: "gashaw.tadie@siemens-energy.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_accepts_organization_emails() {
        assert!(validate_email("gashaw.tadie@siemens-energy.com", DOMAIN).is_ok());
        assert!(validate_email("g_t%99+test@siemens-energy.com", DOMAIN).is_ok());
    }

    #[test]
    fn test_rejects_foreign_and_lookalike_domains() {
        assert!(validate_email("user@gmail.com", DOMAIN).is_err());
        assert!(validate_email("user@mail.siemens-energy.com", DOMAIN).is_err());
        assert!(validate_email("user@siemens-energy.com.evil.org", DOMAIN).is_err());
        // Domain comparison is case-sensitive, like the form's pattern
        assert!(validate_email("user@SIEMENS-ENERGY.COM", DOMAIN).is_err());
    }

    #[test]
    fn test_rejects_malformed_locals() {
        assert!(validate_email("@siemens-energy.com", DOMAIN).is_err());
        assert!(validate_email("siemens-energy.com", DOMAIN).is_err());
        assert!(validate_email("first last@siemens-energy.com", DOMAIN).is_err());
        assert!(validate_email("a@b@siemens-energy.com", DOMAIN).is_err());
        assert!(validate_email("", DOMAIN).is_err());
    }

    #[test]
    fn test_email_error_names_the_domain() {
        let err = validate_email("user@gmail.com", DOMAIN).expect_err("foreign domain");
        assert!(err.to_string().contains("user@siemens-energy.com"));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_short_password_message() {
        let err = validate_password("12345").expect_err("short password");
        assert_eq!(
            err.to_string(),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_empty_password_message() {
        let err = validate_password("").expect_err("empty password");
        assert_eq!(err.to_string(), "Please enter your password");
    }

    #[test]
    fn test_registration_accepts_valid_input() {
        assert!(validate_registration(&registration(), DOMAIN).is_ok());
    }

    #[test]
    fn test_registration_requires_every_field() {
        for blank in ["username", "first_name", "last_name"] {
            let mut request = registration();
            match blank {
                "username" => request.username = "  ".to_string(),
                "first_name" => request.first_name = String::new(),
                _ => request.last_name = String::new(),
            }
            let err = validate_registration(&request, DOMAIN).expect_err("missing field");
            assert_eq!(err.to_string(), "Please fill in all required fields");
        }
    }

    #[test]
    fn test_registration_reports_email_before_password() {
        let mut request = registration();
        request.email = "user@gmail.com".to_string();
        request.password = "123".to_string();

        let err = validate_registration(&request, DOMAIN).expect_err("two bad fields");
        assert!(err.to_string().contains("valid employee email"));
    }
}
