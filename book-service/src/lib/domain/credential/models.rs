use std::fmt;
use std::str::FromStr;

use crate::domain::credential::errors::EmailError;
use crate::domain::credential::errors::PasswordPolicyError;

/// Stored credential of a registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub email: EmailAddress,
    /// Opaque PHC digest produced by the password hasher
    pub password_hash: String,
}

/// Email address type
///
/// Unique, case-sensitive identity key. Validated with an RFC 5322 parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const MAX_LENGTH: usize = 254;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Empty` - Blank input
    /// * `TooLong` - Longer than 254 bytes
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.trim().is_empty() {
            return Err(EmailError::Empty);
        }
        if email.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
                actual: email.len(),
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted for registration.
///
/// Non-empty and at most 128 bytes. Debug output is redacted.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub const MAX_LENGTH: usize = 128;

    /// # Errors
    /// * `Empty` - Empty password
    /// * `TooLong` - Longer than 128 bytes
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        if password.len() > Self::MAX_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: password.len(),
            });
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new account with validated fields
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    /// Validate raw input into a registration command.
    ///
    /// # Errors
    /// * `InvalidEmail` / `InvalidPassword` via `CredentialError`
    pub fn new(
        email: String,
        password: String,
    ) -> Result<Self, crate::domain::credential::errors::CredentialError> {
        Ok(Self {
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("a@x.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "a@x.com");
    }

    #[test]
    fn test_email_is_case_sensitive() {
        let lower = EmailAddress::new("a@x.com".to_string()).unwrap();
        let upper = EmailAddress::new("A@x.com".to_string()).unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_email_invalid() {
        assert_eq!(EmailAddress::new(String::new()), Err(EmailError::Empty));
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));

        let long = format!("{}@x.com", "a".repeat(250));
        assert!(matches!(
            EmailAddress::new(long),
            Err(EmailError::TooLong { max: 254, .. })
        ));
    }

    #[test]
    fn test_password_policy() {
        assert!(Password::new("secret1".to_string()).is_ok());
        assert!(matches!(
            Password::new(String::new()),
            Err(PasswordPolicyError::Empty)
        ));
        assert!(matches!(
            Password::new("x".repeat(129)),
            Err(PasswordPolicyError::TooLong {
                max: 128,
                actual: 129
            })
        ));
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("secret1".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("secret1"));
    }
}
