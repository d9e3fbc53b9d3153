//! Email address newtype.
//!
//! The shop keys accounts on email (the `users` table carries a unique
//! constraint on it), so the address is validated once at the edge and the
//! rest of the system passes the newtype around.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Why an address was rejected by [`Email::parse`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    /// Longer than the 254-character RFC 5321 limit.
    #[error("email is too long")]
    TooLong,
    /// No `@`, or nothing on one side of it.
    #[error("email must look like local@domain")]
    Malformed,
}

/// A structurally valid email address.
///
/// Validation is deliberately shallow: non-empty local part and domain
/// around an `@`, within the length limit. Whether the address actually
/// receives mail is the mail system's problem, not ours.
///
/// ```
/// use backline_core::Email;
///
/// let email = Email::parse("ana@example.com")?;
/// assert_eq!(email.as_str(), "ana@example.com");
///
/// assert!(Email::parse("sin-arroba").is_err());
/// assert!(Email::parse("@example.com").is_err());
/// # Ok::<(), backline_core::EmailError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate and wrap an address.
    ///
    /// # Errors
    ///
    /// Rejects empty input, input over 254 characters, and anything that is
    /// not `local@domain` with both sides non-empty.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        if input.is_empty() {
            return Err(EmailError::Empty);
        }
        if input.len() > 254 {
            return Err(EmailError::TooLong);
        }
        match input.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(input.to_owned()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// The address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned string (for wire payloads).
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_addresses() {
        for input in [
            "ana@example.com",
            "ana.quispe+tienda@example.com",
            "a@b.c",
            "admin@backline.pe",
        ] {
            assert!(Email::parse(input).is_ok(), "rejected {input}");
        }
    }

    #[test]
    fn test_rejects_structurally_broken_input() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
        assert_eq!(Email::parse("sin-arroba"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("@example.com"), Err(EmailError::Malformed));
        assert_eq!(Email::parse("ana@"), Err(EmailError::Malformed));
    }

    #[test]
    fn test_rejects_over_length_limit() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(Email::parse(&long), Err(EmailError::TooLong));
    }

    #[test]
    fn test_serde_is_transparent() {
        let email = Email::parse("ana@example.com").unwrap();
        assert_eq!(
            serde_json::to_string(&email).unwrap(),
            "\"ana@example.com\""
        );
        let back: Email = serde_json::from_str("\"ana@example.com\"").unwrap();
        assert_eq!(back, email);
    }

    #[test]
    fn test_from_str_matches_parse() {
        let email: Email = "ana@example.com".parse().unwrap();
        assert_eq!(email.as_str(), "ana@example.com");
    }
}
