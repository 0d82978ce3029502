//! Users: validated e-mail addresses, creation and full-name projection

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GateError, Result};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// An e-mail address that passed [`is_valid_email`].
///
/// The only ways to obtain one are [`Email::parse`], `FromStr`, `TryFrom`
/// and deserialization, all of which validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(value: &str) -> Result<Self> {
        assert_valid_email(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = GateError;

    fn try_from(value: String) -> Result<Self> {
        assert_valid_email(&value)?;
        Ok(Self(value))
    }
}

impl std::str::FromStr for Email {
    type Err = GateError;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Basic shape check: `local@domain.tld`, no whitespace, a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.find('.') {
        Some(_) => !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

/// Fails with [`GateError::InvalidEmail`] unless `value` is a valid address
pub fn assert_valid_email(value: &str) -> Result<()> {
    if is_valid_email(value) {
        Ok(())
    } else {
        debug!(email = value, "rejected email");
        Err(GateError::InvalidEmail(value.to_string()))
    }
}

/// Input for [`create_user`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: Email,
}

/// Create a user with a fresh process-unique id.
pub fn create_user(new: NewUser) -> User {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    debug!(id, email = %new.email, "created user");
    User { id, name: new.name, email: new.email }
}

/// A fetched user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithFullName {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

/// Attach `full_name` ("first last") to a fetched user
pub fn fetch_user_with_full_name(user: UserName) -> UserWithFullName {
    let full_name = format!("{} {}", user.first_name, user.last_name);
    UserWithFullName { first_name: user.first_name, last_name: user.last_name, full_name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        for s in ["a@b.co", "first.last@example.com", "x+tag@mail.example.org"] {
            assert!(is_valid_email(s), "{s}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        let bad = [
            "", "plain", "@example.com", "a@", "a@b", "a@.com", "a@com.", "a@@b.com", "a b@c.com",
            "a@b@c.com",
        ];
        for s in bad {
            assert!(!is_valid_email(s), "{s}");
        }
    }

    #[test]
    fn email_parse_matches_predicate() {
        assert_eq!(Email::parse("a@b.co").unwrap().as_str(), "a@b.co");
        assert_eq!(Email::parse("nope"), Err(GateError::InvalidEmail("nope".into())));
        assert!("a@b.co".parse::<Email>().is_ok());
        assert!(Email::try_from(String::from("x")).is_err());
        assert_eq!(Email::parse("a@b.co").unwrap().into_inner(), String::from("a@b.co"));
    }

    #[test]
    fn full_name_joins_with_space() {
        let name = UserName { first_name: "Ada".into(), last_name: "Lovelace".into() };
        let u = fetch_user_with_full_name(name);
        assert_eq!(u.full_name, "Ada Lovelace");
        assert_eq!(u.first_name, "Ada");
        assert_eq!(u.last_name, "Lovelace");
    }
}
