//! Value types - self-validating scalars
//!
//! Every value validates its input once, at construction, and is immutable
//! afterwards. Equality and hashing are structural.
//!
//! # Formats
//! - `Name`: alphanumerics and spaces, starting with an alphanumeric
//! - `Date`: `YYYY-MM-DD`
//! - `Address`: anything non-blank
//! - `Phone`: at least 3 digits
//! - `Email`: `local-part@domain`
//! - `Tag`: alphanumeric label, normalized to lowercase
//! - `TaskDescription`: anything non-blank
//!
//! All of them serialize as plain strings and re-validate on deserialize.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Implements `Display`, `FromStr`, `TryFrom<String>`, `From<T> for String`
/// and `as_str` for a newtype over a validated `String`.
macro_rules! string_value {
    ($ty:ident) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                $ty::parse(&s)
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> String {
                v.0
            }
        }
    };
}

/// Name of a contact or an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        let mut chars = s.chars();
        let valid = matches!(chars.next(), Some(c) if c.is_alphanumeric())
            && chars.all(|c| c.is_alphanumeric() || c == ' ');

        if !valid {
            return Err(ValidationError::invalid(
                "name",
                "names should only contain alphanumeric characters and spaces, and it should not be blank",
            ));
        }

        Ok(Self(s.to_string()))
    }

    /// Case-insensitive whole-word match against this name
    pub fn contains_word(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.0
            .split_whitespace()
            .any(|w| w.to_lowercase() == word)
    }
}

string_value!(Name);

/// Physical address; free text but never blank
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::invalid(
                "address",
                "addresses can take any values, and it should not be blank",
            ));
        }
        Ok(Self(s.to_string()))
    }
}

string_value!(Address);

/// Phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.len() < 3 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid(
                "phone",
                "phone numbers should only contain numbers, and it should be at least 3 digits long",
            ));
        }
        Ok(Self(s.to_string()))
    }
}

string_value!(Phone);

/// Email address in `local-part@domain` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

const EMAIL_SPECIAL: &[char] = &['+', '_', '.', '-'];

impl Email {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        let valid = match s.split_once('@') {
            Some((local, domain)) => Self::valid_local(local) && Self::valid_domain(domain),
            None => false,
        };

        if !valid {
            return Err(ValidationError::invalid(
                "email",
                "emails should be of the format local-part@domain",
            ));
        }
        Ok(Self(s.to_string()))
    }

    fn valid_local(local: &str) -> bool {
        let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
            return false;
        };
        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || EMAIL_SPECIAL.contains(&c))
    }

    fn valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        let Some(last) = labels.last() else {
            return false;
        };

        last.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }
}

string_value!(Email);

/// Tag label
///
/// Normalized on construction: surrounding whitespace is trimmed and the
/// label is lowercased, so `" Vendor "` and `"vendor"` are the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() || !normalized.chars().all(|c| c.is_alphanumeric()) {
            return Err(ValidationError::invalid(
                "tag",
                "tag names should be alphanumeric",
            ));
        }
        Ok(Self(normalized))
    }
}

string_value!(Tag);

/// Description of a task
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::invalid(
                "task description",
                "task descriptions can take any values, and it should not be blank",
            ));
        }
        Ok(Self(s.to_string()))
    }
}

string_value!(TaskDescription);

/// Calendar date of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date(NaiveDate);

/// Wire and display format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl Date {
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| {
                ValidationError::invalid("date", "dates should be valid and in the format YYYY-MM-DD")
            })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl TryFrom<String> for Date {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Date::parse(&s)
    }
}

impl From<Date> for String {
    fn from(d: Date) -> String {
        d.to_string()
    }
}
