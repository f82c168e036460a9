//! Entity ids and registry keys.
//!
//! Every id and key goes through the same two steps:
//!
//! 1. **Normalization**: lower-case, then replace every character outside
//!    `[a-z0-9_]` (spaces included) with `_`
//! 2. **Validation**: the result must match `^[a-z][a-z0-9_]*$`
//!
//! Normalization is idempotent: a valid name normalizes to itself.

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{ErrorKind, PieceError};

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9_]*$").unwrap_or_else(|e| panic!("invalid name pattern: {e}"))
});

/// Errors raised while turning raw text into a [`Name`], or while storing it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The normalized text does not start with a letter (or is empty).
    #[error("invalid name {raw:?} (normalized to {normalized:?})")]
    Invalid { raw: String, normalized: String },

    /// A registry already holds a template under this key.
    #[error("name {0:?} is already registered")]
    Duplicate(String),
}

impl PieceError for NameError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Name
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => "NAME_INVALID",
            Self::Duplicate(_) => "NAME_DUPLICATE",
        }
    }
}

/// Lower-cases `raw` and replaces anything outside `[a-z0-9_]` with `_`.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Returns true if `name` is already in canonical form.
pub fn is_valid(name: &str) -> bool {
    VALID_NAME.is_match(name)
}

/// A normalized, validated identifier.
///
/// Used both for entity ids and for registry keys. Comparisons against plain
/// strings are exact; callers looking up user input should normalize first
/// (or build a `Name`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Name(String);

impl Name {
    /// Normalizes and validates `raw`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, NameError> {
        let raw = raw.as_ref();
        let normalized = normalize(raw);
        if is_valid(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(NameError::Invalid {
                raw: raw.to_owned(),
                normalized,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_spaces_and_symbols() {
        assert_eq!(normalize("Fire Ball!"), "fire_ball_");
        assert_eq!(normalize("D6"), "d6");
        assert_eq!(normalize("ace-of-spades"), "ace_of_spades");
    }

    #[test]
    fn normalization_is_idempotent_for_valid_names() {
        for raw in ["d20", "goblin_scout", "a", "x_1_2", "Big Red Card"] {
            let once = Name::new(raw).unwrap();
            let twice = Name::new(once.as_str()).unwrap();
            assert_eq!(once, twice);
            assert_eq!(normalize(once.as_str()), once.as_str());
        }
    }

    #[test]
    fn rejects_names_not_starting_with_a_letter() {
        for raw in ["", "6d", "_hidden", " space", "#tag"] {
            let err = Name::new(raw).unwrap_err();
            assert!(matches!(err, NameError::Invalid { .. }), "{raw:?}");
            assert_eq!(err.kind(), ErrorKind::Name);
        }
    }

    #[test]
    fn non_ascii_letters_become_underscores() {
        assert_eq!(Name::new("café").unwrap().as_str(), "caf_");
        assert!(Name::new("éclair").is_err());
    }

    #[test]
    fn compares_against_plain_strings() {
        let name = Name::new("Card").unwrap();
        assert_eq!(name, "card");
        assert_eq!(name.to_string(), "card");
    }
}
