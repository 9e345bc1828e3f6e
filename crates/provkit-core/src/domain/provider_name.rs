//! The provider name value object.
//!
//! A provider name is used verbatim as a directory name, as a file stem and
//! as the replacement for the `NewProvider` class placeholder, so it is
//! restricted to characters that are safe in all three places.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::error::DomainError;

static PROVIDER_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid provider name regex"));

/// A validated provider name.
///
/// Only constructible through [`ProviderName::parse`] (or `FromStr`), so
/// holding one proves the name matched `^[A-Za-z0-9_-]+$` in full.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProviderName(String);

impl ProviderName {
    /// Validate `raw` and wrap it.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(DomainError::InvalidProviderName {
                name: raw,
                reason: "name cannot be empty".into(),
            });
        }

        if !PROVIDER_NAME_RE.is_match(&raw) {
            let offending = raw
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
                .map(|c| format!("contains disallowed character {c:?}"))
                .unwrap_or_else(|| "contains disallowed characters".into());
            return Err(DomainError::InvalidProviderName {
                name: raw,
                reason: offending,
            });
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Header-guard macro for the generated header, e.g. `Iris3` -> `IRIS3_H`.
    pub fn header_guard(&self) -> String {
        format!("{}_H", self.0.to_ascii_uppercase())
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProviderName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProviderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
