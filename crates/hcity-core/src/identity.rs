//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the three identifier namespaces in the stack.
//! You cannot pass a [`StandardId`] where a [`SubmissionId`] is expected.
//!
//! [`AgencySlug`] is the stable agency key. The lookup contract is exact
//! match only — substring or prefix matching against display names is
//! not supported anywhere in the stack.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Identifier of a programme standard.
///
/// Positive and stable; the catalog bounds membership (the Healthy City
/// programme defines standards 1 through 80). The type itself only
/// rejects zero — catalog membership is checked at lookup time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StandardId(u16);

impl StandardId {
    /// Create a standard identifier. Rejects zero.
    pub fn new(id: u16) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidStandardId { value: id });
        }
        Ok(Self(id))
    }

    /// The numeric identifier.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for StandardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable, exact-match key for an agency.
///
/// Lowercase ASCII alphanumerics and hyphens, non-empty, at most 64
/// characters. The human-readable agency name is a separate attribute
/// carried by the registry — never used as a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgencySlug(String);

impl AgencySlug {
    /// Maximum slug length in bytes.
    pub const MAX_LEN: usize = 64;

    /// Create a validated slug.
    ///
    /// Returns an error if the input is empty, exceeds [`Self::MAX_LEN`],
    /// or contains anything other than lowercase ASCII alphanumerics
    /// and hyphens.
    pub fn new(s: impl Into<String>) -> Result<Self, ValidationError> {
        let s = s.into();
        let valid = !s.is_empty()
            && s.len() <= Self::MAX_LEN
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(ValidationError::InvalidAgencySlug { value: s });
        }
        Ok(Self(s))
    }

    /// Derive a slug from a display name.
    ///
    /// Lowercases, converts whitespace runs to single hyphens, and strips
    /// all other punctuation. `"Ministry of Health"` becomes
    /// `"ministry-of-health"`. Returns an error if nothing survives.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        let mut slug = String::with_capacity(name.len());
        let mut pending_hyphen = false;
        for c in name.chars() {
            if c.is_whitespace() || c == '-' || c == '_' {
                pending_hyphen = !slug.is_empty();
            } else if c.is_ascii_alphanumeric() {
                if pending_hyphen {
                    slug.push('-');
                    pending_hyphen = false;
                }
                slug.push(c.to_ascii_lowercase());
            }
            // Everything else (punctuation, non-ASCII) is dropped.
        }
        slug.truncate(Self::MAX_LEN);
        if slug.is_empty() {
            return Err(ValidationError::InvalidAgencySlug {
                value: name.to_string(),
            });
        }
        Ok(Self(slug))
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgencySlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for an evidence submission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Generate a new random submission identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. from a path parameter).
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
