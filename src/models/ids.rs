//! Strongly-typed expense identifier
//!
//! Identifiers are assigned by the store when an expense is committed and never
//! change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from its full UUID or `exp-`-prefixed form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        s.parse()
    }

    /// Whether a user-supplied reference points at this ID
    ///
    /// Accepts the full UUID, the display form (`exp-1a2b3c4d`), or any
    /// prefix of the hyphenated UUID with or without the display prefix.
    pub fn matches_reference(&self, reference: &str) -> bool {
        let reference = reference.trim().to_ascii_lowercase();
        let reference = reference
            .strip_prefix(DISPLAY_PREFIX)
            .unwrap_or(&reference);
        !reference.is_empty() && self.0.to_string().starts_with(reference)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
