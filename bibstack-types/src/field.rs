//! Field identifiers for bibliographic entries.
//!
//! A [`Field`] names one attribute of an entry (author list, title,
//! keywords, ...). Field names are case-insensitive in bibliographic
//! sources, so construction folds them to lowercase; two fields denote
//! the same attribute iff their folded names are equal.

use crate::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque identifier naming one attribute of a bibliographic entry.
///
/// Fields are compared purely by (case-folded) name; nothing in the
/// identifier says how the attribute's content is structured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Field(String);

impl Field {
    /// Creates a field identifier, folding the name to lowercase.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// The author list of an entry.
    #[must_use]
    pub fn author() -> Self {
        Self("author".to_string())
    }

    /// The editor list of an entry.
    #[must_use]
    pub fn editor() -> Self {
        Self("editor".to_string())
    }

    /// The title of an entry.
    #[must_use]
    pub fn title() -> Self {
        Self("title".to_string())
    }

    /// The free-form keyword list of an entry.
    #[must_use]
    pub fn keywords() -> Self {
        Self("keywords".to_string())
    }

    /// Returns the folded field name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(Error::EmptyFieldName);
        }
        Ok(Self::new(s))
    }
}

// Deserialization goes through `new` so the lowercase invariant holds
// for names read back from persisted group definitions.
impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
