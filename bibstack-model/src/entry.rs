use bibstack_types::{EntryId, Field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A bibliographic record.
///
/// Field values are stored exactly as authored, markup included.
/// Consumers that need plain text normalize at the point of comparison,
/// never in storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub entry_type: String,
    pub fields: BTreeMap<Field, String>,
}

impl Entry {
    /// Creates an empty entry of the given type ("article", "book", ...).
    #[must_use]
    pub fn new(entry_type: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            entry_type: entry_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Returns the raw value of `field`, if set.
    #[must_use]
    pub fn field(&self, field: &Field) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Sets `field` to `value`, replacing any previous value.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Builder-style variant of [`Entry::set_field`].
    #[must_use]
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }
}
