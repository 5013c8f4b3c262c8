//! Archive record type
//!
//! One record per object in the data file. Missing keys decode to empty
//! strings and unknown keys are ignored; a key holding a non-string value is
//! a decode error.

use serde::{Deserialize, Serialize};

/// A single archival entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Identifier (unique by convention only)
    pub id: String,
    /// Display name
    pub name: String,
    /// Category, e.g. "planet", "artifact", "creed", "event"
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Affiliated group or origin
    pub faction: String,
    /// Lore text
    pub description: String,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entry_type: impl Into<String>,
        faction: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entry_type: entry_type.into(),
            faction: faction.into(),
            description: description.into(),
        }
    }
}
