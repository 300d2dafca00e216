//! Note entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note: title, body, and the moment it was created.
///
/// Titles are unique case-insensitively across the collection; `time_added`
/// is set once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub time_added: DateTime<Utc>,
}

impl Note {
    /// Create a new note stamped with the current UTC time
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Note {
            title: title.into(),
            body: body.into(),
            time_added: Utc::now(),
        }
    }

    /// Case-insensitive exact title match
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase() == query.to_lowercase()
    }

    /// Case-insensitive substring title match
    pub fn title_contains(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}
