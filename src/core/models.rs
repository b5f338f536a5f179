//! Data model for items and auth forms.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A single item as returned by the backend.
///
/// Items are server-owned; the client never invents ids or timestamps and
/// never mutates an item in place. Timestamps arrive as RFC 3339 strings
/// under camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Login/signup credentials. Held only in form state, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Shown when a create/edit submit is attempted with a blank field.
pub const EMPTY_FIELDS_MESSAGE: &str = "Name and description can't be empty.";

/// Transient form state for the create/edit item dialog.
///
/// `id = None` means the dialog is in create mode; `Some(id)` edits that
/// item. At most one dialog is open at a time, so a single draft is enough.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

impl ItemDraft {
    /// Draft populated from an existing item, putting the dialog in edit mode.
    pub fn for_edit(item: &Item) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            description: item.description.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Reject blank or whitespace-only fields before any network call.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            Err(EMPTY_FIELDS_MESSAGE)
        } else {
            Ok(())
        }
    }
}

/// Format an RFC 3339 timestamp from the API for display, or `None` when the
/// value does not parse.
pub fn try_format_timestamp(value: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.format("%b %-d, %Y, %-I:%M %p").to_string())
}

/// Format an RFC 3339 timestamp, falling back to "Unknown".
pub fn format_timestamp(value: &str) -> String {
    try_format_timestamp(value).unwrap_or_else(|| "Unknown".to_string())
}
