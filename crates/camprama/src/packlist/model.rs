//! Persisted packlist types.
//!
//! The JSON shape is shared with data written by earlier versions of the
//! app: camelCase field names, `done` optional on read, `sourceId` omitted
//! when absent.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 6;

/// Generate an identifier of the form `<prefix>_<unix millis>_<6 base36 chars>`.
#[must_use]
pub fn new_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect();
    format!("{prefix}_{}_{suffix}", Utc::now().timestamp_millis())
}

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackItem {
    /// Unique within the owning list.
    pub id: String,
    /// Display label.
    pub text: String,
    /// Checked state.
    #[serde(default)]
    pub done: bool,
}

impl PackItem {
    /// A fresh unchecked item with a generated id.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id("n"),
            text: text.into(),
            done: false,
        }
    }
}

/// A user-owned packing list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyList {
    /// Unique across the collection.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Items in display order.
    pub items: Vec<PackItem>,
    /// Template this list was imported from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

impl MyList {
    /// An empty list with a generated id.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id("u"),
            title: title.into(),
            items: Vec::new(),
            source_id: None,
        }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&PackItem> {
        self.items.iter().find(|it| it.id == item_id)
    }

    /// Number of checked items.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|it| it.done).count()
    }

    /// Whether the title matches `title`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.trim().to_lowercase() == title.trim().to_lowercase()
    }

    /// Text for a share sheet.
    #[must_use]
    pub fn share_message(&self) -> String {
        format!("{} — {} items", self.title, self.items.len())
    }
}
