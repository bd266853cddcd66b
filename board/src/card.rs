//! Card type, priority levels, and the partial-update draft.
//!
//! A card belongs to exactly one column's sequence at a time. Edits flow
//! through [`CardDraft`], a fixed set of user-editable fields, rather than
//! open-ended key merging: applying a draft never touches `id` or
//! `created_at`, and always refreshes `updated_at`.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use serde::{Deserialize, Serialize};

use crate::ids;

/// Card priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Default urgency.
    #[default]
    Medium,
    /// High urgency.
    High,
}

impl Priority {
    /// Display label ("Low" / "Medium" / "High").
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A single task belonging to one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within a board (`card-<ms>`).
    pub id: String,
    /// Short task title; never blank once stored.
    pub title: String,
    /// Longer free-form text; empty string when unset.
    #[serde(default)]
    pub description: String,
    /// Urgency pill shown on the card.
    #[serde(default)]
    pub priority: Priority,
    /// Due date as entered (`YYYY-MM-DD`); empty string when unset.
    #[serde(default)]
    pub due_date: String,
    /// Creation time in epoch milliseconds; set once, never altered.
    pub created_at: i64,
    /// Last edit time in epoch milliseconds; refreshed on every edit.
    pub updated_at: i64,
}

/// The user-editable fields of a card, as submitted by the card form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    /// Required; a draft with a blank title is rejected by the store.
    pub title: String,
    /// Optional description.
    pub description: String,
    /// Selected priority.
    pub priority: Priority,
    /// Optional due date string.
    pub due_date: String,
}

impl CardDraft {
    /// Whether the draft carries a usable (non-whitespace) title.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

impl Card {
    /// Create a new card from a draft, stamping both timestamps to `now_ms`.
    #[must_use]
    pub fn create(draft: &CardDraft, now_ms: i64) -> Self {
        Self {
            id: ids::stamped(ids::CARD_PREFIX, now_ms),
            title: draft.title.trim().to_owned(),
            description: draft.description.clone(),
            priority: draft.priority,
            due_date: draft.due_date.clone(),
            created_at: now_ms,
            updated_at: now_ms,
        }
    }

    /// Apply a draft to an existing card, refreshing `updated_at` only.
    pub fn apply(&mut self, draft: &CardDraft, now_ms: i64) {
        self.title = draft.title.trim().to_owned();
        self.description = draft.description.clone();
        self.priority = draft.priority;
        self.due_date = draft.due_date.clone();
        self.updated_at = now_ms;
    }

    /// A draft pre-filled from this card, for the edit form.
    #[must_use]
    pub fn to_draft(&self) -> CardDraft {
        CardDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            due_date: self.due_date.clone(),
        }
    }
}
