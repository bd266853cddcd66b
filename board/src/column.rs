//! Column type and the default three-column seed.

#[cfg(test)]
#[path = "column_test.rs"]
mod column_test;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// A named ordered lane of cards within a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique within a board (`col-<ms>` for user-created columns).
    pub id: String,
    /// Lane title shown in the column header.
    pub title: String,
    /// Ordered card sequence; every card lives in exactly one column.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new(id: String, title: String) -> Self {
        Self { id, title, cards: Vec::new() }
    }
}

/// The three columns every fresh board starts with.
#[must_use]
pub fn seed_columns() -> Vec<Column> {
    vec![
        Column::new("col-1".to_owned(), "To Do".to_owned()),
        Column::new("col-2".to_owned(), "In Progress".to_owned()),
        Column::new("col-3".to_owned(), "Done".to_owned()),
    ]
}
