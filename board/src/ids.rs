//! Timestamp-derived id strings.
//!
//! Ids are the creation time in milliseconds behind a short kind prefix
//! (`board-`, `col-`, `card-`). Uniqueness is not guaranteed, but two
//! user-initiated creations landing on the same millisecond is practically
//! improbable for a single-user board.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

/// Id prefix for boards.
pub const BOARD_PREFIX: &str = "board";

/// Id prefix for columns.
pub const COLUMN_PREFIX: &str = "col";

/// Id prefix for cards.
pub const CARD_PREFIX: &str = "card";

/// Build a `{prefix}-{now_ms}` id.
#[must_use]
pub fn stamped(prefix: &str, now_ms: i64) -> String {
    format!("{prefix}-{now_ms}")
}
