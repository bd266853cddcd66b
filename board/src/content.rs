//! Per-board content store: the ordered column/card tree and its mutations.
//!
//! One store instance owns the tree for a single board id, loaded lazily on
//! first access and seeded with the default three lanes when nothing is
//! persisted. Every mutation writes the whole `board-<id>` snapshot back to
//! storage before returning; the UI re-renders from [`ContentStore::columns`]
//! afterwards. Columns keep their insertion order and are never reordered;
//! cards keep their order within a column except for the append-on-move rule.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::card::{Card, CardDraft};
use crate::column::{Column, seed_columns};
use crate::drag::CardMove;
use crate::ids;
use crate::storage::{Storage, board_key};

/// Columns and cards for one board, with snapshot persistence.
#[derive(Debug)]
pub struct ContentStore<S: Storage> {
    storage: S,
    board_id: String,
    columns: Vec<Column>,
}

impl<S: Storage> ContentStore<S> {
    /// Load the tree for `board_id`, seeding the default "To Do" /
    /// "In Progress" / "Done" lanes when the snapshot is absent or
    /// unreadable.
    pub fn load(storage: S, board_id: impl Into<String>) -> Self {
        let board_id = board_id.into();
        let columns = match storage.read(&board_key(&board_id)) {
            Some(json) => match serde_json::from_str::<Vec<Column>>(&json) {
                Ok(columns) => columns,
                Err(err) => {
                    log::warn!("discarding corrupt columns for {board_id}: {err}");
                    seed_columns()
                }
            },
            None => seed_columns(),
        };
        let store = Self { storage, board_id, columns };
        store.persist();
        store
    }

    /// The board this store belongs to.
    #[must_use]
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Columns in insertion order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Append a new empty column. Returns `None` (no mutation) for a
    /// whitespace-only title.
    pub fn add_column(&mut self, title: &str, now_ms: i64) -> Option<Column> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let column = Column::new(ids::stamped(ids::COLUMN_PREFIX, now_ms), title.to_owned());
        self.columns.push(column.clone());
        self.persist();
        Some(column)
    }

    /// Remove a column and every card in it. The caller is expected to have
    /// confirmed the destructive intent already.
    pub fn delete_column(&mut self, column_id: &str) {
        self.columns.retain(|c| c.id != column_id);
        self.persist();
    }

    /// Create or edit a card in `column_id`.
    ///
    /// With `card_id == None` a new card is appended to the column, both
    /// timestamps stamped to `now_ms`. With `card_id == Some` the existing
    /// card is updated in place: same position in the sequence, same
    /// `created_at`, refreshed `updated_at`. A draft without a title, or an
    /// unknown column/card, leaves the tree untouched and returns `None`.
    pub fn upsert_card(
        &mut self,
        column_id: &str,
        card_id: Option<&str>,
        draft: &CardDraft,
        now_ms: i64,
    ) -> Option<Card> {
        if !draft.has_title() {
            return None;
        }
        let column = self.columns.iter_mut().find(|c| c.id == column_id)?;
        let card = match card_id {
            None => {
                let card = Card::create(draft, now_ms);
                column.cards.push(card.clone());
                card
            }
            Some(id) => {
                let card = column.cards.iter_mut().find(|c| c.id == id)?;
                card.apply(draft, now_ms);
                card.clone()
            }
        };
        self.persist();
        Some(card)
    }

    /// Remove a card from a column's sequence.
    pub fn delete_card(&mut self, column_id: &str, card_id: &str) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == column_id) {
            column.cards.retain(|c| c.id != card_id);
        }
        self.persist();
    }

    /// Apply a completed drag: remove the card from the source column and
    /// append it to the target column's end, leaving every other card's
    /// relative order unchanged.
    ///
    /// A same-column drop is a no-op when the card is already the column's
    /// tail and otherwise repositions it to the end. A move naming a missing
    /// column or card mutates nothing.
    pub fn move_card(&mut self, mv: &CardMove) {
        if mv.source_column == mv.target_column {
            let Some(column) = self.columns.iter_mut().find(|c| c.id == mv.source_column) else {
                return;
            };
            if column.cards.last().is_some_and(|c| c.id == mv.card_id) {
                return;
            }
            let Some(index) = column.cards.iter().position(|c| c.id == mv.card_id) else {
                return;
            };
            let card = column.cards.remove(index);
            column.cards.push(card);
            self.persist();
            return;
        }

        if !self.columns.iter().any(|c| c.id == mv.target_column) {
            return;
        }
        let Some(source) = self.columns.iter_mut().find(|c| c.id == mv.source_column) else {
            return;
        };
        let Some(index) = source.cards.iter().position(|c| c.id == mv.card_id) else {
            return;
        };
        let card = source.cards.remove(index);
        if let Some(target) = self.columns.iter_mut().find(|c| c.id == mv.target_column) {
            target.cards.push(card);
        }
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.columns) {
            Ok(json) => self.storage.write(&board_key(&self.board_id), &json),
            Err(err) => log::warn!("failed to serialize columns for {}: {err}", self.board_id),
        }
    }
}
