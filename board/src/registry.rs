//! Board registry: the board list and the selected-board pointer.
//!
//! Owns the `taskflowBoards` snapshot. Every mutation writes the full board
//! list back to storage before returning. Selection is an in-memory pointer
//! only; it resets to the first board on reload and is never persisted.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use serde::{Deserialize, Serialize};

use crate::ids;
use crate::storage::{BOARDS_KEY, Storage, board_key};

/// A top-level named kanban board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Unique id (`board-<ms>`; the seed board is `board-1`).
    pub id: String,
    /// Board title shown in the sidebar.
    pub title: String,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

/// The board list plus the currently selected board id.
#[derive(Debug)]
pub struct BoardRegistry<S: Storage> {
    storage: S,
    boards: Vec<Board>,
    selected: Option<String>,
}

impl<S: Storage> BoardRegistry<S> {
    /// Load the registry from storage, seeding one starter board when the
    /// snapshot is absent or unreadable. The first board (if any) becomes
    /// the selection.
    pub fn load(storage: S, now_ms: i64) -> Self {
        let boards = match storage.read(BOARDS_KEY) {
            Some(json) => match serde_json::from_str::<Vec<Board>>(&json) {
                Ok(boards) => boards,
                Err(err) => {
                    log::warn!("discarding corrupt board list: {err}");
                    seed_boards(now_ms)
                }
            },
            None => seed_boards(now_ms),
        };
        let selected = boards.first().map(|b| b.id.clone());
        let registry = Self { storage, boards, selected };
        registry.persist();
        registry
    }

    /// Boards in insertion order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Id of the currently selected board, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The currently selected board, if the selection points at a real one.
    #[must_use]
    pub fn selected_board(&self) -> Option<&Board> {
        let id = self.selected.as_deref()?;
        self.boards.iter().find(|b| b.id == id)
    }

    /// Create a board, select it, and persist. Returns `None` (no mutation)
    /// for a whitespace-only title.
    pub fn create(&mut self, title: &str, now_ms: i64) -> Option<Board> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let board = Board {
            id: ids::stamped(ids::BOARD_PREFIX, now_ms),
            title: title.to_owned(),
            created_at: now_ms,
        };
        self.boards.push(board.clone());
        self.selected = Some(board.id.clone());
        self.persist();
        Some(board)
    }

    /// Delete a board. If it was selected, selection falls to the first
    /// remaining board, or to none. The board's content snapshot is removed
    /// as well, so deletion does not leak `board-<id>` entries.
    pub fn delete(&mut self, id: &str) {
        self.boards.retain(|b| b.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = self.boards.first().map(|b| b.id.clone());
        }
        self.persist();
        self.storage.remove(&board_key(id));
    }

    /// Point the selection at `id`. No existence check; a stale id simply
    /// renders as the no-board-selected state.
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_owned());
    }

    fn persist(&self) {
        match serde_json::to_string(&self.boards) {
            Ok(json) => self.storage.write(BOARDS_KEY, &json),
            Err(err) => log::warn!("failed to serialize board list: {err}"),
        }
    }
}

fn seed_boards(now_ms: i64) -> Vec<Board> {
    vec![Board {
        id: "board-1".to_owned(),
        title: "My First Board".to_owned(),
        created_at: now_ms,
    }]
}
