//! Storage backend abstraction and the persisted key layout.
//!
//! The model persists whole JSON snapshots under well-known string keys.
//! Backends are infallible at the trait boundary: a browser adapter that
//! hits a missing window or a full quota logs and drops the write (the last
//! writer wins across tabs anyway; there is no locking or merging). The
//! [`MemoryStorage`] backend exists for native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Key holding the JSON array of boards.
pub const BOARDS_KEY: &str = "taskflowBoards";

/// Key holding a board's JSON array of columns.
///
/// Board ids already carry a `board-` prefix, so keys read like
/// `board-board-1`. That doubling is the layout the app has always used;
/// existing persisted data depends on it.
#[must_use]
pub fn board_key(board_id: &str) -> String {
    format!("board-{board_id}")
}

/// String key/value storage for whole-snapshot persistence.
pub trait Storage {
    /// Read the value under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str);

    /// Remove `key` and its value, if present.
    fn remove(&self, key: &str);
}

/// HashMap-backed storage for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `entries`.
    #[must_use]
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self { entries: RefCell::new(entries.into_iter().collect()) }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl<S: Storage> Storage for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}
