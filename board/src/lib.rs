//! Board/column/card state model for the TaskFlow kanban app.
//!
//! This crate owns everything that survives a page reload: the board list,
//! each board's column/card tree, and the JSON snapshots written to the
//! storage backend after every mutation. It is deliberately free of WASM
//! dependencies: callers supply timestamps and a [`storage::Storage`]
//! backend, so the whole model runs and tests natively. The UI crate wires
//! DOM events to these operations and re-renders from the returned state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`registry`] | Board list and the selected-board pointer |
//! | [`content`] | Per-board column/card tree and its mutations |
//! | [`card`] | Card type, priority, and the partial-update draft |
//! | [`column`] | Column type and the three-column seed |
//! | [`drag`] | Transient drag-gesture state producing card moves |
//! | [`storage`] | Storage trait, key layout, in-memory test backend |
//! | [`ids`] | Timestamp-derived id strings |

pub mod card;
pub mod column;
pub mod content;
pub mod drag;
pub mod ids;
pub mod registry;
pub mod storage;
