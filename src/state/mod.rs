//! UI-only state modules.
//!
//! The board/column/card model lives in the `board` crate; these modules
//! hold the chrome state the presentation layer owns itself (theme, the
//! welcome banner, toasts).

pub mod toast;
pub mod ui;
