//! UI components for the kanban board and app chrome.

pub mod card_form;
pub mod kanban_board;
pub mod kanban_card;
pub mod kanban_column;
pub mod toast_stack;
pub mod welcome_banner;
