//! Browser-facing helpers: clock, dark mode, welcome banner.

pub mod clock;
pub mod dark_mode;
pub mod welcome;
