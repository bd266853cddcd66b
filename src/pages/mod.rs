//! Top-level pages routed by the app shell.

pub mod home;
pub mod not_found;
