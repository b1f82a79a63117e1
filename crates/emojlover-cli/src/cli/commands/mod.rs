//! CLI command handlers.

pub mod config;
pub mod list;
pub mod palette;
