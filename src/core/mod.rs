//! # Core Module
//!
//! Configuration and shared messaging utilities for the reminder bot.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add response module with Telegram message chunking utilities
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use response::{chunk_for_message, chunk_text, MESSAGE_LIMIT};
