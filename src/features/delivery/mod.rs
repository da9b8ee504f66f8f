//! # Delivery Feature
//!
//! Message transport: hands generated reminder content to Telegram.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod telegram;

pub use telegram::{Dispatcher, TelegramDispatcher};
