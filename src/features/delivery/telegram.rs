//! Telegram transport for reminder delivery.
//!
//! One message per configured chat id, Markdown-formatted, chunked to the
//! Bot API's 4096-character limit. Delivery failures are reported to the
//! caller; retry policy does not live here.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use serde::Serialize;

use crate::core::response::chunk_for_message;

/// Anything that can deliver a generated reminder. The scheduler and the
/// backfill path only see this trait, so tests can swap in a recorder.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn deliver(&self, subject: &str, body: &str) -> Result<()>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

/// Sends reminders through the Telegram Bot API to one or more chats.
pub struct TelegramDispatcher {
    client: reqwest::Client,
    bot_token: String,
    chat_ids: Vec<String>,
}

impl TelegramDispatcher {
    pub fn new(bot_token: String, chat_ids: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            bot_token,
            chat_ids,
        }
    }

    /// Subject and body combined the way Telegram renders them: bold subject,
    /// blank line, body.
    fn build_message(subject: &str, body: &str) -> String {
        format!("*{subject}*\n\n{body}")
    }

    async fn send_to_chat(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);

        for chunk in chunk_for_message(text) {
            let request = SendMessageRequest {
                chat_id,
                text: &chunk,
                parse_mode: "Markdown",
            };

            let response = self
                .client
                .post(&url)
                .json(&request)
                .send()
                .await
                .with_context(|| format!("Failed to reach Telegram API for chat {chat_id}"))?;

            if !response.status().is_success() {
                let status = response.status();
                let detail = response.text().await.unwrap_or_default();
                anyhow::bail!("Telegram API returned {status} for chat {chat_id}: {detail}");
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Dispatcher for TelegramDispatcher {
    async fn deliver(&self, subject: &str, body: &str) -> Result<()> {
        let text = Self::build_message(subject, body);

        let mut failures = 0usize;
        for chat_id in &self.chat_ids {
            match self.send_to_chat(chat_id, &text).await {
                Ok(()) => info!("Telegram message sent successfully to {chat_id}: '{subject}'"),
                Err(e) => {
                    warn!("Error sending Telegram message to {chat_id}: {e:#}");
                    failures += 1;
                }
            }
        }

        if failures == self.chat_ids.len() && !self.chat_ids.is_empty() {
            anyhow::bail!("Delivery failed for all {} configured chats", failures);
        }
        Ok(())
    }
}
