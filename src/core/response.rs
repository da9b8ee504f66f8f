//! Telegram message-size utilities
//!
//! The Bot API caps sendMessage text at 4096 characters; reminder bodies for
//! heavy schedule days can exceed that, so long text is split into multiple
//! messages rather than truncated.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

/// Telegram sendMessage text limit
pub const MESSAGE_LIMIT: usize = 4096;

/// Chunk text into pieces that fit a size limit (UTF-8 safe, line-aware)
///
/// Splitting prefers line boundaries so Markdown lines stay intact, never
/// splits mid-character, and falls back to character-by-character splitting
/// for single lines longer than the limit.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        let line_with_newline = format!("{line}\n");
        if current.len() + line_with_newline.len() > max_size {
            if !current.is_empty() {
                chunks.push(current.trim_end().to_string());
                current = String::new();
            }
            if line_with_newline.len() > max_size {
                chunks.extend(chunk_long_line(line, max_size));
            } else {
                current = line_with_newline;
            }
        } else {
            current.push_str(&line_with_newline);
        }
    }
    if !current.is_empty() {
        chunks.push(current.trim_end().to_string());
    }
    chunks
}

/// Split a single long line into chunks respecting UTF-8 boundaries
fn chunk_long_line(line: &str, max_size: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        let ch_len = ch.len_utf8();
        if current.len() + ch_len > max_size && !current.is_empty() {
            result.push(current);
            current = String::new();
        }
        current.push(ch);
    }

    if !current.is_empty() {
        result.push(current);
    }

    result
}

/// Chunk text for Telegram message content (4096 character limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}
