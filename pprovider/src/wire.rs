//! Minimal JSON string handling shared by the provider codecs.
//!
//! Request bodies are assembled by hand and response bodies are scanned for a
//! known field marker; no general JSON parser is involved. The escape table is
//! the same in both directions: `\\`, `\"`, `\n`, `\r`, `\t`. Other control
//! characters are written as `\u00XX` and left as-is when decoding.
//!
//! ```rust
//! use pprovider::wire::{escape_json, extract_string_field, unescape_json};
//!
//! let escaped = escape_json("line one\n\"quoted\"");
//! assert_eq!(escaped, r#"line one\n\"quoted\""#);
//! assert_eq!(unescape_json(&escaped), "line one\n\"quoted\"");
//!
//! let body = r#"{"message":{"role":"assistant","content":"Hi \"there\""}}"#;
//! assert_eq!(extract_string_field(body, "\"content\":", 0).unwrap(), "Hi \"there\"");
//! ```

use pcommon::ConversationTurn;

use crate::GatewayError;

pub fn escape_json(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            control if u32::from(control) < 0x20 => {
                escaped.push_str(&format!("\\u{:04x}", u32::from(control)));
            }
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverses [`escape_json`] in a single pass. Escapes outside the table are kept verbatim.
pub fn unescape_json(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            unescaped.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some('t') => unescaped.push('\t'),
            Some('"') => unescaped.push('"'),
            Some('\\') => unescaped.push('\\'),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }

    unescaped
}

/// Byte index of the first quote at or after `start` that is not escaped.
pub fn find_closing_quote(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut index = start;

    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            b'"' => return Some(index),
            _ => index += 1,
        }
    }

    None
}

/// Finds `marker` at or after `from` and returns its unescaped string value.
pub fn extract_string_field(body: &str, marker: &str, from: usize) -> Result<String, GatewayError> {
    let marker_start = body
        .get(from..)
        .and_then(|rest| rest.find(marker))
        .map(|offset| from + offset)
        .ok_or_else(invalid_format)?;

    let after_marker = marker_start + marker.len();
    let value_offset = body[after_marker..]
        .find(|ch: char| !ch.is_whitespace())
        .ok_or_else(invalid_format)?;
    let quote = after_marker + value_offset;
    if body.as_bytes()[quote] != b'"' {
        return Err(invalid_format());
    }

    let value_start = quote + 1;
    let value_end = find_closing_quote(body, value_start).ok_or_else(invalid_format)?;
    Ok(unescape_json(&body[value_start..value_end]))
}

/// Appends `{"role":..,"content":..}` entries, separated by commas.
pub(crate) fn push_message(buffer: &mut String, role: &str, content: &str) {
    if !buffer.ends_with('[') {
        buffer.push(',');
    }
    buffer.push_str("{\"role\":\"");
    buffer.push_str(role);
    buffer.push_str("\",\"content\":\"");
    buffer.push_str(&escape_json(content));
    buffer.push_str("\"}");
}

/// History in original order followed by the new user turn.
pub(crate) fn push_conversation(buffer: &mut String, history: &[ConversationTurn], user_message: &str) {
    for turn in history {
        push_message(buffer, turn.role.as_str(), &turn.content);
    }
    push_message(buffer, "user", user_message);
}

fn invalid_format() -> GatewayError {
    GatewayError::parse("Invalid response format")
}
