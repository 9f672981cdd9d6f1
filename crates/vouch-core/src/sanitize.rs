// SPDX-FileCopyrightText: 2026 Vouch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text input sanitization for submitted field values.
//!
//! Everything the editor adapter persists passes through here first, so the
//! metadata store can never hold executable markup or control bytes.

/// Sanitize a submitted value as plain text.
///
/// Strips `<...>` tag sequences (an unterminated `<` drops the remainder),
/// replaces control characters with spaces, then collapses whitespace runs
/// and trims.
pub fn sanitize_text_field(input: &str) -> String {
    let mut stripped = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            c if c.is_control() => stripped.push(' '),
            c => stripped.push(c),
        }
    }
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sanitize an identifier-like value: lowercased ASCII, keeping only
/// `a-z`, `0-9`, `_` and `-`.
pub fn sanitize_key(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-'))
        .collect()
}

/// Coerce a string to an integer: optional leading whitespace and sign,
/// then as many digits as are present; anything else yields 0.
///
/// Overlong digit runs saturate instead of failing, so a hostile value can
/// never make coercion panic.
pub fn coerce_int(input: &str) -> i64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let end = start
        + bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
    if end == start {
        return 0;
    }
    s[..end].parse::<i64>().unwrap_or(if bytes[0] == b'-' {
        i64::MIN
    } else {
        i64::MAX
    })
}
