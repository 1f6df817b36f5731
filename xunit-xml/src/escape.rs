// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::borrow::Cow;

/// Escapes `text` for use in an attribute value or a CDATA payload.
///
/// Replaces `&`, `"`, `<` and `>` with their entity equivalents. Every other character, including
/// `'` and control characters, is passed through unchanged. If nothing needs escaping, the input
/// is returned borrowed.
///
/// Escaping is not idempotent: escaping `&amp;` again produces `&amp;amp;`.
///
/// Input is always valid UTF-8. Event streams are decoded as UTF-8 before they reach a reporter,
/// and invalid input is rejected there.
pub fn escape(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(needs_escape) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '"' | '<' | '>')
}
