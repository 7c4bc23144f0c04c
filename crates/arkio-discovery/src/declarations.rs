// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider-declaration parsing.
//!
//! A declaration artifact lists one fully-qualified implementation id per
//! logical line. Everything after a `#` is a comment; blank lines and
//! pure-comment lines are skipped; surrounding whitespace is trimmed. Parsing
//! preserves line order and applies no policy of its own (duplicates pass
//! through unchanged).

/// Extract the implementation ids declared in `text`, in declaration order.
pub fn parse_declarations(text: &str) -> Vec<&str> {
    text.lines()
        .map(|line| match line.find('#') {
            Some(comment) => line[..comment].trim(),
            None => line.trim(),
        })
        .filter(|line| !line.is_empty())
        .collect()
}
