//! Single-pass `@KEY@` placeholder substitution.
//!
//! The scanner walks the template text left to right exactly once, with no
//! backtracking. `@` characters alternate between opening and closing a
//! keyword span; the text strictly between a pair of delimiters is looked up
//! in the [`PropertyTable`] and replaced with its value. Everything outside
//! a span is copied through byte for byte.
//!
//! Substitution is single-level: a replacement value is inserted verbatim
//! and never re-scanned, so a value of `@B@` renders as the literal text
//! `@B@`.
//!
//! ## Known limitation
//!
//! There is no escape syntax for a literal `@`. Two adjacent delimiters
//! (`@@`) are a lookup of the empty-string key, which fails unless the table
//! deliberately defines that key (see [`PropertyTable::from_pairs`]). This
//! matches the autoconf-style convention the tool replaces.

use crate::error::{ConfgenError, Result};
use crate::properties::PropertyTable;

/// Template text paired with an identifier naming where it came from.
///
/// The identifier only feeds diagnostics; rendering itself is agnostic to
/// the template's origin.
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
    source_id: String,
}

impl Template {
    /// Wrap template text with no meaningful origin (tests, in-memory use).
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_source(text, "<inline>")
    }

    /// Wrap template text read from `source_id` (typically a file path).
    pub fn with_source(text: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_id: source_id.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }
}

/// Scanner state: outside any placeholder, or inside one opened at `@`.
enum Scan {
    Literal,
    /// `key_start` is the byte offset just past the opening `@`.
    InKeyword { key_start: usize },
}

/// Render a template against a property table.
///
/// Returns the fully rendered output, or the first error encountered
/// scanning left to right: [`ConfgenError::UndefinedKey`] for a placeholder
/// absent from the table, [`ConfgenError::MalformedTemplate`] for input that
/// ends inside an open span (an odd number of `@` characters). No partial
/// output is produced on failure.
pub fn render(template: &Template, properties: &PropertyTable) -> Result<String> {
    let text = template.text();
    let mut output = String::with_capacity(text.len());
    let mut state = Scan::Literal;
    // Start of the literal segment not yet copied to the output.
    let mut flush_from = 0;

    for (i, c) in text.char_indices() {
        if c != '@' {
            continue;
        }
        match state {
            Scan::Literal => {
                output.push_str(&text[flush_from..i]);
                state = Scan::InKeyword { key_start: i + 1 };
            }
            Scan::InKeyword { key_start } => {
                let key = &text[key_start..i];
                let value = properties.get(key).ok_or_else(|| ConfgenError::UndefinedKey {
                    key: key.to_owned(),
                })?;
                tracing::trace!(key, value, "substituted placeholder");
                output.push_str(value);
                state = Scan::Literal;
                flush_from = i + 1;
            }
        }
    }

    if let Scan::InKeyword { .. } = state {
        return Err(ConfgenError::MalformedTemplate {
            source_id: template.source_id().to_owned(),
        });
    }

    output.push_str(&text[flush_from..]);
    Ok(output)
}
