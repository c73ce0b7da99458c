//! The in-progress message text.

/// Holds the unsent message text exactly as typed.
///
/// Writes are never validated: empty and whitespace-only drafts are stored
/// as-is. Validation happens only in [`Draft::submit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the draft with the current value of the text field.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Takes the draft for sending.
    ///
    /// Returns the trimmed text and clears the draft when something is left
    /// after trimming. A blank draft is left untouched and `None` is returned;
    /// that is a silent no-op, not an error.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = js_trim(&self.text);
        if trimmed.is_empty() {
            return None;
        }
        let message = trimmed.to_string();
        self.text.clear();
        Some(message)
    }
}

/// Trims the whitespace set browsers strip from form input: Unicode
/// `White_Space` without U+0085, plus the byte-order mark U+FEFF.
fn js_trim(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
