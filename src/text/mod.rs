// Text handling for the reference script
//
// - Normalize: canonical script and cue text
// - Reflow: word-aware line wrapping of repaired cue text

pub mod normalize;
pub mod reflow;

pub use normalize::*;
pub use reflow::*;

/// Normalized reference script.
///
/// Offsets into the script are character offsets, not byte offsets, so the
/// characters are kept alongside the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    text: String,
    chars: Vec<char>,
}

impl Script {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Text of the half-open character range `[start, end)`, clamped to the script
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }
}
