// Alignment of subtitle cues against the reference script
//
// - Distance: Levenshtein edit distance
// - Engine: sequential best-match search with a monotonic cursor
// - Boundary: snapping raw match windows to word and punctuation edges

pub mod boundary;
pub mod distance;
pub mod engine;

use serde::Serialize;

pub use distance::{distance, levenshtein};
pub use engine::{align, fold_case, AlignmentEngine};

use crate::subtitle::Cue;
use crate::text::Script;

/// Character range `[start, end)` of the script matched to a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchWindow {
    pub start: usize,
    pub end: usize,
    pub distance: usize,
}

impl MatchWindow {
    /// Same window snapped to word and punctuation boundaries
    pub fn adjusted(&self, script: &Script) -> MatchWindow {
        let (start, end) = boundary::adjust(script.chars(), self.start, self.end);
        MatchWindow {
            start,
            end,
            distance: self.distance,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchReason {
    /// No candidate offsets: the cue is longer than what is left of the script
    EmptyWindow,
    /// The cue has no text to search for
    EmptyCue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(MatchWindow),
    NoMatch(NoMatchReason),
}

/// Result of aligning one cue, in input order
#[derive(Debug, Clone)]
pub struct Alignment {
    /// Zero-based position of the cue in the input
    pub index: usize,
    pub cue: Cue,
    pub outcome: MatchOutcome,
}

impl Alignment {
    pub fn window(&self) -> Option<MatchWindow> {
        match self.outcome {
            MatchOutcome::Matched(window) => Some(window),
            MatchOutcome::NoMatch(_) => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Matched(_))
    }
}
