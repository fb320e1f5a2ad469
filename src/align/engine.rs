use tracing::{debug, warn};

use crate::subtitle::Cue;
use crate::text::Script;
use super::{levenshtein, Alignment, MatchOutcome, MatchWindow, NoMatchReason};

/// Sequential cue aligner.
///
/// Each cue is searched for in a window starting at the cursor, which is the
/// raw end of the previous match. Candidate starts run from the cursor to
/// `min(cursor + L, len - L)` inclusive, where `L` is the cue length in
/// characters, and the lowest distance wins with ties going to the earliest
/// start. A candidate costs `O(L^2)` and there are at most `L + 1` of them, so
/// a run over `N` cues is `O(N * L^3)`. Cue texts are short, which keeps this
/// practical.
///
/// The cursor never moves backwards and is left untouched by a cue that
/// does not match.
pub struct AlignmentEngine<'a> {
    script: &'a Script,
    haystack: Vec<char>,
    case_insensitive: bool,
    cursor: usize,
}

impl<'a> AlignmentEngine<'a> {
    /// Case-insensitive engine positioned at the start of the script
    pub fn new(script: &'a Script) -> Self {
        Self::with_case_sensitivity(script, true)
    }

    pub fn with_case_sensitivity(script: &'a Script, case_insensitive: bool) -> Self {
        let haystack = script
            .chars()
            .iter()
            .map(|&c| fold_case(c, case_insensitive))
            .collect();

        Self {
            script,
            haystack,
            case_insensitive,
            cursor: 0,
        }
    }

    pub fn script(&self) -> &Script {
        self.script
    }

    /// Offset where the next search begins
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Best window for `needle` at or after the cursor, without moving it.
    ///
    /// `needle` must already be case-folded the way the engine folds the script.
    pub fn find_best(&self, needle: &[char]) -> Option<MatchWindow> {
        let len = needle.len();
        let total = self.haystack.len();
        if len == 0 || len > total {
            return None;
        }

        let last = (self.cursor + len).min(total - len);
        if last < self.cursor {
            return None;
        }

        let mut best: Option<MatchWindow> = None;
        for start in self.cursor..=last {
            let distance = levenshtein(needle, &self.haystack[start..start + len]);
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(MatchWindow {
                    start,
                    end: start + len,
                    distance,
                });
                // nothing later can beat an exact match
                if distance == 0 {
                    break;
                }
            }
        }
        best
    }

    /// Align the next cue and advance the cursor past its match
    pub fn align_next(&mut self, index: usize, cue: Cue) -> Alignment {
        let needle: Vec<char> = cue
            .text
            .chars()
            .map(|c| fold_case(c, self.case_insensitive))
            .collect();

        if needle.is_empty() {
            warn!("Cue #{} has no text, skipping", index + 1);
            return Alignment {
                index,
                cue,
                outcome: MatchOutcome::NoMatch(NoMatchReason::EmptyCue),
            };
        }

        match self.find_best(&needle) {
            Some(window) => {
                debug!(
                    "Cue #{} matched at {}..{} (distance {}): {}",
                    index + 1,
                    window.start,
                    window.end,
                    window.distance,
                    cue.text
                );
                self.cursor = window.end;
                Alignment {
                    index,
                    cue: cue.with_match_start(window.start),
                    outcome: MatchOutcome::Matched(window),
                }
            }
            None => {
                warn!(
                    "No match for cue #{} ({} -> {}) at script offset {}: {}",
                    index + 1,
                    cue.start,
                    cue.end,
                    self.cursor,
                    cue.text
                );
                Alignment {
                    index,
                    cue,
                    outcome: MatchOutcome::NoMatch(NoMatchReason::EmptyWindow),
                }
            }
        }
    }
}

/// Align every cue in order against the script, case-insensitively
pub fn align(script: &Script, cues: Vec<Cue>) -> Vec<Alignment> {
    let mut engine = AlignmentEngine::new(script);
    cues.into_iter()
        .enumerate()
        .map(|(index, cue)| engine.align_next(index, cue))
        .collect()
}

/// Lower-case one character to one character, so offsets stay valid
pub fn fold_case(c: char, case_insensitive: bool) -> char {
    if case_insensitive {
        c.to_lowercase().next().unwrap_or(c)
    } else {
        c
    }
}
