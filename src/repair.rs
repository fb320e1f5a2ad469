use chrono::NaiveTime;
use serde::Serialize;
use tracing::debug;

use crate::align::{Alignment, MatchWindow};
use crate::config::SpanMode;
use crate::text::{reflow, Script};

/// A cue with its text replaced by the matching script text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepairedCue {
    /// Zero-based position of the source cue in the input
    pub source_index: usize,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Reflowed lines of script text
    pub lines: Vec<String>,
    /// Text as originally recognized, before repair
    pub original_text: String,
    /// Adjusted script window the lines were taken from
    pub window: MatchWindow,
}

impl RepairedCue {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Build repaired cues from matched alignments; unmatched cues are dropped
pub fn repair(
    script: &Script,
    alignments: &[Alignment],
    span: SpanMode,
    max_width: usize,
) -> Vec<RepairedCue> {
    let matched: Vec<(&Alignment, MatchWindow)> = alignments
        .iter()
        .filter_map(|alignment| alignment.window().map(|window| (alignment, window.adjusted(script))))
        .collect();

    let mut repaired = Vec::with_capacity(matched.len());
    for (position, (alignment, adjusted)) in matched.iter().enumerate() {
        let window = match span {
            SpanMode::Window => *adjusted,
            SpanMode::Contiguous => {
                let end = matched
                    .get(position + 1)
                    .map_or(script.len(), |(_, next)| next.start);
                MatchWindow {
                    start: adjusted.start,
                    end: end.max(adjusted.start),
                    distance: adjusted.distance,
                }
            }
        };

        let text = script.slice(window.start, window.end);
        let lines = reflow(text.trim(), max_width);
        debug!(
            "Repaired cue #{}: '{}' -> '{}'",
            alignment.index + 1,
            alignment.cue.text,
            lines.join(" ")
        );

        repaired.push(RepairedCue {
            source_index: alignment.index,
            start: alignment.cue.start,
            end: alignment.cue.end,
            lines,
            original_text: alignment.cue.text.clone(),
            window,
        });
    }

    repaired
}
