use serde::Serialize;

use crate::align::MatchWindow;
use crate::error::Result;
use crate::repair::RepairedCue;
use crate::subtitle::format_srt_time;
use super::Reporter;

#[derive(Debug, Serialize)]
struct JsonCue<'a> {
    index: usize,
    start: String,
    end: String,
    text: String,
    lines: &'a [String],
    original_text: &'a str,
    window: MatchWindow,
}

/// JSON output with match windows and distances
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Reporter for JsonReporter {
    fn render(&self, cues: &[RepairedCue]) -> Result<String> {
        let entries: Vec<JsonCue> = cues
            .iter()
            .enumerate()
            .map(|(index, cue)| JsonCue {
                index: index + 1,
                start: format_srt_time(cue.start),
                end: format_srt_time(cue.end),
                text: cue.text(),
                lines: &cue.lines,
                original_text: &cue.original_text,
                window: cue.window,
            })
            .collect();

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };
        Ok(rendered)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
