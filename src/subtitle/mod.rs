// Timed-text cues and the SRT block format
//
// - Parser: SRT blocks into cues

pub mod parser;

use chrono::NaiveTime;
use serde::Serialize;

pub use parser::*;

use crate::text::normalize_cue_text;

/// One timed subtitle entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cue {
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Single-spaced, trimmed cue text
    pub text: String,
    match_start: Option<usize>,
}

impl Cue {
    pub fn new(start: NaiveTime, end: NaiveTime, text: &str) -> Self {
        Self {
            start,
            end,
            text: normalize_cue_text(text),
            match_start: None,
        }
    }

    /// Script offset where the cue was matched, once aligned
    pub fn match_start(&self) -> Option<usize> {
        self.match_start
    }

    /// Record the match position. A cue is only ever matched once.
    pub fn with_match_start(self, start: usize) -> Self {
        debug_assert!(self.match_start.is_none(), "cue matched twice");
        Self {
            match_start: Some(start),
            ..self
        }
    }
}

/// Format a time as SRT `HH:MM:SS,mmm`
pub fn format_srt_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S,%3f").to_string()
}

/// Parse SRT `HH:MM:SS,mmm`; a `.` separator is accepted as well
pub fn parse_srt_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim().replace(',', ".");
    NaiveTime::parse_from_str(&value, "%H:%M:%S%.f").ok()
}
