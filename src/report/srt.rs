use crate::error::Result;
use crate::repair::RepairedCue;
use crate::subtitle::format_srt_time;
use super::Reporter;

/// SRT output, renumbered from 1 with the original cue times
pub struct SrtReporter;

impl Reporter for SrtReporter {
    fn render(&self, cues: &[RepairedCue]) -> Result<String> {
        let mut srt_content = String::new();

        for (index, cue) in cues.iter().enumerate() {
            srt_content.push_str(&format!(
                "{}\n{} --> {}\n{}\n\n",
                index + 1,
                format_srt_time(cue.start),
                format_srt_time(cue.end),
                cue.text()
            ));
        }

        Ok(srt_content)
    }

    fn extension(&self) -> &'static str {
        "srt"
    }
}
