use tracing::{debug, warn};

use crate::error::{Result, ScriptSyncError};
use super::{parse_srt_time, Cue};

/// Parse SRT content into cues.
///
/// Blocks are separated by blank lines. The numeric index line is optional.
/// A block whose timing line is not two values around `-->`, or which has no
/// text, is skipped with a warning. A timing value that is not a valid time is
/// an error.
pub fn parse_srt(content: &str) -> Result<Vec<Cue>> {
    let content = content.trim_start_matches('\u{feff}');
    let mut cues = Vec::new();
    let mut block: Vec<(usize, &str)> = Vec::new();

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                if let Some(cue) = parse_block(&block)? {
                    cues.push(cue);
                }
                block.clear();
            }
        } else {
            block.push((number + 1, line));
        }
    }
    if !block.is_empty() {
        if let Some(cue) = parse_block(&block)? {
            cues.push(cue);
        }
    }

    debug!("Parsed {} cues", cues.len());
    Ok(cues)
}

fn parse_block(block: &[(usize, &str)]) -> Result<Option<Cue>> {
    let (first_line, _) = block[0];
    let timing_index = if block[0].1.contains("-->") { 0 } else { 1 };

    let Some(&(line, timing)) = block.get(timing_index) else {
        warn!("Skipping block at line {}: missing timing line", first_line);
        return Ok(None);
    };

    let parts: Vec<&str> = timing.split("-->").collect();
    if parts.len() != 2 {
        warn!("Skipping block at line {}: malformed timing line '{}'", line, timing.trim());
        return Ok(None);
    }

    let start = parse_timestamp(line, parts[0])?;
    // anything after the end time (e.g. position hints) is ignored
    let end_value = parts[1].split_whitespace().next().unwrap_or_default();
    let end = parse_timestamp(line, end_value)?;

    let text_lines: Vec<&str> = block[timing_index + 1..]
        .iter()
        .map(|&(_, text)| text)
        .collect();
    if text_lines.is_empty() {
        warn!("Skipping block at line {}: no text", first_line);
        return Ok(None);
    }

    Ok(Some(Cue::new(start, end, &text_lines.join("\n"))))
}

fn parse_timestamp(line: usize, value: &str) -> Result<chrono::NaiveTime> {
    parse_srt_time(value).ok_or_else(|| ScriptSyncError::Timestamp {
        line,
        value: value.trim().to_string(),
    })
}
