// Rendering of repaired cues
//
// This module provides the output formats through a factory pattern:
// - Srt: numbered timed-text blocks
// - Json: cues with their match windows, for inspection

pub mod json;
pub mod srt;

pub use json::JsonReporter;
pub use srt::SrtReporter;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::repair::RepairedCue;

/// Renders repaired cues to text
pub trait Reporter: Send + Sync {
    fn render(&self, cues: &[RepairedCue]) -> Result<String>;

    /// Conventional file extension for the format
    fn extension(&self) -> &'static str;
}

/// Factory for creating reporter instances
pub struct ReporterFactory;

impl ReporterFactory {
    /// Create a reporter for the output format
    pub fn create_reporter(format: OutputFormat) -> Box<dyn Reporter> {
        match format {
            OutputFormat::Srt => Box::new(SrtReporter),
            OutputFormat::Json => Box::new(JsonReporter::new(true)),
        }
    }
}
