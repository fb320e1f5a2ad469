use serde::Serialize;
use tracing::{info, warn};

use crate::align::Alignment;
use crate::config::QualityConfig;
use crate::error::{Result, ScriptSyncError};

/// Summary of how well a run of cues aligned
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentQuality {
    pub total: usize,
    pub matched: usize,
    pub skipped: usize,
    /// Mean of distance / cue length over matched cues
    pub mean_distance_ratio: f64,
    pub worst: Option<PoorMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoorMatch {
    pub index: usize,
    pub ratio: f64,
    pub text: String,
}

impl AlignmentQuality {
    pub fn from_alignments(alignments: &[Alignment]) -> Self {
        let mut matched = 0;
        let mut ratio_sum = 0.0;
        let mut worst: Option<PoorMatch> = None;

        for alignment in alignments {
            let Some(ratio) = distance_ratio(alignment) else {
                continue;
            };
            matched += 1;
            ratio_sum += ratio;
            if worst.as_ref().map_or(true, |w| ratio > w.ratio) {
                worst = Some(PoorMatch {
                    index: alignment.index,
                    ratio,
                    text: alignment.cue.text.clone(),
                });
            }
        }

        let mean_distance_ratio = if matched > 0 {
            ratio_sum / matched as f64
        } else {
            0.0
        };

        Self {
            total: alignments.len(),
            matched,
            skipped: alignments.len() - matched,
            mean_distance_ratio,
            worst,
        }
    }

    /// Share of cues that matched; an empty run counts as fully matched
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }
}

/// Edit distance relative to the cue length, for matched cues
pub fn distance_ratio(alignment: &Alignment) -> Option<f64> {
    let window = alignment.window()?;
    let len = alignment.cue.text.chars().count().max(1);
    Some(window.distance as f64 / len as f64)
}

pub struct QualityValidator {
    max_distance_ratio: f64,
    min_match_rate: f64,
}

impl QualityValidator {
    pub fn new(max_distance_ratio: f64, min_match_rate: f64) -> Self {
        Self {
            max_distance_ratio,
            min_match_rate,
        }
    }

    pub fn from_config(config: &QualityConfig) -> Self {
        Self::new(config.max_distance_ratio, config.min_match_rate)
    }

    /// Matched cues whose distance ratio is above the configured limit
    pub fn poor_matches<'a>(&self, alignments: &'a [Alignment]) -> Vec<&'a Alignment> {
        alignments
            .iter()
            .filter(|alignment| {
                distance_ratio(alignment).is_some_and(|ratio| ratio > self.max_distance_ratio)
            })
            .collect()
    }

    /// Report poor matches and fail only when too few cues matched
    pub fn validate(&self, alignments: &[Alignment]) -> Result<AlignmentQuality> {
        for alignment in self.poor_matches(alignments) {
            warn!(
                "Weak match for cue #{} (distance ratio {:.2}): {}",
                alignment.index + 1,
                distance_ratio(alignment).unwrap_or_default(),
                alignment.cue.text
            );
        }

        let quality = AlignmentQuality::from_alignments(alignments);
        info!(
            "Aligned {}/{} cues ({} skipped), mean distance ratio {:.3}",
            quality.matched, quality.total, quality.skipped, quality.mean_distance_ratio
        );

        if quality.match_rate() < self.min_match_rate {
            return Err(ScriptSyncError::Quality(format!(
                "Too few cues matched: {:.2} < {:.2}",
                quality.match_rate(),
                self.min_match_rate
            )));
        }

        Ok(quality)
    }
}
