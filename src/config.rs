use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, ScriptSyncError};

// Default values for fields that older config files may omit
fn default_max_width() -> usize {
    50
}

fn default_allowed_symbols() -> String {
    "-?!.,;'\":".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub align: AlignConfig,
    #[serde(default)]
    pub reflow: ReflowConfig,
    #[serde(default)]
    pub repair: RepairConfig,
    #[serde(default)]
    pub quality: QualityConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Remove `[...]` spans such as stage directions
    #[serde(default = "default_true")]
    pub strip_brackets: bool,
    /// Drop characters outside the allow-list
    #[serde(default = "default_true")]
    pub filter_characters: bool,
    /// Non-alphanumeric characters kept by the filter (whitespace is always kept)
    #[serde(default = "default_allowed_symbols")]
    pub allowed_symbols: String,
    /// Accept letters and digits of any script instead of ASCII only
    #[serde(default)]
    pub unicode_letters: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Lower-case both sides before computing edit distance
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflowConfig {
    /// Maximum line width in characters
    #[serde(default = "default_max_width")]
    pub max_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairConfig {
    /// Which part of the script becomes the repaired cue text
    #[serde(default)]
    pub span: SpanMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanMode {
    /// Window: the cue's own boundary-adjusted match window
    #[default]
    Window,
    /// Contiguous: from this cue's adjusted start up to the next matched cue's start
    Contiguous,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Distance / cue length above which a match is reported as poor
    pub max_distance_ratio: f64,
    /// Minimum share of cues that must match; 0.0 disables the check
    pub min_match_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Rendering format for repaired cues
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Srt: numbered timed-text blocks, same layout as the input
    #[default]
    Srt,
    /// Json: repaired cues together with their match windows
    Json,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            strip_brackets: true,
            filter_characters: true,
            allowed_symbols: default_allowed_symbols(),
            unicode_letters: false,
        }
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self { case_insensitive: true }
    }
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self { max_width: default_max_width() }
    }
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self { span: SpanMode::Window }
    }
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            max_distance_ratio: 0.5,
            min_match_rate: 0.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Srt }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScriptSyncError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ScriptSyncError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ScriptSyncError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;

        std::fs::write(path, content)
            .map_err(|e| ScriptSyncError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.reflow.max_width == 0 {
            return Err(ScriptSyncError::Config("reflow.max_width must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.quality.min_match_rate) {
            return Err(ScriptSyncError::Config(format!(
                "quality.min_match_rate must be within 0.0..=1.0, got {}",
                self.quality.min_match_rate
            )));
        }
        if self.quality.max_distance_ratio < 0.0 {
            return Err(ScriptSyncError::Config(format!(
                "quality.max_distance_ratio must not be negative, got {}",
                self.quality.max_distance_ratio
            )));
        }
        Ok(())
    }
}
