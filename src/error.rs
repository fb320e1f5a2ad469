use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptSyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid text pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid timestamp '{value}' on line {line}")]
    Timestamp { line: usize, value: String },

    #[error("Alignment quality error: {0}")]
    Quality(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, ScriptSyncError>;
