use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Realign subtitle cues against a reference script
    Align {
        /// Reference script (plain text)
        #[arg(short, long)]
        script: PathBuf,

        /// Subtitle file (SRT)
        #[arg(short = 'i', long)]
        subtitles: PathBuf,

        /// Output file; defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum line width of repaired cues
        #[arg(short, long)]
        width: Option<usize>,

        /// Output format: srt or json
        #[arg(short, long)]
        format: Option<String>,

        /// Text span per cue: window or contiguous
        #[arg(long)]
        span: Option<String>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Print the case-insensitive edit distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,
    },

    /// Print or write the default configuration
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
