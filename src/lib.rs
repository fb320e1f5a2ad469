//! scriptsync - Subtitle Realignment Against a Reference Script
//!
//! Repairs noisy subtitle cues by locating each cue's text in a clean script
//! with edit distance, snapping the match to word boundaries and reflowing
//! the script text into the cue.

pub mod align;
pub mod cli;
pub mod config;
pub mod error;
pub mod quality;
pub mod repair;
pub mod report;
pub mod subtitle;
pub mod text;
pub mod workflow;
