//! scriptsync - Subtitle Realignment Against a Reference Script
//!
//! Entry point: sets up logging, loads configuration and dispatches the
//! selected command.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use scriptsync::align::{distance, fold_case};
use scriptsync::cli::{Args, Commands};
use scriptsync::config::{Config, OutputFormat, SpanMode};
use scriptsync::error::ScriptSyncError;
use scriptsync::workflow::Workflow;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose)?;

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            if std::path::Path::new("scriptsync.toml").exists() {
                info!("Found scriptsync.toml in current directory, loading...");
                Config::from_file("scriptsync.toml")?
            } else {
                Config::default()
            }
        }
    };

    match args.command {
        Commands::Align { script, subtitles, output, width, format, span, no_progress } => {
            if let Some(width) = width {
                config.reflow.max_width = width;
            }
            if let Some(format) = format {
                config.output.format = parse_output_format(&format)?;
            }
            if let Some(span) = span {
                config.repair.span = parse_span_mode(&span)?;
            }

            info!("Aligning {} against {}", subtitles.display(), script.display());
            let workflow = Workflow::new(config)?.with_progress(!no_progress);
            let result = workflow.process(&script, &subtitles, output.as_ref()).await?;

            info!(
                "Repaired {} of {} cues",
                result.cues.len(),
                result.quality.total
            );
        }
        Commands::Distance { a, b } => {
            let fold = |s: &str| -> String {
                s.chars().map(|c| fold_case(c, config.align.case_insensitive)).collect()
            };
            println!("{}", distance(&fold(&a), &fold(&b)));
        }
        Commands::Config { output } => {
            match output {
                Some(path) => {
                    config.save_to_file(&path)?;
                    info!("Configuration written to {}", path.display());
                }
                None => print!("{}", config.to_toml()?),
            }
        }
    }

    Ok(())
}

/// Setup logging to stderr and a rolling log file
fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = std::env::current_dir()?.join(".scriptsync").join("log");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = rolling::daily(&log_dir, "scriptsync.log");
    let (non_blocking_file, guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(guard);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // stdout carries rendered cues, so the console layer writes to stderr
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(verbose)
        .with_line_number(verbose);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!("Logging initialized - console: {}, file: {}",
          log_level, log_dir.join("scriptsync.log").display());

    Ok(())
}

/// Parse output format from string
fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "srt" => Ok(OutputFormat::Srt),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ScriptSyncError::UnsupportedFormat(format!(
            "Invalid output format '{}'. Valid formats: srt, json",
            format
        )).into()),
    }
}

/// Parse span mode from string
fn parse_span_mode(span: &str) -> Result<SpanMode> {
    match span.to_lowercase().as_str() {
        "window" => Ok(SpanMode::Window),
        "contiguous" => Ok(SpanMode::Contiguous),
        _ => Err(ScriptSyncError::Config(format!(
            "Invalid span mode '{}'. Valid modes: window, contiguous",
            span
        )).into()),
    }
}
