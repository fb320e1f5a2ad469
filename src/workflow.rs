use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::align::{Alignment, AlignmentEngine};
use crate::config::Config;
use crate::error::{Result, ScriptSyncError};
use crate::quality::{AlignmentQuality, QualityValidator};
use crate::repair::{repair, RepairedCue};
use crate::report::{Reporter, ReporterFactory};
use crate::subtitle::{parse_srt, Cue};
use crate::text::{Normalizer, Script};

/// Outcome of one script + subtitle run
#[derive(Debug, Clone)]
pub struct RunResult {
    pub cues: Vec<RepairedCue>,
    pub quality: AlignmentQuality,
    pub rendered: String,
}

pub struct Workflow {
    config: Config,
    normalizer: Normalizer,
    reporter: Box<dyn Reporter>,
    show_progress: bool,
}

impl Workflow {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let normalizer = Normalizer::new(&config.normalize)?;
        let reporter = ReporterFactory::create_reporter(config.output.format);

        Ok(Self {
            config,
            normalizer,
            reporter,
            show_progress: false,
        })
    }

    /// Draw a progress bar on stderr while aligning
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read and normalize the reference script
    pub async fn load_script<P: AsRef<Path>>(&self, path: P) -> Result<Script> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScriptSyncError::FileNotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path).await?;
        let script = self.normalizer.normalize_script(&raw);
        info!("Loaded script {} ({} characters)", path.display(), script.len());
        Ok(script)
    }

    /// Read and parse the subtitle cues
    pub async fn load_cues<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Cue>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScriptSyncError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).await?;
        let cues = parse_srt(&content)?;
        info!("Loaded {} cues from {}", cues.len(), path.display());
        Ok(cues)
    }

    /// Align cues in order against the script
    pub fn align(&self, script: &Script, cues: Vec<Cue>) -> Vec<Alignment> {
        let progress = if self.show_progress {
            let pb = ProgressBar::new(cues.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cues ({eta})")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut engine = AlignmentEngine::with_case_sensitivity(script, self.config.align.case_insensitive);
        let mut alignments = Vec::with_capacity(cues.len());
        for (index, cue) in cues.into_iter().enumerate() {
            alignments.push(engine.align_next(index, cue));
            progress.inc(1);
        }

        progress.finish_and_clear();
        alignments
    }

    /// Align, review, repair and render already loaded inputs
    pub fn run(&self, script: &Script, cues: Vec<Cue>) -> Result<RunResult> {
        let alignments = self.align(script, cues);

        let validator = QualityValidator::from_config(&self.config.quality);
        let quality = validator.validate(&alignments)?;

        let cues = repair(
            script,
            &alignments,
            self.config.repair.span,
            self.config.reflow.max_width,
        );
        let rendered = self.reporter.render(&cues)?;

        Ok(RunResult {
            cues,
            quality,
            rendered,
        })
    }

    /// Full pipeline from files; output goes to `output_path` or stdout
    pub async fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        script_path: P,
        subtitles_path: P,
        output_path: Option<Q>,
    ) -> Result<RunResult> {
        let script = self.load_script(script_path).await?;
        let cues = self.load_cues(subtitles_path).await?;

        let result = self.run(&script, cues)?;

        match output_path {
            Some(path) => {
                let path = path.as_ref();
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).await?;
                }
                fs::write(path, &result.rendered).await?;
                info!(
                    "Wrote {} repaired cues ({}) to {}",
                    result.cues.len(),
                    self.reporter.extension(),
                    path.display()
                );
            }
            None => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(result.rendered.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputFormat, SpanMode};

    const SCRIPT: &str = "[Scene one]\nALICE: Well, the quick brown fox\njumps over the lazy dog.\n\n[Pause]\nBOB: Did it really?";
    const SUBTITLES: &str = "1\n00:00:01,000 --> 00:00:02,000\nthe quikc brown\n\n2\n00:00:02,500 --> 00:00:04,000\nfox jumps ovr\nthe lazy dog\n\n3\n00:00:05,000 --> 00:00:06,000\ndid it realy\n";

    #[tokio::test]
    async fn test_process_writes_srt() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("script.txt");
        let subtitles_path = dir.path().join("subtitles.srt");
        let output_path = dir.path().join("out").join("fixed.srt");
        fs::write(&script_path, SCRIPT).await.unwrap();
        fs::write(&subtitles_path, SUBTITLES).await.unwrap();

        let workflow = Workflow::new(Config::default()).unwrap();
        let result = workflow
            .process(&script_path, &subtitles_path, Some(&output_path))
            .await
            .unwrap();

        assert_eq!(result.quality.matched, 3);
        let written = fs::read_to_string(&output_path).await.unwrap();
        assert_eq!(written, result.rendered);
        assert_eq!(
            written,
            "1\n00:00:01,000 --> 00:00:02,000\nthe quick brown\n\n\
             2\n00:00:02,500 --> 00:00:04,000\nfox jumps over the lazy dog.\n\n\
             3\n00:00:05,000 --> 00:00:06,000\nDid it really?\n\n"
        );
    }

    #[tokio::test]
    async fn test_missing_script_is_reported() {
        let workflow = Workflow::new(Config::default()).unwrap();
        let result = workflow.load_script("/definitely/not/here.txt").await;
        assert!(matches!(result, Err(ScriptSyncError::FileNotFound(_))));
    }

    #[test]
    fn test_run_with_json_and_contiguous_span() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        config.repair.span = SpanMode::Contiguous;
        let workflow = Workflow::new(config).unwrap();

        let script = Script::new("one two three four");
        let cues = parse_srt("00:00:01,000 --> 00:00:02,000\none\n\n00:00:02,000 --> 00:00:03,000\nthree\n").unwrap();
        let result = workflow.run(&script, cues).unwrap();

        let value: serde_json::Value = serde_json::from_str(&result.rendered).unwrap();
        assert_eq!(value[0]["text"], "one two");
        assert_eq!(value[1]["text"], "three four");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.reflow.max_width = 0;
        assert!(Workflow::new(config).is_err());
    }
}
