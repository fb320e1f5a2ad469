use assert_fs::prelude::*;
use assert_fs::TempDir;

use scriptsync::align::{align, MatchOutcome, MatchWindow, NoMatchReason};
use scriptsync::config::{Config, OutputFormat};
use scriptsync::subtitle::parse_srt;
use scriptsync::text::{reflow, Normalizer};
use scriptsync::workflow::Workflow;

const SCRIPT: &str = "\
[INT. KITCHEN - NIGHT]

MARY: I told you already, the kettle was on the stove.
JOHN: And I told *you* it wasn't mine to watch!

[She slams the cupboard.]

MARY: Then whose was it?
";

const SUBTITLES: &str = "\
1
00:00:01,200 --> 00:00:03,800
i told you allready the kettle
was on the stove

2
00:00:04,000 --> 00:00:06,500
and i told you it wasnt
mine to watch

00:00:07,000 --> 00:00:08,000
then whose was it
";

#[tokio::test]
async fn realigns_noisy_cues_against_script() {
    let temp = TempDir::new().unwrap();
    let script = temp.child("script.txt");
    script.write_str(SCRIPT).unwrap();
    let subtitles = temp.child("episode.srt");
    subtitles.write_str(SUBTITLES).unwrap();
    let output = temp.child("episode.fixed.srt");

    let mut config = Config::default();
    config.reflow.max_width = 32;
    let workflow = Workflow::new(config).unwrap();
    let result = workflow
        .process(script.path(), subtitles.path(), Some(output.path()))
        .await
        .unwrap();

    assert_eq!(result.quality.total, 3);
    assert_eq!(result.quality.skipped, 0);

    let written = std::fs::read_to_string(output.path()).unwrap();
    let repaired = parse_srt(&written).unwrap();
    let texts: Vec<_> = repaired.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "I told you already, the kettle was on the stove.",
            "And I told you it wasn't mine to watch!",
            "Then whose was it?",
        ]
    );
    assert!(written.starts_with("1\n00:00:01,200 --> 00:00:03,800\n"));
    assert!(written.contains("\n3\n00:00:07,000 --> 00:00:08,000\nThen whose was it?\n"));

    for cue in &result.cues {
        assert!(cue.lines.iter().all(|line| line.chars().count() <= 32));
    }

    temp.close().unwrap();
}

#[tokio::test]
async fn json_output_reports_windows() {
    let temp = TempDir::new().unwrap();
    let script = temp.child("script.txt");
    script.write_str("the quick brown fox jumps over the lazy dog").unwrap();
    let subtitles = temp.child("cues.srt");
    subtitles
        .write_str("1\n00:00:00,000 --> 00:00:01,000\nquikc brown fox\n")
        .unwrap();
    let output = temp.child("cues.json");

    let mut config = Config::default();
    config.output.format = OutputFormat::Json;
    let workflow = Workflow::new(config).unwrap();
    workflow
        .process(script.path(), subtitles.path(), Some(output.path()))
        .await
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(value[0]["text"], "quick brown fox");
    assert_eq!(value[0]["window"]["start"], 4);
    assert_eq!(value[0]["window"]["end"], 19);
    assert_eq!(value[0]["window"]["distance"], 2);
}

#[tokio::test]
async fn malformed_timestamp_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    let script = temp.child("script.txt");
    script.write_str("some script text").unwrap();
    let subtitles = temp.child("bad.srt");
    subtitles
        .write_str("1\n00:00:00,000 --> 00:00:xx,000\nsome script\n")
        .unwrap();

    let workflow = Workflow::new(Config::default()).unwrap();
    let result = workflow
        .process(script.path(), subtitles.path(), None::<&std::path::Path>)
        .await;
    assert!(result.is_err());
}

#[test]
fn documented_scenarios() {
    let normalizer = Normalizer::new(&Config::default().normalize).unwrap();
    let script = normalizer.normalize_script("the quick brown fox jumps over the lazy dog");
    let cues = parse_srt(
        "00:00:00,000 --> 00:00:01,000\nquick brown fox\n\n\
         00:00:01,000 --> 00:00:02,000\nthis cue is much longer than what is left\n\n\
         00:00:02,000 --> 00:00:03,000\njumps\n",
    )
    .unwrap();

    let alignments = align(&script, cues);
    assert_eq!(
        alignments[0].outcome,
        MatchOutcome::Matched(MatchWindow { start: 4, end: 19, distance: 0 })
    );
    assert_eq!(alignments[1].outcome, MatchOutcome::NoMatch(NoMatchReason::EmptyWindow));
    // the skipped cue left the cursor at 19
    assert_eq!(alignments[2].window().unwrap().start, 20);

    assert_eq!(reflow("the quick brown fox", 10), vec!["the quick", "brown fox"]);
}
