//! Drives the prepare and aggregate subcommands through `run()` against real
//! files in a temp directory.

use std::fs;

use tempfile::tempdir;
use verdict::{ScoreRecord, completion_from_text};
use verdict_cli::{Command, Verdict, run};

fn parse(args: &[&str]) -> Verdict {
    use clap::Parser;
    Verdict::try_parse_from(args).expect("parse CLI args")
}

#[tokio::test]
async fn prepare_command_writes_prompt_file() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("raw.json");
    fs::write(
        &input,
        r#"[{"answer": "The capital is Luoyang.", "label": "ref"}]"#,
    )
    .expect("write input");
    let output = dir.path().join("prepared.json");

    let cli = parse(&[
        "verdict",
        "prepare",
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--field",
        "answer",
    ]);
    assert!(matches!(cli.command, Command::Prepare(_)));

    run(cli).await.expect("prepare run");

    let text = fs::read_to_string(&output).expect("read output");
    assert!(text.contains("Luoyang"));
    assert!(text.contains("\"id\": 1"));
    assert!(text.contains("hallucination"));
}

#[tokio::test]
async fn aggregate_command_writes_summary_csv() {
    let dir = tempdir().expect("tempdir");
    let results_dir = dir.path().join("results");
    fs::create_dir(&results_dir).expect("mkdir");

    let entry = serde_json::to_value(ScoreRecord {
        original_content: "prompt".to_string(),
        inference_result: completion_from_text(
            "mock-judge",
            r#"{"accuracy": 8, "conciseness": 8, "relevance": 8, "completeness": 8, "hallucination": 8}"#,
        ),
        timestamp: "2026-08-06T00:00:00+00:00".to_string(),
    })
    .expect("serialize entry");
    fs::write(
        results_dir.join("run-top2.json"),
        serde_json::to_string_pretty(&vec![entry]).unwrap(),
    )
    .expect("write result file");

    let cli = parse(&["verdict", "aggregate", results_dir.to_str().unwrap()]);
    run(cli).await.expect("aggregate run");

    let csv = fs::read_to_string(results_dir.join("score_summary.csv")).expect("read csv");
    assert!(csv.starts_with("index,file,"));
    assert!(csv.contains("run-top2.json"));
    assert!(csv.contains("8.00"));
}
