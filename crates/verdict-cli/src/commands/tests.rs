use super::*;
use clap::{CommandFactory, Parser};

#[test]
fn cli_definition_is_consistent() {
    Verdict::command().debug_assert();
}

#[test]
fn parse_rename_splits_on_equals() {
    assert_eq!(
        parse_rename("8b=qwen3-embedding-8B"),
        Ok(("8b".to_string(), "qwen3-embedding-8B".to_string()))
    );
    assert_eq!(
        parse_rename(" bge-m3 = BGE M3 "),
        Ok(("bge-m3".to_string(), "BGE M3".to_string()))
    );
}

#[test]
fn parse_rename_rejects_malformed_pairs() {
    assert!(parse_rename("no-equals").is_err());
    assert!(parse_rename("=new").is_err());
    assert!(parse_rename("old=").is_err());
}

#[test]
fn score_flags_parse() {
    let cli = Verdict::try_parse_from([
        "verdict",
        "score",
        "prepared.json",
        "results.json",
        "--model",
        "deepseek-chat",
        "--concurrency",
        "16",
    ])
    .expect("parse");

    let Command::Score(args) = cli.command else {
        panic!("expected score subcommand");
    };
    assert_eq!(args.model.as_deref(), Some("deepseek-chat"));
    assert_eq!(args.concurrency, Some(16));
    assert!(args.system_prompt.is_none());
}

#[test]
fn chart_renames_parse_repeatedly() {
    let cli = Verdict::try_parse_from([
        "verdict",
        "chart",
        "accuracy.csv",
        "--rename",
        "8b=qwen3-embedding-8B",
        "--rename",
        "4b=qwen3-embedding-4B",
    ])
    .expect("parse");

    let Command::Chart(args) = cli.command else {
        panic!("expected chart subcommand");
    };
    assert_eq!(args.renames.len(), 2);
    assert_eq!(args.out_dir, PathBuf::from("charts"));
}
