use super::*;
use std::fs;
use tempfile::tempdir;

fn row(file: &str, accuracy: f64) -> AccuracyRow {
    AccuracyRow {
        file: file.to_string(),
        accuracy,
        samples: 500,
    }
}

#[test]
fn parse_label_extracts_model_and_top_k() {
    assert_eq!(parse_label("8b-top4-res.json"), Some(("8b".to_string(), 4)));
    assert_eq!(parse_label("4b-top1"), Some(("4b".to_string(), 1)));
    assert_eq!(
        parse_label("bge-m3-top5-res-api.json"),
        Some(("bge-m3".to_string(), 5))
    );
    assert_eq!(parse_label("qwen-top12"), Some(("qwen".to_string(), 12)));
}

#[test]
fn parse_label_rejects_unmarked_names() {
    assert_eq!(parse_label("baseline.json"), None);
    assert_eq!(parse_label("model-topless.json"), None);
    assert_eq!(parse_label("-top3"), None);
}

#[test]
fn parse_label_skips_false_markers() {
    // first "-top" is not followed by digits; the real marker comes later
    assert_eq!(
        parse_label("x-topless-top2.json"),
        Some(("x-topless".to_string(), 2))
    );
    assert_eq!(
        parse_label("laptop-rag-top3.json"),
        Some(("laptop-rag".to_string(), 3))
    );
}

#[test]
fn from_rows_groups_by_model() {
    let table = AccuracyTable::from_rows(vec![
        row("8b-top1", 72.0),
        row("8b-top3", 80.5),
        row("4b-top1", 64.0),
        row("4b-top3", 71.0),
    ])
    .expect("table");

    assert_eq!(table.model_count(), 2);
    assert_eq!(table.top_ks(), vec![1, 3]);
    assert_eq!(table.accuracy("8b", 3), Some(80.5));
    assert_eq!(table.accuracy("4b", 1), Some(64.0));
    assert_eq!(table.accuracy("4b", 5), None);

    let models: Vec<&str> = table.models().collect();
    assert_eq!(models, vec!["4b", "8b"]);
}

#[test]
fn from_rows_rejects_empty_input() {
    let err = AccuracyTable::from_rows(Vec::new()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyTable));
}

#[test]
fn from_rows_rejects_unmarked_labels() {
    let err = AccuracyTable::from_rows(vec![row("nomarker.json", 50.0)]).unwrap_err();
    assert!(matches!(err, ChartError::BadLabel { .. }));
}

#[test]
fn accuracy_bounds_span_the_table() {
    let table = AccuracyTable::from_rows(vec![
        row("8b-top1", 62.5),
        row("8b-top5", 88.0),
        row("4b-top1", 55.0),
    ])
    .expect("table");

    assert_eq!(table.accuracy_bounds(), (55.0, 88.0));
}

#[test]
fn rename_models_changes_series_keys() {
    let mut table = AccuracyTable::from_rows(vec![row("8b-top1", 70.0), row("4b-top1", 60.0)])
        .expect("table");

    table.rename_models(&[
        ("8b".to_string(), "qwen3-embedding-8B".to_string()),
        ("missing".to_string(), "ignored".to_string()),
    ]);

    assert_eq!(table.accuracy("qwen3-embedding-8B", 1), Some(70.0));
    assert_eq!(table.accuracy("8b", 1), None);
    assert_eq!(table.accuracy("4b", 1), Some(60.0));
}

#[test]
fn from_csv_reads_headers() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("accuracy.csv");
    fs::write(
        &path,
        "file,accuracy,samples\n8b-top1-res.json,72.5,500\n8b-top3-res.json,81.0,500\n",
    )
    .expect("write csv");

    let table = AccuracyTable::from_csv(&path).expect("load");
    assert_eq!(table.accuracy("8b", 1), Some(72.5));
    assert_eq!(table.accuracy("8b", 3), Some(81.0));
}

#[test]
fn from_csv_rejects_missing_columns() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("accuracy.csv");
    fs::write(&path, "name,value\nx,1\n").expect("write csv");

    let err = AccuracyTable::from_csv(&path).unwrap_err();
    assert!(matches!(err, ChartError::Csv { .. }));
}

#[test]
fn missing_combinations_leave_gaps() {
    let table = AccuracyTable::from_rows(vec![
        row("8b-top1", 70.0),
        row("8b-top5", 85.0),
        row("4b-top1", 60.0),
    ])
    .expect("table");

    // top_ks is the union; 4b simply has no top5 measurement
    assert_eq!(table.top_ks(), vec![1, 5]);
    assert_eq!(table.accuracy("4b", 5), None);
    assert_eq!(table.points("4b").map(|p| p.len()), Some(1));
}
