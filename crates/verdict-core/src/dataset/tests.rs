use super::*;
use serde_json::json;
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn read_records_requires_array() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "single.json", r#"{"content": "hello"}"#);

    let err = read_records(&path).unwrap_err();
    assert!(matches!(err, DatasetError::NotAnArray { .. }));
}

#[test]
fn read_records_lenient_wraps_single_object() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "single.json", r#"{"content": "hello"}"#);

    let records = read_records_lenient(&path).expect("lenient read");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field_str("content"), Some("hello"));
}

#[test]
fn unknown_fields_survive_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "records.json",
        r#"[{"content": "q1", "label": "gold", "retrieved": [1, 2]}]"#,
    );

    let mut records = read_records(&path).expect("read");
    records[0].id = Some(1);

    let out = dir.path().join("out.json");
    write_records(&out, &records).expect("write");

    let rereads = read_records(&out).expect("reread");
    assert_eq!(rereads[0].id, Some(1));
    assert_eq!(rereads[0].extra.get("label"), Some(&json!("gold")));
    assert_eq!(rereads[0].extra.get("retrieved"), Some(&json!([1, 2])));
}

#[test]
fn empty_array_round_trips() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "empty.json", "[]");

    let records = read_records(&path).expect("read empty");
    assert!(records.is_empty());

    let out = dir.path().join("out.json");
    write_records(&out, &records).expect("write empty");
    assert_eq!(fs::read_to_string(&out).expect("read back").trim(), "[]");
}

#[test]
fn write_records_creates_parent_dirs() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("nested/deeper/out.json");

    write_records(&out, &[]).expect("write with parents");
    assert!(out.exists());
}

#[test]
fn field_str_only_matches_strings() {
    let record = Record {
        id: None,
        content: Some(json!(42)),
        extra: serde_json::Map::new(),
    };
    assert_eq!(record.field_str("content"), None);

    let mut extra = serde_json::Map::new();
    extra.insert("answer".to_string(), json!("text"));
    let record = Record {
        id: None,
        content: None,
        extra,
    };
    assert_eq!(record.field_str("answer"), Some("text"));
    assert_eq!(record.field_str("missing"), None);
}

#[test]
fn json_files_in_is_sorted_and_filtered() {
    let dir = tempdir().expect("tempdir");
    write_file(dir.path(), "b.json", "[]");
    write_file(dir.path(), "a.json", "[]");
    write_file(dir.path(), "c.JSON", "[]");
    write_file(dir.path(), "notes.txt", "ignored");
    fs::create_dir(dir.path().join("sub.json")).expect("mkdir");

    let files = json_files_in(dir.path()).expect("list");
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.json", "b.json", "c.JSON"]);
}

#[test]
fn json_files_in_rejects_files() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "a.json", "[]");

    let err = json_files_in(&path).unwrap_err();
    assert!(matches!(err, DatasetError::NotADirectory { .. }));
}

#[test]
fn non_ascii_content_is_not_escaped() {
    let dir = tempdir().expect("tempdir");
    let record = Record {
        id: Some(1),
        content: Some(json!("三国志")),
        extra: serde_json::Map::new(),
    };

    let out = dir.path().join("out.json");
    write_records(&out, &[record]).expect("write");

    let text = fs::read_to_string(&out).expect("read back");
    assert!(text.contains("三国志"));
    assert!(!text.contains("\\u"));
}
