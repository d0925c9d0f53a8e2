use super::*;

use shared::{domain::ThreadKind, error::ModelError};

const TOML_THREAD: &str = r#"
kind = "group"

[[messages]]
id = 1
timestamp = 1710072000000
is_outgoing = false
sender = "+15550100"
body = "lunch?"

[[messages]]
id = 2
timestamp = 1710072005000
is_outgoing = true
sender = "me"
attachments = ["thumbnail"]
"#;

#[test]
fn detects_format_from_extension() {
    assert_eq!(
        TranscriptFormat::from_path(Path::new("thread.TOML")),
        TranscriptFormat::Toml
    );
    assert_eq!(
        TranscriptFormat::from_path(Path::new("thread.json")),
        TranscriptFormat::Json
    );
    assert_eq!(
        TranscriptFormat::from_path(Path::new("thread")),
        TranscriptFormat::Json
    );
}

#[test]
fn parses_toml_transcript() {
    let thread = parse_thread(TOML_THREAD, TranscriptFormat::Toml).expect("thread");
    assert_eq!(thread.kind, ThreadKind::Group);
    assert_eq!(thread.messages.len(), 2);
    assert_eq!(thread.messages[0].body, "lunch?");
    assert!(thread.messages[1].is_outgoing);
}

#[test]
fn parses_json_transcript_with_default_kind() {
    let raw = r#"{"messages": [{"id": 1, "timestamp": 5, "is_outgoing": true, "sender": "me"}]}"#;
    let thread = parse_thread(raw, TranscriptFormat::Json).expect("thread");
    assert_eq!(thread.kind, ThreadKind::Direct);
}

#[test]
fn surfaces_validation_errors() {
    let raw = r#"{"kind": "direct", "messages": [
        {"id": 1, "timestamp": 50, "is_outgoing": true, "sender": "me"},
        {"id": 2, "timestamp": 10, "is_outgoing": false, "sender": "peer"}
    ]}"#;
    let err = parse_thread(raw, TranscriptFormat::Json).expect_err("out of order");
    let model = err.downcast_ref::<ModelError>().expect("model error in chain");
    assert!(matches!(model, ModelError::OutOfOrder { .. }));
}

#[test]
fn rejects_malformed_input() {
    assert!(parse_thread("kind = ", TranscriptFormat::Toml).is_err());
    assert!(parse_thread("{", TranscriptFormat::Json).is_err());
}

#[test]
fn load_reports_missing_file() {
    let err = load_thread(Path::new("/nonexistent/thread.json")).expect_err("missing");
    assert!(err.to_string().contains("/nonexistent/thread.json"));
}

#[test]
fn bundled_sample_parses() {
    let raw = include_str!("../../sample_thread.toml");
    let thread = parse_thread(raw, TranscriptFormat::Toml).expect("sample thread");
    assert_eq!(thread.kind, ThreadKind::Group);
    assert!(thread.messages.iter().any(|m| m.is_update));
}
