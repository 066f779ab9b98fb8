//! JSON loading into a content store.

use std::io::Write;

use wayfinder_content::loader::parse_entries;
use wayfinder_content::ContentStore;
use wayfinder_core::config::ContentConfig;
use wayfinder_core::errors::ContentError;

#[test]
fn from_json_file_builds_golden_store() {
    let path = test_fixtures::fixture_path(test_fixtures::GUIDANCE_ENTRIES);
    let store = ContentStore::from_json_file(&path).unwrap();
    assert_eq!(store.len(), 7);
}

#[test]
fn from_json_str_rejects_duplicates() {
    let json = test_fixtures::load_fixture_text(test_fixtures::DUPLICATE_IDS);
    assert!(matches!(
        ContentStore::from_json_str(&json),
        Err(ContentError::DuplicateQuestionId { .. })
    ));
}

#[test]
fn malformed_json_reports_parse_error() {
    let err = parse_entries("[{\"questionId\": 42}]", "inline").unwrap_err();
    match err {
        ContentError::ParseError { source_name, .. } => assert_eq!(source_name, "inline"),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = ContentStore::from_json_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ContentError::FileNotFound { .. }));
}

#[test]
fn unreadable_path_reports_read_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = ContentStore::from_json_file(dir.path()).unwrap_err();
    match err {
        ContentError::ReadFailed { path, message } => {
            assert_eq!(path, dir.path().display().to_string());
            assert!(!message.is_empty());
        }
        other => panic!("expected ReadFailed, got {other:?}"),
    }
}

#[test]
fn non_utf8_file_reports_read_failure() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("content.json");
    std::fs::write(&path, [0xff, 0xfe, 0x5b]).unwrap();

    let err = ContentStore::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ContentError::ReadFailed { .. }));
}

#[test]
fn from_config_loads_configured_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("content.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        test_fixtures::load_fixture_text(test_fixtures::GUIDANCE_ENTRIES).as_bytes(),
    )
    .unwrap();

    let config = ContentConfig {
        path: Some(path.display().to_string()),
        audit_on_load: Some(true),
    };
    let store = ContentStore::from_config(&config).unwrap();
    assert!(store.exists("4.1-staff-training"));
}

#[test]
fn from_config_without_path_is_empty() {
    let store = ContentStore::from_config(&ContentConfig::default()).unwrap();
    assert!(store.is_empty());
}
