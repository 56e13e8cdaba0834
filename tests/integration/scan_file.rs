//! Loading upstream scan snapshots from disk

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use body_scan_results::models::{Config, Grade, ScanFileError, ScanSnapshot};
use body_scan_results::ui::{ScanResultsApp, ScanStore};

use crate::common::{logging, render_app, screen_contains};

fn write_snapshot(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write snapshot");
    file
}

#[test]
fn test_app_displays_snapshot_instead_of_demo() {
    logging::init_test_logging();
    logging::log_test_step("Write snapshot file");
    let file = write_snapshot(
        r#"{
            "measurements": [
                {"name": "Thigh", "value": 58.25, "unit": "cm", "confidence": 0.7, "grade": "P1"},
                {"name": "Calf", "value": 37.0, "unit": "cm", "confidence": 0.95, "grade": "P0"}
            ],
            "calibration": {"scaleFactor": 0.98765}
        }"#,
    );
    let config = Config {
        scan_results_path: Some(file.path().to_path_buf()),
        show_confidences: true,
        ..Config::default()
    };

    logging::log_test_step("Load snapshot into the app");
    let mut app = ScanResultsApp::new(&config).unwrap();
    assert_eq!(app.store.measurements().len(), 2);
    assert_eq!(app.store.measurements()[0].grade, Grade::P1);

    let lines = render_app(&mut app, 100, 30);
    assert!(screen_contains(&lines, "2 measurements captured"));
    assert!(screen_contains(&lines, "Scale: 0.9877"));
    assert!(screen_contains(&lines, "Thigh"));
    assert!(screen_contains(&lines, "58.3 cm"));
    assert!(screen_contains(&lines, "37.0 cm"));
    assert!(screen_contains(&lines, "Confidence: 70% • P1"));
    assert!(!screen_contains(&lines, "Chest"));
}

#[test]
fn test_empty_snapshot_falls_back_to_demo() {
    let file = write_snapshot(r#"{"measurements": [], "calibration": null}"#);
    let config = Config {
        scan_results_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };

    let app = ScanResultsApp::new(&config).unwrap();
    assert_eq!(app.store.measurements().len(), 10);
    assert!(app.store.calibration().is_none());
}

#[test]
fn test_malformed_snapshot_is_rejected() {
    logging::init_test_logging();
    logging::log_test_step("Parse snapshot missing required fields");
    let file = write_snapshot(r#"{"measurements": [{"name": "Chest"}]}"#);

    assert_matches!(
        ScanSnapshot::from_json_file(file.path()),
        Err(ScanFileError::Parse { .. })
    );

    let config = Config {
        scan_results_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    assert!(ScanResultsApp::new(&config).is_err());
}

#[test]
fn test_missing_snapshot_reports_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.json");

    assert_matches!(ScanSnapshot::from_json_file(&missing), Err(ScanFileError::Io { .. }));
}
