//! Tests for track metadata loading.

use nowbar::track::{Track, TrackError};
use std::path::Path;

fn write_track(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("track.json");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_a_track_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_track(
        dir.path(),
        r#"{"title": "Song A", "artist": "Artist B", "duration": 180.0}"#,
    );

    let track = Track::from_json_file(&path).unwrap();
    assert_eq!(track.title, "Song A");
    assert_eq!(track.artist, "Artist B");
    assert_eq!(track.duration, 180.0);
}

#[test]
fn missing_file_is_a_read_error() {
    let err = Track::from_json_file(Path::new("/nonexistent/track.json")).unwrap_err();
    assert!(matches!(err, TrackError::Read(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_track(dir.path(), "{not json");

    let err = Track::from_json_file(&path).unwrap_err();
    assert!(matches!(err, TrackError::Parse(_)));
}

#[test]
fn negative_duration_in_a_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_track(dir.path(), r#"{"title": "a", "artist": "b", "duration": -1}"#);

    let err = Track::from_json_file(&path).unwrap_err();
    assert!(matches!(err, TrackError::InvalidDuration(_)));
}

#[test]
fn missing_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_track(dir.path(), r#"{"title": "a"}"#);

    assert!(Track::from_json_file(&path).is_err());
}
