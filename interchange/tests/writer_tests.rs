//! Tests for the filesystem write adapter.

use std::fs;

use interchange::error::InterchangeError;
use interchange::model::{Clip, MediaReference, TimeRange, Timeline, Track, TrackItem, TrackKind};
use interchange::writer::write_timeline_file;

/// Helper: a small timeline with a single clip.
fn sample_timeline() -> Timeline {
    let mut timeline = Timeline::new("Conform v3");
    let mut track = Track::new("Video 1", TrackKind::Video);
    track.add_child(TrackItem::Clip(Clip::new(
        "shot_010",
        TimeRange::from_frames(0.0, 10.0, 24.0),
        MediaReference::Missing,
    )));
    timeline.add_track(track);
    timeline
}

#[test]
fn test_write_appends_the_extension() {
    let dir = tempfile::tempdir().expect("temp dir");

    let written = write_timeline_file(&sample_timeline(), &dir.path().join("cut"))
        .expect("write should succeed");

    assert_eq!(written, dir.path().join("cut.timeline"));

    let json = fs::read_to_string(&written).expect("written file is readable");
    let loaded = Timeline::load(&json).expect("written file parses back");
    assert_eq!(loaded, sample_timeline());
}

#[test]
fn test_existing_extension_is_kept_case_insensitively() {
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("cut.TIMELINE");

    let written = write_timeline_file(&sample_timeline(), &target).expect("write should succeed");

    assert_eq!(written, target);
}

#[test]
fn test_foreign_extension_is_appended_to() {
    let dir = tempfile::tempdir().expect("temp dir");

    let written = write_timeline_file(&sample_timeline(), &dir.path().join("cut.v2"))
        .expect("write should succeed");

    assert_eq!(written, dir.path().join("cut.v2.timeline"));
}

#[test]
fn test_write_failure_reports_the_attempted_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let target = dir.path().join("no_such_dir").join("cut");

    let err = write_timeline_file(&sample_timeline(), &target)
        .expect_err("missing directory should fail the write");

    match err {
        InterchangeError::Write { path, source } => {
            assert_eq!(path, dir.path().join("no_such_dir").join("cut.timeline"));
            assert!(matches!(*source, InterchangeError::Io(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}
