//! Serialization tests for the interchange document model.

use serde_json::json;

use interchange::model::{
    Clip, Gap, MediaReference, RationalTime, TimeEffect, TimeRange, Timeline, Track, TrackItem,
    TrackKind, Transition, TransitionKind,
};

/// Helper: a timeline touching every child and reference variant.
fn sample_timeline() -> Timeline {
    let mut timeline = Timeline::new("Conform v3");

    let mut video = Track::new("Video 1", TrackKind::Video);
    video.add_child(TrackItem::Transition(Transition::new(
        "fade_in",
        TransitionKind::SmpteDissolve,
        RationalTime::new(0.0, 24.0),
        RationalTime::new(12.0, 24.0),
    )));

    let mut clip = Clip::new(
        "shot_010",
        TimeRange::from_frames(0.0, 10.0, 24.0),
        MediaReference::External {
            target_url: "/media/shot_010.mov".to_string(),
            name: "shot_010.mov".to_string(),
            available_range: Some(TimeRange::from_frames(0.0, 100.0, 24.0)),
        },
    );
    clip.effects.push(TimeEffect::FreezeFrame);
    clip.metadata
        .insert("host".to_string(), json!({ "tags": {} }));
    video.add_child(TrackItem::Clip(clip));
    video.add_child(TrackItem::Gap(Gap::new(TimeRange::from_frames(
        0.0, 5.0, 24.0,
    ))));
    timeline.add_track(video);

    let mut audio = Track::new("Audio 1", TrackKind::Audio);
    audio.add_child(TrackItem::Clip(Clip::new(
        "dialogue",
        TimeRange::from_frames(0.0, 48.0, 25.0),
        MediaReference::Missing,
    )));
    timeline.add_track(audio);

    timeline
}

#[test]
fn test_timeline_serialization_roundtrip() {
    let timeline = sample_timeline();

    let json = timeline.save().expect("timeline should serialize");
    let loaded = Timeline::load(&json).expect("timeline should parse back");

    assert_eq!(timeline, loaded);
    assert_eq!(loaded.tracks.len(), 2);
    assert_eq!(loaded.tracks[0].children.len(), 3);
}

#[test]
fn test_track_items_tag_their_type() {
    let value = serde_json::to_value(sample_timeline()).expect("timeline should serialize");

    let track = &value["tracks"][0];
    assert_eq!(track["type"], json!("video"));
    assert_eq!(track["children"][0]["type"], json!("transition"));
    assert_eq!(track["children"][1]["type"], json!("clip"));
    assert_eq!(track["children"][2]["type"], json!("gap"));
    assert_eq!(value["tracks"][1]["type"], json!("audio"));
}

#[test]
fn test_transition_kind_serializes_as_interchange_constant() {
    let value = serde_json::to_value(sample_timeline()).expect("timeline should serialize");
    assert_eq!(
        value["tracks"][0]["children"][0]["kind"],
        json!("SMPTE_Dissolve")
    );
}

#[test]
fn test_custom_transition_kind_parses() {
    let kind: TransitionKind =
        serde_json::from_value(json!("Custom_Transition")).expect("custom kind should parse");
    assert_eq!(kind, TransitionKind::Custom);
}

#[test]
fn test_effects_tag_their_type() {
    assert_eq!(
        serde_json::to_value(TimeEffect::FreezeFrame).expect("effect should serialize"),
        json!({ "type": "FreezeFrame" })
    );
    assert_eq!(
        serde_json::to_value(TimeEffect::LinearTimeWarp { time_scalar: -1.0 })
            .expect("effect should serialize"),
        json!({ "type": "LinearTimeWarp", "time_scalar": -1.0 })
    );
}

#[test]
fn test_missing_reference_shape() {
    assert_eq!(
        serde_json::to_value(MediaReference::Missing).expect("reference should serialize"),
        json!({ "type": "Missing" })
    );
}

#[test]
fn test_clip_optional_fields_default_when_absent() {
    let json = r#"{
        "name": "bare",
        "tracks": [{
            "name": "Video 1",
            "type": "video",
            "children": [{
                "type": "clip",
                "name": "shot_010",
                "source_range": {
                    "start_time": { "value": 0.0, "rate": 24.0 },
                    "duration": { "value": 10.0, "rate": 24.0 }
                },
                "media_reference": { "type": "Missing" }
            }]
        }]
    }"#;

    let timeline = Timeline::load(json).expect("minimal timeline should parse");
    let clip = timeline.tracks[0].children[0]
        .as_clip()
        .expect("the one clip");

    assert!(clip.effects.is_empty());
    assert!(clip.metadata.is_empty());
    assert_eq!(clip.source_range.duration.value, 10.0);
}
