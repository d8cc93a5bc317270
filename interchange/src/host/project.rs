use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{
    FrameRate, HostClip, HostSequence, HostTag, HostTrack, HostTrackItem, HostTrackKind,
    HostTransition, TransitionAlignment,
};

/// An editing sequence held in memory, loadable from JSON.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct SequenceData {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub frame_rate: FrameRate,
    #[serde(default)]
    pub tracks: Vec<TrackData>,
}

impl SequenceData {
    pub fn new(name: &str, frame_rate: FrameRate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            frame_rate,
            tracks: Vec::new(),
        }
    }

    pub fn load(json_str: &str) -> Result<Self, serde_json::Error> {
        let sequence: SequenceData = serde_json::from_str(json_str)?;

        Ok(sequence)
    }

    pub fn save(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn add_track(&mut self, track: TrackData) {
        self.tracks.push(track);
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TrackData {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub kind: HostTrackKind,
    #[serde(default)]
    pub items: Vec<ItemData>,
}

impl TrackData {
    pub fn new(name: &str, kind: HostTrackKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: ItemData) {
        self.items.push(item);
    }
}

/// One item on a track. `clip` is `None` for items that are not backed
/// by media, such as host-native effect items.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ItemData {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub timeline_in: i64,
    pub timeline_out: i64,
    #[serde(default)]
    pub source_in: i64,
    #[serde(default)]
    pub source_out: i64,
    #[serde(default)]
    pub duration: i64,
    #[serde(default = "default_speed")]
    pub playback_speed: f64,
    #[serde(default)]
    pub clip: Option<ClipData>,
    #[serde(default)]
    pub in_transition: Option<TransitionData>,
    #[serde(default)]
    pub out_transition: Option<TransitionData>,
    #[serde(default)]
    pub tags: Vec<TagData>,
}

const fn default_speed() -> f64 {
    1.0
}

impl ItemData {
    /// New item covering `timeline_in..=timeline_out`, playing its
    /// source from frame 0 at normal speed.
    pub fn new(name: &str, timeline_in: i64, timeline_out: i64) -> Self {
        let duration = timeline_out - timeline_in + 1;
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            timeline_in,
            timeline_out,
            source_in: 0,
            source_out: duration - 1,
            duration,
            playback_speed: 1.0,
            clip: None,
            in_transition: None,
            out_transition: None,
            tags: Vec::new(),
        }
    }
}

/// The media source behind an item.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ClipData {
    pub file_path: String,
    #[serde(default = "default_has_video")]
    pub has_video: bool,
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub media_start: i64,
    #[serde(default)]
    pub media_duration: i64,
    pub frame_rate: FrameRate,
}

const fn default_has_video() -> bool {
    true
}

impl ClipData {
    pub fn new(file_path: &str, frame_rate: FrameRate) -> Self {
        Self {
            file_path: file_path.to_string(),
            has_video: true,
            offline: false,
            media_start: 0,
            media_duration: 0,
            frame_rate,
        }
    }
}

/// A transition in an item's in or out slot. The two neighbor fields
/// are only present on dissolves, where the geometry spans the cut.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TransitionData {
    pub alignment: TransitionAlignment,
    pub timeline_in: i64,
    pub timeline_out: i64,
    #[serde(default)]
    pub inbound_timeline_out: Option<i64>,
    #[serde(default)]
    pub outbound_timeline_in: Option<i64>,
}

impl TransitionData {
    pub fn new(alignment: TransitionAlignment, timeline_in: i64, timeline_out: i64) -> Self {
        Self {
            alignment,
            timeline_in,
            timeline_out,
            inbound_timeline_out: None,
            outbound_timeline_in: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct TagData {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

const fn default_visible() -> bool {
    true
}

impl TagData {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            visible: true,
            properties: Map::new(),
        }
    }
}

impl HostSequence for SequenceData {
    type Track = TrackData;

    fn name(&self) -> &str {
        &self.name
    }

    fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    fn tracks(&self) -> &[TrackData] {
        &self.tracks
    }
}

impl HostTrack for TrackData {
    type Item = ItemData;

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> HostTrackKind {
        self.kind
    }

    fn items(&self) -> &[ItemData] {
        &self.items
    }
}

impl HostTrackItem for ItemData {
    type Clip = ClipData;
    type Transition = TransitionData;
    type Tag = TagData;

    fn name(&self) -> &str {
        &self.name
    }

    fn timeline_in(&self) -> i64 {
        self.timeline_in
    }

    fn timeline_out(&self) -> i64 {
        self.timeline_out
    }

    fn source_in(&self) -> i64 {
        self.source_in
    }

    fn source_out(&self) -> i64 {
        self.source_out
    }

    fn duration(&self) -> i64 {
        self.duration
    }

    fn playback_speed(&self) -> f64 {
        self.playback_speed
    }

    fn clip(&self) -> Option<&ClipData> {
        self.clip.as_ref()
    }

    fn in_transition(&self) -> Option<&TransitionData> {
        self.in_transition.as_ref()
    }

    fn out_transition(&self) -> Option<&TransitionData> {
        self.out_transition.as_ref()
    }

    fn tags(&self) -> &[TagData] {
        &self.tags
    }
}

impl HostClip for ClipData {
    fn has_video(&self) -> bool {
        self.has_video
    }

    fn is_offline(&self) -> bool {
        self.offline
    }

    fn file_path(&self) -> &str {
        &self.file_path
    }

    fn media_start(&self) -> i64 {
        self.media_start
    }

    fn media_duration(&self) -> i64 {
        self.media_duration
    }

    fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }
}

impl HostTransition for TransitionData {
    fn alignment(&self) -> TransitionAlignment {
        self.alignment
    }

    fn timeline_in(&self) -> i64 {
        self.timeline_in
    }

    fn timeline_out(&self) -> i64 {
        self.timeline_out
    }

    fn inbound_timeline_out(&self) -> Option<i64> {
        self.inbound_timeline_out
    }

    fn outbound_timeline_in(&self) -> Option<i64> {
        self.outbound_timeline_in
    }
}

impl HostTag for TagData {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_spans_its_timeline_range() {
        let item = ItemData::new("shot_010", 10, 34);
        assert_eq!(item.duration, 25);
        assert_eq!(item.source_in, 0);
        assert_eq!(item.source_out, 24);
        assert_eq!(item.playback_speed, 1.0);
    }

    #[test]
    fn sequence_round_trips_through_json() {
        let mut sequence = SequenceData::new("edit_v2", FrameRate::new(25, 1));
        let mut track = TrackData::new("Video 1", HostTrackKind::Video);
        let mut item = ItemData::new("shot_010", 0, 9);
        item.clip = Some(ClipData::new("/media/shot_010.mov", FrameRate::new(25, 1)));
        track.add_item(item);
        sequence.add_track(track);

        let json = sequence.save().expect("sequence should serialize");
        let loaded = SequenceData::load(&json).expect("sequence should parse");
        assert_eq!(loaded, sequence);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{
            "name": "bare",
            "frame_rate": { "num": 24, "den": 1 },
            "tracks": [{
                "name": "Video 1",
                "kind": "video",
                "items": [{
                    "name": "shot",
                    "timeline_in": 0,
                    "timeline_out": 9
                }]
            }]
        }"#;

        let sequence = SequenceData::load(json).expect("sequence should parse");
        let item = &sequence.tracks[0].items[0];
        assert_eq!(item.playback_speed, 1.0);
        assert!(item.clip.is_none());
        assert!(item.tags.is_empty());
    }
}
