//! Read-only view onto the host application's sequence objects.
//!
//! Conversion never mutates host data and only needs a handful of
//! accessors per object, so the host is modeled as narrow capability
//! traits. `project` provides the in-memory implementation used by the
//! command line and by tests.

pub mod project;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use project::{ClipData, ItemData, SequenceData, TagData, TrackData, TransitionData};

/// A frame rate exactly as the host reports it, numerator over
/// denominator.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameRate {
    pub num: i64,
    pub den: i64,
}

impl FrameRate {
    pub fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// The host's floating-point view of this rate.
    pub fn to_float(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")] // Serialize as "video", "audio", "subtitle".
pub enum HostTrackKind {
    Video,
    Audio,
    Subtitle,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum TransitionAlignment {
    FadeIn,
    FadeOut,
    Dissolve,
    Unknown,
}

impl TransitionAlignment {
    /// Name carried over onto the generated transition object.
    pub fn name(&self) -> &'static str {
        match self {
            TransitionAlignment::FadeIn => "fade_in",
            TransitionAlignment::FadeOut => "fade_out",
            TransitionAlignment::Dissolve => "dissolve",
            TransitionAlignment::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TransitionAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A host sequence: the unit handed to conversion.
pub trait HostSequence {
    type Track: HostTrack;

    fn name(&self) -> &str;
    fn frame_rate(&self) -> FrameRate;
    fn tracks(&self) -> &[Self::Track];
}

/// One lane of the host sequence.
pub trait HostTrack {
    type Item: HostTrackItem;

    fn name(&self) -> &str;
    fn kind(&self) -> HostTrackKind;
    fn items(&self) -> &[Self::Item];
}

/// An item placed on a host track.
///
/// Timeline and source positions are inclusive frame numbers. Items
/// without an underlying clip (host-native effect items and the like)
/// return `None` from [`clip`](HostTrackItem::clip) and take no part in
/// conversion.
pub trait HostTrackItem {
    type Clip: HostClip;
    type Transition: HostTransition;
    type Tag: HostTag;

    fn name(&self) -> &str;
    fn timeline_in(&self) -> i64;
    fn timeline_out(&self) -> i64;
    fn source_in(&self) -> i64;
    fn source_out(&self) -> i64;
    fn duration(&self) -> i64;
    /// Playback speed; negative means the item plays backwards.
    fn playback_speed(&self) -> f64;
    fn clip(&self) -> Option<&Self::Clip>;
    fn in_transition(&self) -> Option<&Self::Transition>;
    fn out_transition(&self) -> Option<&Self::Transition>;
    fn tags(&self) -> &[Self::Tag];
}

/// The media behind a clip-backed item.
pub trait HostClip {
    fn has_video(&self) -> bool;
    fn is_offline(&self) -> bool;
    fn file_path(&self) -> &str;
    fn media_start(&self) -> i64;
    fn media_duration(&self) -> i64;
    fn frame_rate(&self) -> FrameRate;
}

/// A transition attached to a host item's in or out slot.
pub trait HostTransition {
    fn alignment(&self) -> TransitionAlignment;
    fn timeline_in(&self) -> i64;
    fn timeline_out(&self) -> i64;
    /// Timeline-out of the clip the transition blends from. Only
    /// dissolves carry this.
    fn inbound_timeline_out(&self) -> Option<i64>;
    /// Timeline-in of the clip the transition blends into. Only
    /// dissolves carry this.
    fn outbound_timeline_in(&self) -> Option<i64>;
}

/// A tag the host has attached to an item.
pub trait HostTag {
    fn name(&self) -> &str;
    fn is_visible(&self) -> bool;
    fn properties(&self) -> &Map<String, Value>;
}
