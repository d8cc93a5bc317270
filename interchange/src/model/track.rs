use serde::{Deserialize, Serialize};

use super::clip::Clip;
use super::time::TimeRange;
use super::transition::Transition;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")] // Serialize as "video" / "audio".
pub enum TrackKind {
    Video,
    Audio,
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrackKind::Video => "video",
            TrackKind::Audio => "audio",
        };
        write!(f, "{}", s)
    }
}

/// Filler occupying timeline space with no media behind it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Gap {
    pub source_range: TimeRange,
}

impl Gap {
    pub fn new(source_range: TimeRange) -> Self {
        Self { source_range }
    }
}

/// One element of a track's child list.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TrackItem {
    Clip(Clip),
    Gap(Gap),
    Transition(Transition),
}

impl TrackItem {
    pub fn as_clip(&self) -> Option<&Clip> {
        match self {
            TrackItem::Clip(clip) => Some(clip),
            _ => None,
        }
    }

    pub fn as_gap(&self) -> Option<&Gap> {
        match self {
            TrackItem::Gap(gap) => Some(gap),
            _ => None,
        }
    }

    pub fn as_transition(&self) -> Option<&Transition> {
        match self {
            TrackItem::Transition(transition) => Some(transition),
            _ => None,
        }
    }
}

/// An ordered lane of clips, gaps and transitions.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Track {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TrackKind,
    #[serde(default)]
    pub children: Vec<TrackItem>,
}

impl Track {
    pub fn new(name: &str, kind: TrackKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            children: Vec::new(),
        }
    }

    /// Append a child at the end of the track.
    pub fn add_child(&mut self, child: TrackItem) {
        self.children.push(child);
    }

    /// Insert a child at a specific index (appends when out of range).
    pub fn insert_child(&mut self, index: usize, child: TrackItem) {
        if index <= self.children.len() {
            self.children.insert(index, child);
        } else {
            self.children.push(child);
        }
    }

    /// Clips on this track, in order.
    pub fn clips(&self) -> impl Iterator<Item = &Clip> {
        self.children.iter().filter_map(TrackItem::as_clip)
    }
}
