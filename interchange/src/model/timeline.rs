use serde::{Deserialize, Serialize};

use super::track::Track;

/// A complete interchange document: a named, ordered stack of tracks.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Timeline {
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Timeline {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tracks: Vec::new(),
        }
    }

    pub fn load(json_str: &str) -> Result<Self, serde_json::Error> {
        let timeline: Timeline = serde_json::from_str(json_str)?;

        Ok(timeline)
    }

    pub fn save(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }
}
