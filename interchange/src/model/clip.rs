use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::effect::TimeEffect;
use super::time::TimeRange;

/// Where a clip's frames come from.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "type")]
pub enum MediaReference {
    External {
        target_url: String,
        name: String,
        #[serde(default)]
        available_range: Option<TimeRange>,
    },
    /// Media the host knows about but cannot reach right now.
    Missing,
}

/// A piece of media placed on a track.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Clip {
    pub name: String,
    pub source_range: TimeRange,
    pub media_reference: MediaReference,
    #[serde(default)]
    pub effects: Vec<TimeEffect>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Clip {
    pub fn new(name: &str, source_range: TimeRange, media_reference: MediaReference) -> Self {
        Self {
            name: name.to_string(),
            source_range,
            media_reference,
            effects: Vec::new(),
            metadata: Map::new(),
        }
    }
}
