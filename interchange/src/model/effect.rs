use serde::{Deserialize, Serialize};

/// Retiming applied to a clip.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(tag = "type")]
pub enum TimeEffect {
    /// The clip holds a single source frame for its whole duration.
    FreezeFrame,
    /// Constant-speed retime; `time_scalar` is the playback speed,
    /// negative when the clip plays backwards.
    LinearTimeWarp { time_scalar: f64 },
}
