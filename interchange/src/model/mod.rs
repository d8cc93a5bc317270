pub mod clip;
pub mod effect;
pub mod time;
pub mod timeline;
pub mod track;
pub mod transition;

pub use clip::{Clip, MediaReference};
pub use effect::TimeEffect;
pub use time::{RationalTime, TimeRange};
pub use timeline::Timeline;
pub use track::{Gap, Track, TrackItem, TrackKind};
pub use transition::{Transition, TransitionKind};
