use crate::host::{FrameRate, HostClip, HostTrackItem};
use crate::model::TimeRange;

use super::rates::resolve_rate;

/// Source range and, when the media is online, available range for a
/// clip-backed item.
///
/// The rate comes from the clip itself unless it is audio-only, in
/// which case the owning sequence's rate applies. Items playing
/// backwards are trimmed from their source-out instead of source-in.
pub fn clip_ranges<I>(
    item: &I,
    clip: &I::Clip,
    sequence_rate: FrameRate,
) -> (TimeRange, Option<TimeRange>)
where
    I: HostTrackItem,
{
    let rate = if clip.has_video() {
        resolve_rate(clip.frame_rate())
    } else {
        resolve_rate(sequence_rate)
    };

    let start = if item.playback_speed() < 0.0 {
        item.source_out()
    } else {
        item.source_in()
    };

    let source_range = TimeRange::from_frames(start as f64, item.duration() as f64, rate);

    let available_range = if clip.is_offline() {
        None
    } else {
        Some(TimeRange::from_frames(
            clip.media_start() as f64,
            clip.media_duration() as f64,
            rate,
        ))
    };

    (source_range, available_range)
}
