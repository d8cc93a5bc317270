//! Conversion of a host sequence into an interchange timeline.

pub mod rates;
pub mod ranges;
pub mod transitions;

use std::path::Path;

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::host::{
    FrameRate, HostClip, HostSequence, HostTag, HostTrack, HostTrackItem, HostTrackKind,
};
use crate::model::{
    Clip, Gap, MediaReference, TimeEffect, TimeRange, Timeline, Track, TrackItem, TrackKind,
};

pub use self::rates::resolve_rate;
pub use self::ranges::clip_ranges;
pub use self::transitions::{TransitionPlacement, TranslatedTransition, translate_transitions};

/// Namespace key for host metadata carried on converted clips.
pub const HOST_METADATA_KEY: &str = "host";

/// Conversion switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Copy visible item tags into clip metadata. Off unless asked for.
    pub include_tags: bool,
}

/// Builds an interchange timeline from one host sequence.
pub struct SequenceConverter {
    options: ExportOptions,
}

impl SequenceConverter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Converts the whole sequence, one track at a time.
    pub fn convert<S: HostSequence>(&self, sequence: &S) -> Timeline {
        let mut timeline = Timeline::new(sequence.name());

        for track in sequence.tracks() {
            timeline.add_track(self.convert_track(track, sequence.frame_rate()));
        }

        timeline
    }

    fn convert_track<T: HostTrack>(&self, host_track: &T, sequence_rate: FrameRate) -> Track {
        let kind = match host_track.kind() {
            HostTrackKind::Audio => TrackKind::Audio,
            _ => TrackKind::Video,
        };

        let mut track = Track::new(host_track.name(), kind);
        let mut previous_out: Option<i64> = None;

        for item in host_track.items() {
            let host_clip = match item.clip() {
                Some(host_clip) => host_clip,
                None => continue,
            };

            // The cursor starts on the first clip-backed item: 0 when
            // there is timeline ahead of it to fill, otherwise -1 so an
            // item starting at frame 0 does not read as a gap.
            let prev_out = match previous_out {
                Some(out) => out,
                None => {
                    if item.timeline_in() > 0 {
                        0
                    } else {
                        -1
                    }
                }
            };

            if prev_out + 1 != item.timeline_in() {
                self.add_gap(&mut track, item, prev_out, sequence_rate);
            }

            self.add_clip(&mut track, item, host_clip, sequence_rate);

            previous_out = Some(item.timeline_out());
        }

        debug!(
            "converted track '{}' ({}) with {} children",
            track.name,
            track.kind,
            track.children.len()
        );

        track
    }

    fn add_gap<I>(&self, track: &mut Track, item: &I, prev_out: i64, sequence_rate: FrameRate)
    where
        I: HostTrackItem,
    {
        let mut gap_length = item.timeline_in() - prev_out;
        if prev_out != 0 {
            gap_length -= 1;
        }

        if gap_length < 0 {
            warn!(
                "items overlap ahead of '{}', writing a {}-frame gap as-is",
                item.name(),
                gap_length
            );
        }

        let rate = resolve_rate(sequence_rate);
        let gap = Gap::new(TimeRange::from_frames(0.0, gap_length as f64, rate));
        track.add_child(TrackItem::Gap(gap));
    }

    fn add_clip<I>(
        &self,
        track: &mut Track,
        item: &I,
        host_clip: &I::Clip,
        sequence_rate: FrameRate,
    ) where
        I: HostTrackItem,
    {
        let (source_range, available_range) = clip_ranges(item, host_clip, sequence_rate);

        let mut clip = Clip::new(
            item.name(),
            source_range,
            media_reference(host_clip, available_range),
        );

        let speed = item.playback_speed();
        if speed != 1.0 {
            let effect = if speed == 0.0 {
                TimeEffect::FreezeFrame
            } else {
                TimeEffect::LinearTimeWarp { time_scalar: speed }
            };
            clip.effects.push(effect);
        }

        if self.options.include_tags {
            attach_tags(item, &mut clip);
        }

        track.add_child(TrackItem::Clip(clip));

        if item.in_transition().is_some() || item.out_transition().is_some() {
            self.add_transitions(track, item, host_clip);
        }
    }

    fn add_transitions<I>(&self, track: &mut Track, item: &I, host_clip: &I::Clip)
    where
        I: HostTrackItem,
    {
        // Offsets keep the clip's own float rate, unrounded.
        let rate = host_clip.frame_rate().to_float();

        for translated in translate_transitions(item, rate) {
            match translated.placement {
                TransitionPlacement::PrecedesClip => {
                    // The anchor clip was appended last; the fade-in
                    // goes directly in front of it.
                    let index = track.children.len().saturating_sub(1);
                    track.insert_child(index, TrackItem::Transition(translated.transition));
                }
                TransitionPlacement::FollowsClip => {
                    track.add_child(TrackItem::Transition(translated.transition));
                }
            }
        }
    }
}

/// One-call conversion with the given options.
pub fn convert_sequence<S: HostSequence>(sequence: &S, options: ExportOptions) -> Timeline {
    SequenceConverter::new(options).convert(sequence)
}

fn media_reference<C: HostClip>(
    host_clip: &C,
    available_range: Option<TimeRange>,
) -> MediaReference {
    if host_clip.is_offline() {
        return MediaReference::Missing;
    }

    let path = host_clip.file_path();
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    MediaReference::External {
        target_url: path.to_string(),
        name,
        available_range,
    }
}

fn attach_tags<I: HostTrackItem>(item: &I, clip: &mut Clip) {
    let mut tag_map = Map::new();
    for tag in item.tags().iter().filter(|tag| tag.is_visible()) {
        tag_map.insert(
            tag.name().to_string(),
            Value::Object(tag.properties().clone()),
        );
    }

    if tag_map.is_empty() {
        return;
    }

    let mut namespace = Map::new();
    namespace.insert("tags".to_string(), Value::Object(tag_map));
    clip.metadata
        .insert(HOST_METADATA_KEY.to_string(), Value::Object(namespace));
}
