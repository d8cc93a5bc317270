use log::debug;

use crate::host::{HostTrackItem, HostTransition, TransitionAlignment};
use crate::model::{RationalTime, Transition, TransitionKind};

/// Where a translated transition sits relative to the clip it was read
/// from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransitionPlacement {
    /// Directly before the anchor clip. Fade-ins reach backwards over
    /// the cut, so they must stay adjacent to their clip even when a
    /// gap precedes it.
    PrecedesClip,
    /// After the anchor clip, at the current end of the track.
    FollowsClip,
}

/// A transition rebuilt as an offset pair, plus where to put it.
#[derive(Clone, PartialEq, Debug)]
pub struct TranslatedTransition {
    pub transition: Transition,
    pub placement: TransitionPlacement,
}

/// Rebuilds the transitions attached to one item.
///
/// The in slot only counts when it holds a fade-in: any other inbound
/// alignment is the previous item's outbound transition and was
/// already handled there. An unknown alignment abandons the item's
/// remaining transitions. `rate` is the clip's unrounded float rate.
pub fn translate_transitions<I>(item: &I, rate: f64) -> Vec<TranslatedTransition>
where
    I: HostTrackItem,
{
    let mut candidates: Vec<&I::Transition> = Vec::new();

    if let Some(transition) = item.in_transition() {
        if transition.alignment() == TransitionAlignment::FadeIn {
            candidates.push(transition);
        }
    }

    if let Some(transition) = item.out_transition() {
        candidates.push(transition);
    }

    let mut translated = Vec::new();

    for transition in candidates {
        let alignment = transition.alignment();

        let (in_frames, out_frames, placement) = match alignment {
            TransitionAlignment::FadeIn => (
                0,
                1 + (transition.timeline_out() - transition.timeline_in()),
                TransitionPlacement::PrecedesClip,
            ),
            TransitionAlignment::FadeOut => (
                1 + (item.timeline_out() - transition.timeline_in()),
                0,
                TransitionPlacement::FollowsClip,
            ),
            TransitionAlignment::Dissolve => {
                match (
                    transition.inbound_timeline_out(),
                    transition.outbound_timeline_in(),
                ) {
                    (Some(inbound_out), Some(outbound_in)) => (
                        inbound_out - transition.timeline_in(),
                        transition.timeline_out() - outbound_in,
                        TransitionPlacement::FollowsClip,
                    ),
                    _ => {
                        debug!(
                            "dissolve on '{}' has no neighbor cut frames, dropping it",
                            item.name()
                        );
                        continue;
                    }
                }
            }
            TransitionAlignment::Unknown => {
                debug!(
                    "unknown transition alignment on '{}', dropping the rest",
                    item.name()
                );
                break;
            }
        };

        translated.push(TranslatedTransition {
            transition: Transition::new(
                alignment.name(),
                TransitionKind::SmpteDissolve,
                RationalTime::new(in_frames as f64, rate),
                RationalTime::new(out_frames as f64, rate),
            ),
            placement,
        });
    }

    translated
}
