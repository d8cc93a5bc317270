use serde::{Deserialize, Serialize};

use super::time::RationalTime;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransitionKind {
    #[serde(rename = "SMPTE_Dissolve")]
    SmpteDissolve,
    #[serde(rename = "Custom_Transition")]
    Custom,
}

/// A cross-fade between the two items on either side of a cut.
///
/// A transition owns no time on its track; the offsets say how far the
/// effect reaches into the neighboring items.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transition {
    pub name: String,
    pub kind: TransitionKind,
    pub in_offset: RationalTime,
    pub out_offset: RationalTime,
}

impl Transition {
    pub fn new(
        name: &str,
        kind: TransitionKind,
        in_offset: RationalTime,
        out_offset: RationalTime,
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            in_offset,
            out_offset,
        }
    }
}
