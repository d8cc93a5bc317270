use serde::{Deserialize, Serialize};

/// A point in time counted as `value` frames at `rate` frames per second.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct RationalTime {
    pub value: f64,
    pub rate: f64,
}

impl RationalTime {
    pub fn new(value: f64, rate: f64) -> Self {
        Self { value, rate }
    }
}

/// A span of time: start plus duration, both at the same rate.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
pub struct TimeRange {
    pub start_time: RationalTime,
    pub duration: RationalTime,
}

impl TimeRange {
    pub fn new(start_time: RationalTime, duration: RationalTime) -> Self {
        Self {
            start_time,
            duration,
        }
    }

    /// Range of `duration` frames starting at `start`, both at `rate`.
    pub fn from_frames(start: f64, duration: f64, rate: f64) -> Self {
        Self {
            start_time: RationalTime::new(start, rate),
            duration: RationalTime::new(duration, rate),
        }
    }

    /// First frame past the end of the range.
    pub fn end_time_exclusive(&self) -> RationalTime {
        RationalTime::new(
            self.start_time.value + self.duration.value,
            self.start_time.rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_frames_carries_rate_into_both_parts() {
        let range = TimeRange::from_frames(10.0, 25.0, 24.0);
        assert_eq!(range.start_time, RationalTime::new(10.0, 24.0));
        assert_eq!(range.duration, RationalTime::new(25.0, 24.0));
    }

    #[test]
    fn end_time_exclusive_is_start_plus_duration() {
        let range = TimeRange::from_frames(10.0, 25.0, 24.0);
        assert_eq!(range.end_time_exclusive(), RationalTime::new(35.0, 24.0));
    }
}
