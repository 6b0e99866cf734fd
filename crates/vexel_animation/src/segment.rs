//! Animation segments
//!
//! A segment is one timed unit of animation on a property: a start delay,
//! a duration, an optional number of repeats, an easing curve and the
//! keyframes it plays. Times are unsigned integers, milliseconds by
//! convention.

use crate::easing::Easing;
use crate::error::AnimationError;
use crate::evaluator::Animatable;
use crate::keyframe::{Keyframe, KeyframeSet};
use std::cmp::Ordering;
use vexel_paint::{Color, PathData};

/// Default segment duration in milliseconds
pub const DEFAULT_DURATION_MS: u64 = 300;

/// How many times a segment repeats after its first run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RepeatCount {
    /// Repeat a fixed number of times (0 = play once)
    Count(u32),
    Infinite,
}

impl Default for RepeatCount {
    fn default() -> Self {
        RepeatCount::Count(0)
    }
}

/// What a repeating segment does when it reaches its end
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RepeatMode {
    /// Every cycle plays forward
    #[default]
    Restart,
    /// Odd-numbered cycles play backward
    Reverse,
}

/// Length of a segment or a whole property timeline
///
/// `Infinite` orders after every finite duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TotalDuration {
    Finite(u64),
    Infinite,
}

impl TotalDuration {
    pub fn is_infinite(self) -> bool {
        self == TotalDuration::Infinite
    }

    /// Finite length, or `None` for an endless timeline
    pub fn finite(self) -> Option<u64> {
        match self {
            TotalDuration::Finite(ms) => Some(ms),
            TotalDuration::Infinite => None,
        }
    }
}

impl Default for TotalDuration {
    fn default() -> Self {
        TotalDuration::Finite(0)
    }
}

/// Timing configuration of a segment
///
/// Defaults: no delay, 300ms, played once, restart mode, linear easing.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmentConfig {
    /// Delay before the segment starts (ms)
    pub start_delay: u64,
    /// Length of one cycle (ms); 0 snaps straight to the end value
    pub duration: u64,
    pub repeat_count: RepeatCount,
    pub repeat_mode: RepeatMode,
    /// Easing applied to the whole cycle
    #[cfg_attr(feature = "serde", serde(skip))]
    pub easing: Easing,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            start_delay: 0,
            duration: DEFAULT_DURATION_MS,
            repeat_count: RepeatCount::Count(0),
            repeat_mode: RepeatMode::Restart,
            easing: Easing::Linear,
        }
    }
}

/// One timed animation unit
#[derive(Clone, Debug)]
pub struct AnimationSegment<V: Animatable> {
    start_delay: u64,
    duration: u64,
    repeat_count: RepeatCount,
    repeat_mode: RepeatMode,
    easing: Easing,
    total_duration: TotalDuration,
    keyframes: KeyframeSet<V>,
}

impl<V: Animatable> AnimationSegment<V> {
    /// Create a segment from its timing and keyframes
    ///
    /// Fails when `duration * (repeat_count + 1) + start_delay` does not fit
    /// in a u64.
    pub fn new(config: SegmentConfig, keyframes: KeyframeSet<V>) -> Result<Self, AnimationError> {
        let total_duration = match config.repeat_count {
            RepeatCount::Infinite => TotalDuration::Infinite,
            RepeatCount::Count(repeats) => config
                .duration
                .checked_mul(u64::from(repeats) + 1)
                .and_then(|active| active.checked_add(config.start_delay))
                .map(TotalDuration::Finite)
                .ok_or_else(|| {
                    let err = AnimationError::DurationOverflow {
                        duration: config.duration,
                        repeat_count: repeats,
                    };
                    tracing::warn!(%err, "rejected animation segment");
                    err
                })?,
        };

        Ok(Self {
            start_delay: config.start_delay,
            duration: config.duration,
            repeat_count: config.repeat_count,
            repeat_mode: config.repeat_mode,
            easing: config.easing,
            total_duration,
            keyframes,
        })
    }

    /// Animate from `start` to `end`
    pub fn between(start: V, end: V, config: SegmentConfig) -> Result<Self, AnimationError> {
        Self::new(config, KeyframeSet::of_values([start, end])?)
    }

    /// Animate through explicit keyframes
    pub fn of_keyframes(
        keyframes: Vec<Keyframe<V>>,
        config: SegmentConfig,
    ) -> Result<Self, AnimationError> {
        Self::new(config, KeyframeSet::of_keyframes(keyframes)?)
    }

    /// A zero-duration segment that always yields `value`
    pub fn fixed(value: V) -> Self {
        Self {
            start_delay: 0,
            duration: 0,
            repeat_count: RepeatCount::Count(0),
            repeat_mode: RepeatMode::Restart,
            easing: Easing::Linear,
            total_duration: TotalDuration::Finite(0),
            keyframes: KeyframeSet::constant(value),
        }
    }

    pub fn start_delay(&self) -> u64 {
        self.start_delay
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn repeat_count(&self) -> RepeatCount {
        self.repeat_count
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Start delay plus every cycle, or `Infinite` for endless repeats
    pub fn total_duration(&self) -> TotalDuration {
        self.total_duration
    }

    pub fn keyframes(&self) -> &KeyframeSet<V> {
        &self.keyframes
    }

    /// Whether `play_time` falls inside `[start_delay, start_delay + total_duration]`
    pub fn contains(&self, play_time: u64) -> bool {
        if play_time < self.start_delay {
            return false;
        }
        match self.total_duration {
            TotalDuration::Infinite => true,
            TotalDuration::Finite(total) => play_time <= self.start_delay.saturating_add(total),
        }
    }

    /// Progress through the current cycle at `play_time`, before easing
    ///
    /// Cycles are counted from the start delay without clamping: before the
    /// delay the count is negative, and past the last repeat the segment keeps
    /// cycling. Landing exactly on a cycle boundary reports the completed
    /// cycle at 1.0 rather than the next one at 0.0. Odd cycles of a reversing
    /// segment run from 1.0 back to 0.0 while they are within the repeat count.
    pub fn linear_fraction(&self, play_time: u64) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }

        // i128 holds the difference of any two u64 times
        let elapsed = i128::from(play_time) - i128::from(self.start_delay);
        let duration = i128::from(self.duration);
        let mut iteration = elapsed.div_euclid(duration);
        let remainder = elapsed.rem_euclid(duration);
        let mut fraction = if remainder == 0 && elapsed > 0 {
            iteration -= 1;
            1.0
        } else {
            remainder as f64 / duration as f64
        };

        let within_repeats = match self.repeat_count {
            RepeatCount::Infinite => true,
            RepeatCount::Count(repeats) => iteration < i128::from(repeats) + 1,
        };
        if iteration > 0
            && self.repeat_mode == RepeatMode::Reverse
            && within_repeats
            && iteration % 2 == 1
        {
            fraction = 1.0 - fraction;
        }

        fraction as f32
    }

    /// Progress at `play_time` with the segment easing applied
    pub fn eased_fraction(&self, play_time: u64) -> f32 {
        self.easing.apply(self.linear_fraction(play_time))
    }

    /// Value for an already eased fraction
    pub fn animated_value(&mut self, fraction: f32) -> &V {
        self.keyframes.value_at(fraction)
    }

    /// Value at a global play time
    pub fn value_at_time(&mut self, play_time: u64) -> &V {
        let fraction = self.eased_fraction(play_time);
        self.animated_value(fraction)
    }
}

impl AnimationSegment<f32> {
    pub fn of_float(start: f32, end: f32, config: SegmentConfig) -> Result<Self, AnimationError> {
        Self::between(start, end, config)
    }
}

impl AnimationSegment<Color> {
    /// Gamma-correct color animation
    pub fn of_argb(
        start: Color,
        end: Color,
        config: SegmentConfig,
    ) -> Result<Self, AnimationError> {
        Self::between(start, end, config)
    }
}

impl AnimationSegment<Vec<f32>> {
    /// Fails when the arrays differ in length
    pub fn of_float_array(
        start: Vec<f32>,
        end: Vec<f32>,
        config: SegmentConfig,
    ) -> Result<Self, AnimationError> {
        Self::between(start, end, config)
    }
}

impl AnimationSegment<PathData> {
    /// Fails when the two paths have different topologies
    pub fn of_path_morph(
        start: PathData,
        end: PathData,
        config: SegmentConfig,
    ) -> Result<Self, AnimationError> {
        Self::between(start, end, config)
    }
}

/// Property ordering: earlier start first, then shorter total duration,
/// with infinite segments last
pub fn compare_segments<V: Animatable>(
    a: &AnimationSegment<V>,
    b: &AnimationSegment<V>,
) -> Ordering {
    a.start_delay
        .cmp(&b.start_delay)
        .then_with(|| a.total_duration.cmp(&b.total_duration))
}
