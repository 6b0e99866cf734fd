//! Animatable properties
//!
//! An [`AnimatableProperty`] owns every segment that targets one logical
//! property of a scene node (a fill color, a rotation, a path shape) and
//! resolves the property's value at the current play time.
//!
//! Segments are sorted once at construction: by start delay, then by total
//! duration with infinite segments last. At a given play time the last
//! segment wins as soon as it has started; before that, the latest segment
//! whose window contains the play time is used, falling back to the first.

use crate::error::AnimationError;
use crate::evaluator::Animatable;
use crate::segment::{compare_segments, AnimationSegment, TotalDuration};
use std::fmt;

/// Callback fired when a property's play time changes
pub type PropertyListener<V> = Box<dyn Fn(&AnimatableProperty<V>) + Send>;

/// The animation timeline of a single property
pub struct AnimatableProperty<V: Animatable> {
    segments: Vec<AnimationSegment<V>>,
    listeners: Vec<PropertyListener<V>>,
    total_duration: TotalDuration,
    current_play_time: u64,
}

impl<V: Animatable> AnimatableProperty<V> {
    /// Build a property from its segments
    ///
    /// Fails if `segments` is empty; a property with nothing to animate
    /// should use [`AnimatableProperty::fixed`] instead.
    pub fn new(
        segments: impl IntoIterator<Item = AnimationSegment<V>>,
    ) -> Result<Self, AnimationError> {
        let segments: Vec<_> = segments.into_iter().collect();
        if segments.is_empty() {
            tracing::warn!("rejected animatable property without segments");
            return Err(AnimationError::EmptySegments);
        }
        Ok(Self::from_segments(segments))
    }

    /// Sort and wrap a non-empty segment list
    fn from_segments(mut segments: Vec<AnimationSegment<V>>) -> Self {
        // Stable, so equal segments keep their declaration order
        segments.sort_by(compare_segments);

        let total_duration = segments
            .iter()
            .map(AnimationSegment::total_duration)
            .max()
            .unwrap_or_default();

        tracing::debug!(
            segments = segments.len(),
            ?total_duration,
            "built animatable property"
        );

        Self {
            segments,
            listeners: Vec::new(),
            total_duration,
            current_play_time: 0,
        }
    }

    /// A property that always holds `value`
    pub fn fixed(value: V) -> Self {
        Self::from_segments(vec![AnimationSegment::fixed(value)])
    }

    /// Longest segment end, or `Infinite` if any segment repeats forever
    pub fn total_duration(&self) -> TotalDuration {
        self.total_duration
    }

    pub fn current_play_time(&self) -> u64 {
        self.current_play_time
    }

    /// Segments in resolution order
    pub fn segments(&self) -> &[AnimationSegment<V>] {
        &self.segments
    }

    /// Move the play head
    ///
    /// The time is clamped to `[0, total_duration]` (no upper bound for
    /// infinite properties). Listeners fire once, in registration order, only
    /// when the clamped time differs from the current one.
    pub fn set_current_play_time(&mut self, play_time: i64) {
        self.seek(u64::try_from(play_time).unwrap_or(0));
    }

    /// Move the play head to a non-negative time
    pub(crate) fn seek(&mut self, play_time: u64) {
        let clamped = match self.total_duration {
            TotalDuration::Finite(total) => play_time.min(total),
            TotalDuration::Infinite => play_time,
        };
        if clamped == self.current_play_time {
            return;
        }

        self.current_play_time = clamped;
        tracing::trace!(
            play_time = clamped,
            listeners = self.listeners.len(),
            "property play time changed"
        );
        for listener in &self.listeners {
            listener(self);
        }
    }

    /// Register a play-time listener
    ///
    /// Listeners stay registered for the lifetime of the property.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&AnimatableProperty<V>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Index into [`Self::segments`] of the segment driving the current value
    pub fn current_segment_index(&self) -> usize {
        let play_time = self.current_play_time;
        let last = self.segments.len() - 1;
        if self.segments[last].start_delay() <= play_time {
            return last;
        }
        self.segments
            .iter()
            .rposition(|segment| segment.contains(play_time))
            .unwrap_or(0)
    }

    /// The segment driving the current value
    pub fn current_segment(&self) -> &AnimationSegment<V> {
        &self.segments[self.current_segment_index()]
    }

    /// Eased progress through the current segment
    pub fn current_fraction(&self) -> f32 {
        self.current_segment().eased_fraction(self.current_play_time)
    }

    /// Value at the current play time
    ///
    /// The reference points into the segment's evaluator and is valid until
    /// the next evaluation; clone it to keep a snapshot.
    pub fn animated_value(&mut self) -> &V {
        let index = self.current_segment_index();
        let play_time = self.current_play_time;
        self.segments[index].value_at_time(play_time)
    }
}

impl<V: Animatable + fmt::Debug> fmt::Debug for AnimatableProperty<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatableProperty")
            .field("segments", &self.segments)
            .field("total_duration", &self.total_duration)
            .field("current_play_time", &self.current_play_time)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Segment list for one property of a scene node
///
/// The list always starts with a zero-duration segment holding the
/// property's initial value, so the property has a value before and between
/// its animations.
#[derive(Debug)]
pub struct SegmentList<V: Animatable> {
    segments: Vec<AnimationSegment<V>>,
}

impl<V: Animatable> SegmentList<V> {
    /// Start a list holding only the initial value
    pub fn new(initial: V) -> Self {
        Self {
            segments: vec![AnimationSegment::fixed(initial)],
        }
    }

    /// Replace the leading initial-value segment
    pub fn replace_first(&mut self, segment: AnimationSegment<V>) {
        self.segments[0] = segment;
    }

    /// Keep the first segment and replace everything after it
    pub fn replace_animations(&mut self, segments: impl IntoIterator<Item = AnimationSegment<V>>) {
        self.segments.truncate(1);
        self.segments.extend(segments);
    }

    pub fn push(&mut self, segment: AnimationSegment<V>) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[AnimationSegment<V>] {
        &self.segments
    }

    /// Build the property; never fails because the list is never empty
    pub fn build(self) -> AnimatableProperty<V> {
        AnimatableProperty::from_segments(self.segments)
    }
}
