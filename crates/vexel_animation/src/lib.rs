//! Vexel Animation Engine
//!
//! Time-indexed animation of vector-graphic properties: rotations, colors,
//! path shapes, scalars and float arrays.
//!
//! # Features
//!
//! - **Segments**: delay, duration, repeat count and restart/reverse repeats
//! - **Keyframes**: ordered checkpoints with per-keyframe easing
//! - **Evaluators**: linear scalars, gamma-correct colors, float arrays and
//!   path morphing, chosen at compile time per value kind
//! - **Properties**: several segments on one property, resolved at any play time
//! - **Timelines**: one play time broadcast to many properties
//!
//! # Example
//!
//! ```rust
//! use vexel_animation::{AnimatableProperty, AnimationSegment, SegmentConfig};
//!
//! let fade = AnimationSegment::of_float(
//!     0.0,
//!     1.0,
//!     SegmentConfig {
//!         start_delay: 100,
//!         duration: 200,
//!         ..Default::default()
//!     },
//! )
//! .unwrap();
//!
//! let mut alpha = AnimatableProperty::new(vec![fade]).unwrap();
//! alpha.set_current_play_time(200);
//! assert_eq!(*alpha.animated_value(), 0.5);
//! ```

pub mod easing;
pub mod error;
pub mod evaluator;
pub mod keyframe;
pub mod property;
pub mod segment;
pub mod timeline;

pub use easing::Easing;
pub use error::AnimationError;
pub use evaluator::{
    Animatable, ArgbEvaluator, FloatArrayEvaluator, FloatEvaluator, PathDataEvaluator,
    ValueEvaluator,
};
pub use keyframe::{Keyframe, KeyframeSet};
pub use property::{AnimatableProperty, PropertyListener, SegmentList};
pub use segment::{
    AnimationSegment, RepeatCount, RepeatMode, SegmentConfig, TotalDuration, DEFAULT_DURATION_MS,
};
pub use timeline::{PropertyId, PropertyKey, Timeline};
