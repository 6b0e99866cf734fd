//! Error types for building animations

use thiserror::Error;
use vexel_paint::MorphError;

/// Errors raised while building keyframe sets, segments and properties
///
/// All of these are construction-time failures. Evaluating an already built
/// property never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error("an animatable property needs at least one animation segment")]
    EmptySegments,

    #[error("a keyframe set needs at least 2 keyframes, got {count}")]
    TooFewKeyframes { count: usize },

    #[error("keyframe {index} has fraction {fraction}, which is not greater than the previous one")]
    KeyframeOutOfOrder { index: usize, fraction: f32 },

    #[error("keyframes must span 0.0 to 1.0, got {first} to {last}")]
    KeyframeBounds { first: f32, last: f32 },

    #[error("float array length mismatch: expected {expected}, got {actual}")]
    ArrayLengthMismatch { expected: usize, actual: usize },

    #[error("keyframe {index} cannot be morphed from the first keyframe: {source}")]
    ShapeIncompatible {
        index: usize,
        #[source]
        source: MorphError,
    },

    #[error("segment duration {duration} repeated {repeat_count} times overflows")]
    DurationOverflow { duration: u64, repeat_count: u32 },
}
