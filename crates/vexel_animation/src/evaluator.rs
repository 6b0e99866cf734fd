//! Value evaluators
//!
//! An evaluator turns an eased fraction and a pair of values into the
//! in-between value. Each animatable value kind is bound to exactly one
//! evaluator through [`Animatable::Evaluator`], so the interpolation strategy
//! is fixed at compile time.
//!
//! Evaluators write their result into storage they own and hand out a
//! reference to it. The reference is valid until the next call; array and
//! path evaluators reuse the same buffer for every frame instead of
//! allocating.

use crate::error::AnimationError;
use vexel_paint::{Color, PathData};

/// Interpolation strategy for one value kind
pub trait ValueEvaluator<V>: Send {
    /// Blend `start` and `end` at `fraction`
    ///
    /// `fraction` has already been eased and may lie outside 0.0 to 1.0; the
    /// result is extrapolated rather than clamped.
    fn evaluate(&mut self, fraction: f32, start: &V, end: &V) -> &V;
}

/// A value kind that can be animated
pub trait Animatable: Clone + Send + 'static {
    /// Evaluator used for every keyframe set of this value kind
    type Evaluator: ValueEvaluator<Self> + Default;

    /// Verify that `other` (the keyframe at `index`) can be blended with `self`
    fn check_compatible(&self, _other: &Self, _index: usize) -> Result<(), AnimationError> {
        Ok(())
    }
}

/// Linear scalar interpolation
#[derive(Clone, Debug, Default)]
pub struct FloatEvaluator {
    value: f32,
}

impl ValueEvaluator<f32> for FloatEvaluator {
    fn evaluate(&mut self, fraction: f32, start: &f32, end: &f32) -> &f32 {
        self.value = start + (end - start) * fraction;
        &self.value
    }
}

impl Animatable for f32 {
    type Evaluator = FloatEvaluator;
}

const GAMMA: f32 = 2.2;

/// Gamma-correct ARGB interpolation
///
/// Red, green and blue are decoded from sRGB to linear light with a 2.2
/// power curve, blended, and re-encoded. Alpha is blended as-is.
#[derive(Clone, Debug, Default)]
pub struct ArgbEvaluator {
    value: Color,
}

impl ArgbEvaluator {
    /// Blend two colors without going through an evaluator instance
    pub fn blend(fraction: f32, start: Color, end: Color) -> Color {
        let [start_a, start_r, start_g, start_b] = start.to_unit();
        let [end_a, end_r, end_g, end_b] = end.to_unit();

        let lerp = |from: f32, to: f32| from + fraction * (to - from);
        let lerp_linear = |from: f32, to: f32| {
            let blended = lerp(from.powf(GAMMA), to.powf(GAMMA));
            // Extrapolated channels can leave 0..1; powf of a negative is NaN
            blended.clamp(0.0, 1.0).powf(1.0 / GAMMA)
        };

        Color::from_unit([
            lerp(start_a, end_a),
            lerp_linear(start_r, end_r),
            lerp_linear(start_g, end_g),
            lerp_linear(start_b, end_b),
        ])
    }
}

impl ValueEvaluator<Color> for ArgbEvaluator {
    fn evaluate(&mut self, fraction: f32, start: &Color, end: &Color) -> &Color {
        self.value = Self::blend(fraction, *start, *end);
        &self.value
    }
}

impl Animatable for Color {
    type Evaluator = ArgbEvaluator;
}

/// Element-wise linear interpolation of equal-length float arrays
#[derive(Clone, Debug, Default)]
pub struct FloatArrayEvaluator {
    buffer: Vec<f32>,
}

impl ValueEvaluator<Vec<f32>> for FloatArrayEvaluator {
    fn evaluate(&mut self, fraction: f32, start: &Vec<f32>, end: &Vec<f32>) -> &Vec<f32> {
        self.buffer.clear();
        self.buffer.extend(
            start
                .iter()
                .zip(end.iter())
                .map(|(from, to)| from + fraction * (to - from)),
        );
        &self.buffer
    }
}

impl Animatable for Vec<f32> {
    type Evaluator = FloatArrayEvaluator;

    fn check_compatible(&self, other: &Self, _index: usize) -> Result<(), AnimationError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(AnimationError::ArrayLengthMismatch {
                expected: self.len(),
                actual: other.len(),
            })
        }
    }
}

/// Shape morphing between paths of identical topology
#[derive(Clone, Debug, Default)]
pub struct PathDataEvaluator {
    scratch: Option<PathData>,
}

impl ValueEvaluator<PathData> for PathDataEvaluator {
    fn evaluate(&mut self, fraction: f32, start: &PathData, end: &PathData) -> &PathData {
        if !self
            .scratch
            .as_ref()
            .is_some_and(|path| path.can_morph_with(start))
        {
            tracing::trace!(commands = start.len(), "rebuilding path morph buffer");
            self.scratch = Some(start.clone());
        }
        let scratch = self.scratch.get_or_insert_with(|| start.clone());

        if let Err(err) = scratch.interpolate(start, end, fraction) {
            // Keyframe sets reject mismatched shapes up front, so this only
            // triggers for evaluators driven directly.
            tracing::warn!(%err, "path morph failed, holding start shape");
            scratch.clone_from(start);
        }
        scratch
    }
}

impl Animatable for PathData {
    type Evaluator = PathDataEvaluator;

    fn check_compatible(&self, other: &Self, index: usize) -> Result<(), AnimationError> {
        self.check_morph(other)
            .map_err(|source| AnimationError::ShapeIncompatible { index, source })
    }
}
