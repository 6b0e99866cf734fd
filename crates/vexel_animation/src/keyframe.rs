//! Keyframe sets
//!
//! A keyframe set is an ordered list of value checkpoints spanning a
//! normalized 0.0 to 1.0 progress range, plus the evaluator that blends
//! between neighbouring checkpoints.

use crate::easing::Easing;
use crate::error::AnimationError;
use crate::evaluator::{Animatable, ValueEvaluator};
use std::fmt;

/// A single keyframe
#[derive(Clone, Debug)]
pub struct Keyframe<V> {
    /// Time position (0.0 to 1.0)
    pub fraction: f32,
    /// Value at this keyframe
    pub value: V,
    /// Easing function to use when transitioning TO this keyframe
    pub easing: Easing,
}

impl<V> Keyframe<V> {
    /// Create a keyframe reached with linear easing
    pub fn new(fraction: f32, value: V) -> Self {
        Self {
            fraction,
            value,
            easing: Easing::Linear,
        }
    }

    /// Create a keyframe reached through `easing`
    pub fn with_easing(fraction: f32, value: V, easing: Easing) -> Self {
        Self {
            fraction,
            value,
            easing,
        }
    }
}

/// Ordered keyframes plus the evaluator bound to their value kind
pub struct KeyframeSet<V: Animatable> {
    keyframes: Vec<Keyframe<V>>,
    evaluator: V::Evaluator,
}

impl<V: Animatable> KeyframeSet<V> {
    /// Build a set from explicit keyframes
    ///
    /// Fractions must be finite and strictly increasing from exactly 0.0 to
    /// exactly 1.0, and every value must be blendable with the first one.
    pub fn of_keyframes(keyframes: Vec<Keyframe<V>>) -> Result<Self, AnimationError> {
        validate(&keyframes).map_err(|err| {
            tracing::warn!(%err, "rejected keyframe set");
            err
        })?;
        Ok(Self {
            keyframes,
            evaluator: V::Evaluator::default(),
        })
    }

    /// Build a set from values spread evenly over 0.0 to 1.0
    pub fn of_values(values: impl IntoIterator<Item = V>) -> Result<Self, AnimationError> {
        let values: Vec<V> = values.into_iter().collect();
        let last = values.len().saturating_sub(1).max(1);
        let keyframes = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                // Pin the final fraction so float division never misses 1.0
                let fraction = if i == last { 1.0 } else { i as f32 / last as f32 };
                Keyframe::new(fraction, value)
            })
            .collect();
        Self::of_keyframes(keyframes)
    }

    /// A set that holds one value for the whole range
    pub fn constant(value: V) -> Self {
        Self {
            keyframes: vec![Keyframe::new(0.0, value.clone()), Keyframe::new(1.0, value)],
            evaluator: V::Evaluator::default(),
        }
    }

    pub fn keyframes(&self) -> &[Keyframe<V>] {
        &self.keyframes
    }

    pub fn start_value(&self) -> &V {
        &self.keyframes[0].value
    }

    pub fn end_value(&self) -> &V {
        &self.keyframes[self.keyframes.len() - 1].value
    }

    /// Value at an (already eased) progress fraction
    ///
    /// Fractions below 0.0 or above 1.0 extrapolate along the first or last
    /// keyframe pair.
    pub fn value_at(&mut self, fraction: f32) -> &V {
        let len = self.keyframes.len();
        let next = if fraction <= 0.0 {
            1
        } else if fraction >= 1.0 {
            len - 1
        } else {
            self.keyframes
                .partition_point(|kf| kf.fraction < fraction)
                .clamp(1, len - 1)
        };

        let prev_kf = &self.keyframes[next - 1];
        let next_kf = &self.keyframes[next];
        let local = (fraction - prev_kf.fraction) / (next_kf.fraction - prev_kf.fraction);
        let eased = next_kf.easing.apply(local);

        self.evaluator.evaluate(eased, &prev_kf.value, &next_kf.value)
    }
}

fn validate<V: Animatable>(keyframes: &[Keyframe<V>]) -> Result<(), AnimationError> {
    if keyframes.len() < 2 {
        return Err(AnimationError::TooFewKeyframes {
            count: keyframes.len(),
        });
    }

    for (index, pair) in keyframes.windows(2).enumerate() {
        let fraction = pair[1].fraction;
        if !fraction.is_finite() || fraction <= pair[0].fraction {
            return Err(AnimationError::KeyframeOutOfOrder {
                index: index + 1,
                fraction,
            });
        }
    }

    let first = keyframes[0].fraction;
    let last = keyframes[keyframes.len() - 1].fraction;
    if first != 0.0 || last != 1.0 {
        return Err(AnimationError::KeyframeBounds { first, last });
    }

    let base = &keyframes[0].value;
    for (index, kf) in keyframes.iter().enumerate().skip(1) {
        base.check_compatible(&kf.value, index)?;
    }
    Ok(())
}

impl<V: Animatable> Clone for KeyframeSet<V> {
    /// Clones the keyframes; the copy gets its own evaluator scratch space
    fn clone(&self) -> Self {
        Self {
            keyframes: self.keyframes.clone(),
            evaluator: V::Evaluator::default(),
        }
    }
}

impl<V: Animatable + fmt::Debug> fmt::Debug for KeyframeSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyframeSet")
            .field("keyframes", &self.keyframes)
            .finish_non_exhaustive()
    }
}
