//! Easing functions for animations

/// Easing function type
///
/// Maps a linear progress value to an eased one. Most curves stay inside
/// 0.0 to 1.0; the overshoot and anticipate families leave that range and
/// the evaluators extrapolate.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    CubicBezier(f32, f32, f32, f32),
    /// Runs past the end value before settling back (tension 2.0 is typical)
    Overshoot(f32),
    /// Backs up before moving forward
    Anticipate(f32),
    /// Backs up, then overshoots the end value
    AnticipateOvershoot(f32),
    /// Caller-supplied curve
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Map linear progress to eased progress
    ///
    /// Inputs outside 0.0 to 1.0 are passed through the same formula, which
    /// keeps extrapolated fractions continuous.
    pub fn apply(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => power_in(t, 3),
            Easing::EaseOut => power_out(t, 3),
            Easing::EaseInOut => power_in_out(t, 3),
            Easing::EaseInQuad => power_in(t, 2),
            Easing::EaseOutQuad => power_out(t, 2),
            Easing::EaseInOutQuad => power_in_out(t, 2),
            Easing::EaseInQuart => power_in(t, 4),
            Easing::EaseOutQuart => power_out(t, 4),
            Easing::EaseInOutQuart => power_in_out(t, 4),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                BezierCurve::new(x1, y1, x2, y2).solve(t)
            }
            Easing::Overshoot(tension) => 1.0 + overshoot(t - 1.0, tension),
            Easing::Anticipate(tension) => anticipate(t, tension),
            Easing::AnticipateOvershoot(tension) => {
                let tension = tension * 1.5;
                if t < 0.5 {
                    anticipate(2.0 * t, tension) / 2.0
                } else {
                    (overshoot(2.0 * t - 2.0, tension) + 2.0) / 2.0
                }
            }
            Easing::Custom(curve) => curve(t),
        }
    }
}

fn power_in(t: f32, exponent: i32) -> f32 {
    t.powi(exponent)
}

fn power_out(t: f32, exponent: i32) -> f32 {
    1.0 - (1.0 - t).powi(exponent)
}

fn power_in_out(t: f32, exponent: i32) -> f32 {
    if t < 0.5 {
        power_in(2.0 * t, exponent) / 2.0
    } else {
        1.0 - power_in(2.0 - 2.0 * t, exponent) / 2.0
    }
}

fn anticipate(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t - tension)
}

fn overshoot(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t + tension)
}

/// CSS-style timing curve through (0, 0), (x1, y1), (x2, y2), (1, 1)
///
/// Each axis is stored as polynomial coefficients; math runs in f64 so
/// neighbouring frames do not jitter.
struct BezierCurve {
    x: [f64; 3],
    y: [f64; 3],
}

impl BezierCurve {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Self::coefficients(x1.into(), x2.into()),
            y: Self::coefficients(y1.into(), y2.into()),
        }
    }

    fn coefficients(p1: f64, p2: f64) -> [f64; 3] {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        [a, b, c]
    }

    fn sample([a, b, c]: [f64; 3], s: f64) -> f64 {
        ((a * s + b) * s + c) * s
    }

    fn slope([a, b, c]: [f64; 3], s: f64) -> f64 {
        (3.0 * a * s + 2.0 * b) * s + c
    }

    /// Find the curve parameter whose x is `x`
    fn parameter_for(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        let mut s = x;
        for _ in 0..8 {
            let error = Self::sample(self.x, s) - x;
            if error.abs() < EPSILON {
                return s;
            }
            let slope = Self::slope(self.x, s);
            if slope.abs() < EPSILON {
                break;
            }
            s -= error / slope;
        }

        // Newton stalled on a flat stretch, bisect instead
        let (mut low, mut high) = (0.0, 1.0);
        s = x;
        for _ in 0..20 {
            let sampled = Self::sample(self.x, s);
            if (sampled - x).abs() < EPSILON {
                break;
            }
            if sampled < x {
                low = s;
            } else {
                high = s;
            }
            s = (low + high) / 2.0;
        }
        s
    }

    fn solve(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y, self.parameter_for(t.into())) as f32
    }
}
