//! Path data and shape morphing
//!
//! A [`PathData`] is an ordered list of drawing commands with numeric
//! operands. Two paths can be morphed into each other when they share the
//! same topology: the same number of commands with the same command kinds in
//! the same order. Morphing then blends every operand independently.

use smallvec::SmallVec;
use std::mem;
use thiserror::Error;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo {
        control: Point,
        end: Point,
    },
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    ArcTo {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

impl PathCommand {
    /// Whether both commands are of the same kind, regardless of operands
    pub fn same_kind(&self, other: &PathCommand) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Numeric operands in declaration order
    pub fn operands(&self) -> SmallVec<[f32; 6]> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => SmallVec::from_slice(&[p.x, p.y]),
            PathCommand::QuadTo { control, end } => {
                SmallVec::from_slice(&[control.x, control.y, end.x, end.y])
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => SmallVec::from_slice(&[
                control1.x, control1.y, control2.x, control2.y, end.x, end.y,
            ]),
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                end_angle,
            } => SmallVec::from_slice(&[center.x, center.y, radius, start_angle, end_angle]),
            PathCommand::Close => SmallVec::new(),
        }
    }

    /// Mutable references to the numeric operands, in the same order as [`Self::operands`]
    pub fn operands_mut(&mut self) -> SmallVec<[&mut f32; 6]> {
        let mut out = SmallVec::new();
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                out.push(&mut p.x);
                out.push(&mut p.y);
            }
            PathCommand::QuadTo { control, end } => {
                out.extend([&mut control.x, &mut control.y, &mut end.x, &mut end.y]);
            }
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => {
                out.extend([
                    &mut control1.x,
                    &mut control1.y,
                    &mut control2.x,
                    &mut control2.y,
                    &mut end.x,
                    &mut end.y,
                ]);
            }
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                out.extend([&mut center.x, &mut center.y, radius, start_angle, end_angle]);
            }
            PathCommand::Close => {}
        }
        out
    }
}

/// Reasons two paths cannot be morphed into each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MorphError {
    #[error("path command counts differ ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("path commands differ in kind at index {index}")]
    CommandMismatch { index: usize },
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathData {
    commands: SmallVec<[PathCommand; 16]>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: impl IntoIterator<Item = PathCommand>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check that `other` has the same topology as this path
    pub fn check_morph(&self, other: &PathData) -> Result<(), MorphError> {
        if self.commands.len() != other.commands.len() {
            return Err(MorphError::LengthMismatch {
                left: self.commands.len(),
                right: other.commands.len(),
            });
        }
        match self
            .commands
            .iter()
            .zip(other.commands.iter())
            .position(|(a, b)| !a.same_kind(b))
        {
            Some(index) => Err(MorphError::CommandMismatch { index }),
            None => Ok(()),
        }
    }

    /// Whether this path can be morphed into `other`
    pub fn can_morph_with(&self, other: &PathData) -> bool {
        self.check_morph(other).is_ok()
    }

    /// Overwrite this path with the blend of `start` and `end` at `fraction`
    ///
    /// All three paths must share one topology. `fraction` is not clamped, so
    /// values outside 0.0 to 1.0 extrapolate. On error this path is untouched.
    pub fn interpolate(
        &mut self,
        start: &PathData,
        end: &PathData,
        fraction: f32,
    ) -> Result<(), MorphError> {
        start.check_morph(end)?;
        self.check_morph(start)?;

        for ((out, from), to) in self
            .commands
            .iter_mut()
            .zip(start.commands.iter())
            .zip(end.commands.iter())
        {
            let from = from.operands();
            let to = to.operands();
            for ((slot, a), b) in out.operands_mut().into_iter().zip(from).zip(to) {
                *slot = a + (b - a) * fraction;
            }
        }
        Ok(())
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: PathData,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: PathData::new(),
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end: Point::new(x, y),
        });
        self
    }

    pub fn arc_to(mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) -> Self {
        self.path.commands.push(PathCommand::ArcTo {
            center: Point::new(cx, cy),
            radius,
            start_angle: start,
            end_angle: end,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> PathData {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}
