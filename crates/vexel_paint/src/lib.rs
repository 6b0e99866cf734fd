//! Vexel Paint Values
//!
//! The value types a vector-graphics renderer consumes from the animation
//! engine.
//!
//! # Features
//!
//! - Packed 32-bit ARGB colors
//! - Path data (lines, curves, arcs) with structural morph checks
//! - Operand-wise path interpolation for shape morphing

pub mod color;
pub mod path;

pub use color::Color;
pub use path::{MorphError, PathBuilder, PathCommand, PathData, Point};
