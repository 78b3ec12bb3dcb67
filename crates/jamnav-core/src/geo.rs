//! Planar coordinates and the playing-field bounding box.
//!
//! The field is a flat Cartesian plane; distances are Euclidean.  Every
//! coordinate produced by a movement primitive is rounded to three decimal
//! places so that equality checks and log lines stay stable across ticks.

use std::fmt;

use crate::{JamError, JamResult};

/// Round to three decimal places.
#[inline]
pub fn round3(v: f64) -> f64 {
    (v * 1_000.0).round() / 1_000.0
}

/// An `(x, y)` coordinate on the playing field.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Both components rounded to three decimal places.
    #[inline]
    pub fn rounded(self) -> Position {
        Position::new(round3(self.x), round3(self.y))
    }

    /// `self + scale * (dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64, scale: f64) -> Position {
        Position::new(self.x + dx * scale, self.y + dy * scale)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn validate(self) -> JamResult<()> {
        if self.is_finite() { Ok(()) } else { Err(JamError::NonFinitePosition(self)) }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── FieldBounds ───────────────────────────────────────────────────────────────

/// Axis-aligned bounding box of the playing field.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl FieldBounds {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// A square field `[-half, half]` on both axes.
    pub const fn square(half: f64) -> Self {
        Self::new(-half, half, -half, half)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Length of the field's diagonal.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// `true` if both ranges are finite and non-empty.
    pub fn is_valid(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
            && self.x_max > self.x_min
            && self.y_max > self.y_min
    }

    /// [`is_valid`](Self::is_valid) as a `Result`.
    pub fn validate(&self) -> JamResult<()> {
        if self.is_valid() { Ok(()) } else { Err(JamError::InvalidField(*self)) }
    }

    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Clamp each axis independently into the field.
    #[inline]
    pub fn clamp(&self, p: Position) -> Position {
        Position::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
        )
    }

    /// Geometric centre of the field.
    pub fn center(&self) -> Position {
        Position::new(
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }
}

impl fmt::Display for FieldBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x∈[{}, {}] y∈[{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}
