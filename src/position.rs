//! Two-dimensional positions in model space.
//!
//! A [`Position`] is stored either as Cartesian `(x, y)` or as Polar
//! `(radius, angle)`. Both forms are interchangeable: arithmetic normalises
//! its operands to Cartesian first, and equality compares the Cartesian
//! projections under [`POSITION_TOLERANCE`]. Model space has y pointing up;
//! the pixel projections flip it for screen space.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Sub};

use crate::constants::POSITION_TOLERANCE;
use crate::error::{ReversiError, Result};

#[derive(Debug, Clone, Copy)]
enum Repr {
    Cartesian { x: f64, y: f64 },
    Polar { radius: f64, angle: f64 },
}

/// An immutable point (or vector) in the model plane.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    repr: Repr,
}

/// Fold an angle into `[0, 2π)`.
fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}

impl Position {
    /// The origin, which is also the centre of every board.
    pub const ORIGIN: Position = Position {
        repr: Repr::Cartesian { x: 0.0, y: 0.0 },
    };

    pub fn cartesian(x: f64, y: f64) -> Self {
        Position {
            repr: Repr::Cartesian { x, y },
        }
    }

    /// Build a polar position. The angle is in radians, counter-clockwise
    /// from +x, and is normalised into `[0, 2π)`.
    ///
    /// # Errors
    /// `InvalidArgument` if the radius is negative or either value is not finite.
    pub fn polar(radius: f64, angle: f64) -> Result<Self> {
        if !radius.is_finite() || !angle.is_finite() {
            return Err(ReversiError::invalid_argument(format!(
                "polar position needs finite values, got radius={radius}, angle={angle}"
            )));
        }
        if radius < 0.0 {
            return Err(ReversiError::invalid_argument(format!(
                "radius must be non-negative, got {radius}"
            )));
        }
        Ok(Position {
            repr: Repr::Polar {
                radius,
                angle: normalize_angle(angle),
            },
        })
    }

    pub fn is_polar(&self) -> bool {
        matches!(self.repr, Repr::Polar { .. })
    }

    fn xy(&self) -> (f64, f64) {
        match self.repr {
            Repr::Cartesian { x, y } => (x, y),
            Repr::Polar { radius, angle } => (radius * angle.cos(), radius * angle.sin()),
        }
    }

    pub fn x(&self) -> f64 {
        self.xy().0
    }

    pub fn y(&self) -> f64 {
        self.xy().1
    }

    /// Distance from the origin.
    pub fn magnitude(&self) -> f64 {
        match self.repr {
            Repr::Cartesian { x, y } => x.hypot(y),
            Repr::Polar { radius, .. } => radius,
        }
    }

    /// Angle from +x in `[0, 2π)`. The origin reports 0.
    pub fn angle(&self) -> f64 {
        match self.repr {
            Repr::Cartesian { x, y } => normalize_angle(y.atan2(x)),
            Repr::Polar { angle, .. } => angle,
        }
    }

    pub fn to_cartesian(&self) -> Position {
        let (x, y) = self.xy();
        Position::cartesian(x, y)
    }

    pub fn to_polar(&self) -> Position {
        Position {
            repr: Repr::Polar {
                radius: self.magnitude(),
                angle: self.angle(),
            },
        }
    }

    /// Vector sum. The result is Cartesian. Also available as `+`.
    pub fn plus(&self, other: &Position) -> Position {
        let (ax, ay) = self.xy();
        let (bx, by) = other.xy();
        Position::cartesian(ax + bx, ay + by)
    }

    /// Vector difference `self - other`. The result is Cartesian. Also
    /// available as `-`.
    pub fn subtract(&self, other: &Position) -> Position {
        let (ax, ay) = self.xy();
        let (bx, by) = other.xy();
        Position::cartesian(ax - bx, ay - by)
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Whether a ray cast from this point towards +x crosses the segment
    /// `start..end`.
    ///
    /// The lower endpoint is excluded and the upper one included, so a ray
    /// passing exactly through a shared vertex of a closed polygon is counted
    /// once. Horizontal segments never count. Summing this over the edges of
    /// a polygon gives the usual odd/even inside test.
    pub fn right_line_crosses_segment(&self, start: &Position, end: &Position) -> bool {
        let (px, py) = self.xy();
        let (sx, sy) = start.xy();
        let (ex, ey) = end.xy();

        if !(py > sy.min(ey) && py <= sy.max(ey)) {
            return false;
        }
        let crossing_x = sx + (py - sy) * (ex - sx) / (ey - sy);
        px < crossing_x
    }

    /// Horizontal pixel coordinate when the model origin is drawn at
    /// `x_center`.
    pub fn pixel_x(&self, x_center: i32) -> Result<f64> {
        if x_center < 0 {
            return Err(ReversiError::invalid_argument(format!(
                "x_center cannot be negative, got {x_center}"
            )));
        }
        Ok(f64::from(x_center) + self.x())
    }

    /// Vertical pixel coordinate when the model origin is drawn at
    /// `y_center`. Pixel rows grow downwards.
    pub fn pixel_y(&self, y_center: i32) -> Result<f64> {
        if y_center < 0 {
            return Err(ReversiError::invalid_argument(format!(
                "y_center cannot be negative, got {y_center}"
            )));
        }
        Ok(f64::from(y_center) - self.y())
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        self.plus(&rhs)
    }
}

impl Add<&Position> for &Position {
    type Output = Position;

    fn add(self, rhs: &Position) -> Position {
        self.plus(rhs)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        self.subtract(&rhs)
    }
}

impl Sub<&Position> for &Position {
    type Output = Position;

    fn sub(self, rhs: &Position) -> Position {
        self.subtract(rhs)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        let (ax, ay) = self.xy();
        let (bx, by) = other.xy();
        (ax - bx).abs() < POSITION_TOLERANCE && (ay - by).abs() < POSITION_TOLERANCE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Cartesian { x, y } => write!(f, "({x:.3}, {y:.3})"),
            Repr::Polar { radius, angle } => write!(f, "(r={radius:.3}, θ={angle:.3})"),
        }
    }
}
