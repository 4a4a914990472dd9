#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for 2D fixed-step UAV kinematics."]
#![doc = ""]
#![doc = "This crate provides planar points, heading arithmetic in degrees, and a"]
#![doc = "bounded-turn motion model that produces the successor states of a pose."]

use core::f64::consts::PI;
use core::fmt;
use core::ops::{Add, Mul, RangeInclusive, Sub};
use core::str::FromStr;
use libm::{atan2, cos, fabs, fmin, fmod, round, sin, sqrt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::KinematicsError;

/// One full rotation in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Scale applied before rounding when discretizing coordinates and headings
/// (two decimal places).
pub const DISCRETE_SCALE: f64 = 100.0;

/// A point in the plane.
///
/// Two points compare equal when their coordinates agree to two decimal
/// places, which is the granularity at which the planner treats positions as
/// the same state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    /// x coordinate.
    pub x: f64,
    /// y coordinate.
    pub y: f64,
}

impl Point {
    /// Construct a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        sqrt(dx * dx + dy * dy)
    }

    /// Coordinates rounded to two decimals and scaled to integers.
    pub fn discretize(&self) -> (i64, i64) {
        (
            round(self.x * DISCRETE_SCALE) as i64,
            round(self.y * DISCRETE_SCALE) as i64,
        )
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.discretize() == other.discretize()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = KinematicsError;

    /// Parses `(x,y)`, tolerating whitespace around each component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(KinematicsError::MalformedPoint("expected `(x,y)`"))?;
        let (x, y) = inner
            .split_once(',')
            .ok_or(KinematicsError::MalformedPoint("missing `,` separator"))?;
        let x = x
            .trim()
            .parse::<f64>()
            .map_err(|_| KinematicsError::MalformedPoint("x is not a number"))?;
        let y = y
            .trim()
            .parse::<f64>()
            .map_err(|_| KinematicsError::MalformedPoint("y is not a number"))?;
        Ok(Point::new(x, y))
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
///
/// Works for any finite input, not only angles within one rotation of the
/// valid range. The result is never exactly `360`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let mut a = fmod(angle, FULL_TURN);
    if a < 0.0 {
        a += FULL_TURN;
    }
    // tiny negative remainders round up to exactly 360 above
    if a >= FULL_TURN { a - FULL_TURN } else { a }
}

/// Minimal circular difference between two headings, in degrees.
///
/// For headings normalized to `[0, 360)` the result lies in `[0, 180]`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let diff = fabs(a - b);
    fmin(diff, FULL_TURN - diff)
}

/// Direction from `from` to `target` in degrees, normalized to `[0, 360)`.
///
/// The bearing of a point to itself is `0`.
pub fn bearing(from: &Point, target: &Point) -> f64 {
    let radians = atan2(target.y - from.y, target.x - from.x);
    normalize_degrees(radians * 180.0 / PI)
}

/// Move `from` by `step_size` along `heading` (degrees, counter-clockwise
/// from the x-axis).
pub fn step(from: &Point, heading: f64, step_size: f64) -> Point {
    let radians = heading * PI / 180.0;
    *from + Point::new(cos(radians), sin(radians)) * step_size
}

/// Heading rounded to two decimals and scaled to an integer.
pub fn discretize_heading(heading: f64) -> i64 {
    round(heading * DISCRETE_SCALE) as i64
}

/// Bounded-turn, fixed-step motion model.
///
/// Each move first turns by an integer number of degrees within
/// `[-max_turn_angle, max_turn_angle]` and then advances `step_size` along the
/// new heading.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionModel {
    /// Maximum turn per step (degrees, symmetric).
    max_turn_angle: f64,
    /// Distance covered per step.
    step_size: f64,
}

impl MotionModel {
    /// Construct a new motion model.
    ///
    /// # Arguments
    ///
    /// * `max_turn_angle`: Maximum turn per step in degrees.
    /// * `step_size`: Distance covered per step.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::InvalidStepSize)` if `step_size` is not positive and finite.
    /// Returns `Err(KinematicsError::InvalidTurnAngle)` if `max_turn_angle` is outside `[0, 360]`.
    pub fn new(max_turn_angle: f64, step_size: f64) -> Result<Self, KinematicsError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(KinematicsError::InvalidStepSize("must be positive and finite"));
        }
        if !max_turn_angle.is_finite() || !(0.0..=FULL_TURN).contains(&max_turn_angle) {
            return Err(KinematicsError::InvalidTurnAngle("must be within [0, 360] degrees"));
        }
        Ok(MotionModel {
            max_turn_angle,
            step_size,
        })
    }

    /// Returns the maximum turn angle in degrees.
    pub fn max_turn_angle(&self) -> f64 {
        self.max_turn_angle
    }

    /// Returns the step size.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Integer turn offsets reachable in one step, `[-M, M]` with `M` the
    /// truncated max turn angle.
    pub fn turn_offsets(&self) -> RangeInclusive<i32> {
        let m = self.max_turn_angle as i32;
        -m..=m
    }

    /// Number of successors one expansion produces (`2M + 1`).
    pub fn branching_factor(&self) -> usize {
        let m = self.max_turn_angle as usize;
        2 * m + 1
    }

    /// Pose reached by turning `offset` degrees from `heading` and stepping
    /// forward.
    ///
    /// # Returns
    ///
    /// The new position and the new heading, normalized to `[0, 360)`.
    pub fn successor(&self, position: &Point, heading: f64, offset: i32) -> (Point, f64) {
        let new_heading = normalize_degrees(heading + f64::from(offset));
        (step(position, new_heading, self.step_size), new_heading)
    }
}

impl fmt::Display for MotionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MotionModel (max turn: {:.2} deg, step: {:.2})",
            self.max_turn_angle, self.step_size
        )
    }
}
