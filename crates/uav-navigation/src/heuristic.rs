use uav_kinematics::{MotionModel, Point, angle_difference, bearing};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weight applied to heading misalignment (per degree) by default.
pub const DEFAULT_ANGLE_WEIGHT: f64 = 0.1;

/// Cost-to-go estimate used to rank freshly generated states.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Heuristic {
    /// Straight-line distance plus `weight` times the angle between the
    /// heading and the bearing to the destination.
    AngleWeighted {
        /// Penalty per degree of misalignment.
        weight: f64,
    },
    /// Straight-line distance measured in steps.
    Distance,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::AngleWeighted {
            weight: DEFAULT_ANGLE_WEIGHT,
        }
    }
}

impl Heuristic {
    /// Estimates the remaining cost from a pose to `destination`.
    pub fn estimate(&self, position: &Point, heading: f64, destination: &Point, step_size: f64) -> f64 {
        match *self {
            Heuristic::AngleWeighted { weight } => {
                angle_weighted_cost(position, heading, destination, weight)
            }
            Heuristic::Distance => position.distance(destination) / step_size,
        }
    }
}

/// `distance + weight * misalignment`, with misalignment in degrees.
pub fn angle_weighted_cost(position: &Point, heading: f64, destination: &Point, weight: f64) -> f64 {
    let desired = bearing(position, destination);
    position.distance(destination) + weight * angle_difference(heading, desired)
}

/// A kinematically reachable pose, scored but not yet placed in the search tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Successor {
    /// Position after the step.
    pub position: Point,
    /// Heading after the turn, in `[0, 360)`.
    pub heading: f64,
    /// Heuristic estimate from this pose.
    pub h_cost: f64,
}

/// Enumerates the `2M + 1` successors of a pose, one per integer turn offset
/// in `[-M, M]`, in ascending offset order.
pub fn expand<'a>(
    model: &'a MotionModel,
    heuristic: &'a Heuristic,
    position: Point,
    heading: f64,
    destination: Point,
) -> impl Iterator<Item = Successor> + 'a {
    model.turn_offsets().map(move |offset| {
        let (next, next_heading) = model.successor(&position, heading, offset);
        Successor {
            position: next,
            heading: next_heading,
            h_cost: heuristic.estimate(&next, next_heading, &destination, model.step_size()),
        }
    })
}
