use crate::error::NavigationError;
use crate::planner::{FlightContext, PathStrategy};
use uav_kinematics::{Point, bearing};

use std::fmt;
use tracing::{debug, info};

/// Segments shorter than this do not define a direction of travel.
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

/// An unmanned vehicle moving in the plane with a bounded turn per step.
///
/// The vehicle owns its planning strategy; without one, path requests fail
/// with [`NavigationError::NoStrategy`].
pub struct Uav {
    position: Point,
    heading: f64,
    max_turn_angle: f64,
    step_size: f64,
    strategy: Option<Box<dyn PathStrategy>>,
}

impl Uav {
    /// Creates a vehicle with no planning strategy.
    ///
    /// # Arguments
    ///
    /// * `position`: Current position.
    /// * `heading`: Current heading in degrees.
    /// * `max_turn_angle`: Maximum turn per step in degrees.
    /// * `step_size`: Distance covered per step.
    pub fn new(position: Point, heading: f64, max_turn_angle: f64, step_size: f64) -> Self {
        Self {
            position,
            heading,
            max_turn_angle,
            step_size,
            strategy: None,
        }
    }

    /// Builder-style variant of [`Uav::set_strategy`].
    pub fn with_strategy(mut self, strategy: impl PathStrategy + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    /// Replaces the planning strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn PathStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Returns true if a planning strategy is configured.
    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
    }

    pub fn set_max_turn_angle(&mut self, max_turn_angle: f64) {
        self.max_turn_angle = max_turn_angle;
    }

    /// Plans a path from the current pose to `destination`.
    ///
    /// # Errors
    ///
    /// * `NavigationError::NoStrategy` if no strategy is configured.
    /// * `NavigationError::InvalidContext` if the step size or turn angle is out of range.
    ///
    /// An `Ok` with an empty vector means the strategy found no path.
    pub fn calculate_path(&self, destination: Point) -> Result<Vec<Point>, NavigationError> {
        let strategy = self.strategy.as_ref().ok_or(NavigationError::NoStrategy)?;
        self.motion_model()?;
        let path = strategy.calculate(self, destination);
        debug!(path_len = path.len(), %destination, "Path request finished");
        Ok(path)
    }

    /// Moves the vehicle to the end of `path`, facing along its last segment.
    ///
    /// Paths with fewer than two waypoints leave the vehicle where it is.
    pub fn follow(&mut self, path: &[Point]) {
        let Some(&last) = path.last() else {
            return;
        };
        if path.len() < 2 {
            return;
        }
        // the synthetic destination may coincide with the last node
        if let Some(pair) = path
            .windows(2)
            .rev()
            .find(|pair| pair[0].distance(&pair[1]) > MIN_SEGMENT_LENGTH)
        {
            self.heading = bearing(&pair[0], &pair[1]);
        }
        self.position = last;
        info!(position = %self.position, heading = self.heading, "Vehicle moved along path");
    }
}

impl FlightContext for Uav {
    fn position(&self) -> Point {
        self.position
    }

    fn heading(&self) -> f64 {
        self.heading
    }

    fn max_turn_angle(&self) -> f64 {
        self.max_turn_angle
    }

    fn step_size(&self) -> f64 {
        self.step_size
    }
}

impl fmt::Debug for Uav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uav")
            .field("position", &self.position)
            .field("heading", &self.heading)
            .field("max_turn_angle", &self.max_turn_angle)
            .field("step_size", &self.step_size)
            .field("has_strategy", &self.has_strategy())
            .finish()
    }
}

impl fmt::Display for Uav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Uav at {} heading {:.2} deg (max turn: {:.2} deg, step: {:.2})",
            self.position, self.heading, self.max_turn_angle, self.step_size
        )
    }
}
