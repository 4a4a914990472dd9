use uav_kinematics::{KinematicsError, MotionModel, Point};

/// Read-only view of an agent's kinematic state, as seen by a planner.
pub trait FlightContext {
    /// Current position.
    fn position(&self) -> Point;

    /// Current heading in degrees (counter-clockwise from the x-axis).
    fn heading(&self) -> f64;

    /// Maximum turn per step in degrees, applied symmetrically.
    fn max_turn_angle(&self) -> f64;

    /// Distance covered per step.
    fn step_size(&self) -> f64;

    /// Validated motion model for this context.
    ///
    /// # Errors
    ///
    /// Returns the `KinematicsError` from `MotionModel::new` when the step size
    /// or turn angle is out of range.
    fn motion_model(&self) -> Result<MotionModel, KinematicsError> {
        MotionModel::new(self.max_turn_angle(), self.step_size())
    }
}

/// A pluggable path planning algorithm.
pub trait PathStrategy {
    /// Computes the waypoints from the context's position to `destination`.
    ///
    /// The first waypoint is the start position and the last is `destination`.
    /// An empty vector means no path was found.
    fn calculate(&self, context: &dyn FlightContext, destination: Point) -> Vec<Point>;
}
