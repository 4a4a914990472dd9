//! Motion-constrained path planning for a fixed-step UAV.
//!
//! The planner searches over `(position, heading)` states reachable by turning
//! at most a fixed number of degrees per step, see [`graph_search`].

pub mod agent;
pub mod error;
pub mod graph_search;
pub mod heuristic;
pub mod planner;

pub use agent::Uav;
pub use error::NavigationError;
pub use graph_search::{GraphSearch, SearchConfig, SearchOutcome, Termination};
pub use heuristic::Heuristic;
pub use planner::{FlightContext, PathStrategy};

pub use uav_kinematics::{MotionModel, Point};
