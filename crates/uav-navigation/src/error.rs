//! This module defines the error types used by the `uav-navigation` crate.

#![warn(missing_docs)]

use uav_kinematics::KinematicsError;

/// Error type for navigation operations.
///
/// Search failure is not an error: a planner that cannot reach the destination
/// returns an empty path. These variants cover misuse of the agent and planner
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// The agent was asked for a path but has no planning strategy configured.
    NoStrategy,
    /// The agent's motion parameters violate the planner's preconditions.
    InvalidContext(KinematicsError),
    /// The planner configuration is unusable.
    InvalidConfig(&'static str),
}

impl core::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NavigationError::NoStrategy => write!(f, "No path strategy set"),
            NavigationError::InvalidContext(err) => write!(f, "Invalid flight context: {}", err),
            NavigationError::InvalidConfig(msg) => write!(f, "Invalid planner configuration: {}", msg),
        }
    }
}

impl core::error::Error for NavigationError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            NavigationError::InvalidContext(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KinematicsError> for NavigationError {
    fn from(err: KinematicsError) -> Self {
        NavigationError::InvalidContext(err)
    }
}
