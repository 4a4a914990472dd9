#![warn(missing_docs)]

//! Error types for the kinematics library.
//!
//! This module defines error types that can occur when building a motion model
//! or parsing geometric primitives.

use core::fmt;

/// Errors that can occur in kinematic calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// Error for invalid step size.
    /// This variant is returned when a step size is provided that is not positive and finite.
    InvalidStepSize(&'static str),
    /// Error for invalid maximum turn angle.
    /// This variant is returned when the turn angle is outside `[0, 360]` degrees.
    InvalidTurnAngle(&'static str),
    /// Error for a point that could not be parsed from text.
    MalformedPoint(&'static str),
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::InvalidStepSize(msg) => write!(f, "Invalid step size: {}", msg),
            KinematicsError::InvalidTurnAngle(msg) => write!(f, "Invalid max turn angle: {}", msg),
            KinematicsError::MalformedPoint(msg) => write!(f, "Malformed point: {}", msg),
        }
    }
}

impl core::error::Error for KinematicsError {}
