//! Error types for the lab solvers.
//!
//! This module provides a unified error type [`LabError`] that covers
//! input validation, degenerate circuits, and the parameter-binding layer
//! used by the CLI and WASM front-ends.

use thiserror::Error;

use crate::lab::SimulationKind;

/// Result type alias using [`LabError`].
pub type Result<T> = std::result::Result<T, LabError>;

/// Unified error type for all lab operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabError {
    // ============ Solver Errors ============
    /// A parameter violates its electrical domain (e.g. resistance <= 0)
    #[error("Invalid input '{param}' = {value}: must be {requirement}")]
    InvalidInput {
        param: &'static str,
        value: f64,
        requirement: &'static str,
    },

    /// The two-loop system has no unique solution
    #[error("Singular system (determinant {determinant:.3e}) - no unique solution")]
    SingularSystem { determinant: f64 },

    /// A derived quantity overflowed or became undefined
    #[error("Derived quantity '{quantity}' is not finite")]
    NonFinite { quantity: &'static str },

    // ============ Binding Errors ============
    /// A value fell outside the control domain with clamping disabled
    #[error("Value {value} for '{param}' is outside [{min}, {max}]")]
    OutOfRange {
        param: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The parameter is not adjustable in the active simulation
    #[error("Parameter '{param}' does not belong to the {simulation} simulation")]
    UnknownParameter {
        param: String,
        simulation: SimulationKind,
    },

    /// Unrecognised parameter name
    #[error("Unknown parameter '{name}'")]
    UnknownParameterName { name: String },

    /// Unrecognised topology name
    #[error("Unknown topology '{name}' (expected series or parallel)")]
    UnknownTopology { name: String },

    /// Unrecognised simulation name
    #[error("Unknown simulation '{name}' (expected wire, ohm, series-parallel, closed-circuit or kirchhoff)")]
    UnknownSimulation { name: String },

    /// Malformed `key=value` assignment
    #[error("Invalid assignment '{input}' (expected KEY=VALUE)")]
    InvalidAssignment { input: String },
}

impl LabError {
    /// Create an invalid input error
    pub fn invalid_input(param: &'static str, value: f64, requirement: &'static str) -> Self {
        Self::InvalidInput {
            param,
            value,
            requirement,
        }
    }

    /// Create a non-finite result error
    pub fn non_finite(quantity: &'static str) -> Self {
        Self::NonFinite { quantity }
    }

    /// Create an unknown parameter error
    pub fn unknown_parameter(param: impl Into<String>, simulation: SimulationKind) -> Self {
        Self::UnknownParameter {
            param: param.into(),
            simulation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_parameter() {
        let err = LabError::invalid_input("r2", 0.0, "greater than zero");
        assert_eq!(err.to_string(), "Invalid input 'r2' = 0: must be greater than zero");

        let err = LabError::unknown_parameter("length", SimulationKind::Kirchhoff);
        assert_eq!(
            err.to_string(),
            "Parameter 'length' does not belong to the kirchhoff simulation"
        );
    }
}
