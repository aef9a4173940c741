//! Live lab state: one simulation and its latest solution.

use crate::circuit::{ParamKey, Topology};
use crate::error::{LabError, Result};
use crate::report;

use super::{Simulation, SimulationKind, Solution};

/// Configuration for a lab session.
#[derive(Debug, Clone)]
pub struct LabConfig {
    /// Clamp out-of-range inputs into their control domain instead of
    /// rejecting them.
    pub clamp_inputs: bool,
    /// Largest `|I1 + I2 - I3|` at the shared node that still counts as
    /// balanced (amps).
    pub kcl_tolerance: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            clamp_inputs: true,
            kcl_tolerance: crate::DEFAULT_KCL_TOLERANCE,
        }
    }
}

impl LabConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether out-of-range inputs are clamped (default) or rejected.
    pub fn with_clamp_inputs(mut self, clamp_inputs: bool) -> Self {
        self.clamp_inputs = clamp_inputs;
        self
    }

    /// Set the node-balance tolerance used when reporting Kirchhoff results.
    pub fn with_kcl_tolerance(mut self, kcl_tolerance: f64) -> Self {
        self.kcl_tolerance = kcl_tolerance;
        self
    }
}

/// A running lab.
///
/// Every change goes through [`LabSession::set`] or
/// [`LabSession::set_topology`], which recompute the solution before
/// committing. A change that cannot be solved is rejected and leaves both the
/// parameters and the solution as they were.
#[derive(Debug, Clone)]
pub struct LabSession {
    simulation: Simulation,
    solution: Solution,
    config: LabConfig,
}

impl LabSession {
    /// Start a lab at its default values.
    pub fn new(kind: SimulationKind) -> Result<Self> {
        Self::with_config(Simulation::new(kind), LabConfig::default())
    }

    /// Start a lab from explicit parameters and configuration.
    pub fn with_config(simulation: Simulation, config: LabConfig) -> Result<Self> {
        let solution = simulation.solve()?;
        Ok(Self {
            simulation,
            solution,
            config,
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn kind(&self) -> SimulationKind {
        self.simulation.kind()
    }

    /// Plain-text summary of the current state.
    pub fn summary(&self) -> String {
        report::summary(&self.simulation, &self.solution, self.config.kcl_tolerance)
    }

    /// Move one control and recompute.
    pub fn set(&mut self, key: ParamKey, value: f64) -> Result<&Solution> {
        let kind = self.kind();
        let domain = self
            .simulation
            .domain(key)
            .ok_or_else(|| LabError::unknown_parameter(key.name(), kind))?;

        let value = if domain.contains(value) || value.is_nan() {
            value
        } else if self.config.clamp_inputs {
            let clamped = domain.clamp(value);
            tracing::warn!(param = key.name(), value, clamped, "input outside control range, clamping");
            clamped
        } else {
            return Err(LabError::OutOfRange {
                param: key.name(),
                value,
                min: domain.min,
                max: domain.max,
            });
        };

        let mut candidate = self.simulation;
        candidate.set(key, value)?;
        self.commit(candidate)
    }

    /// Switch the resistor topology and recompute.
    pub fn set_topology(&mut self, topology: Topology) -> Result<&Solution> {
        let mut candidate = self.simulation;
        candidate.set_topology(topology)?;
        self.commit(candidate)
    }

    /// Apply a `key=value` assignment, e.g. `r1=4.5` or `topology=parallel`.
    pub fn apply(&mut self, assignment: &str) -> Result<&Solution> {
        let invalid = || LabError::InvalidAssignment {
            input: assignment.to_string(),
        };
        let (key, value) = assignment.split_once('=').ok_or_else(invalid)?;
        let (key, value) = (key.trim(), value.trim());

        if key.eq_ignore_ascii_case("topology") {
            return self.set_topology(value.parse::<Topology>()?);
        }

        let param = key
            .parse::<ParamKey>()
            .map_err(|_| LabError::unknown_parameter(key, self.kind()))?;
        let value = value.parse::<f64>().map_err(|_| invalid())?;
        self.set(param, value)
    }

    fn commit(&mut self, candidate: Simulation) -> Result<&Solution> {
        let solution = candidate.solve()?;
        tracing::debug!(simulation = %candidate.kind(), ?solution, "recomputed");
        if let Solution::Kirchhoff(currents) = &solution {
            let residual = currents.kcl_residual();
            if residual > self.config.kcl_tolerance {
                tracing::warn!(
                    residual,
                    tolerance = self.config.kcl_tolerance,
                    "node currents do not balance"
                );
            }
        }
        self.simulation = candidate;
        self.solution = solution;
        Ok(&self.solution)
    }
}
