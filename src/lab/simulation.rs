//! Simulation variants and their dispatch.

use std::fmt;
use std::str::FromStr;

use crate::circuit::controls::{
    BATTERY_EMF, EXTERNAL_RESISTANCE, INTERNAL_RESISTANCE, LOOP_EMF, LOOP_RESISTANCE,
    NETWORK_RESISTANCE, OHM_RESISTANCE, OHM_VOLTAGE, WIRE_AREA, WIRE_LENGTH,
};
use crate::circuit::{
    ClosedCircuitParams, ControlDomain, OhmParams, ParamKey, SeriesParallelParams, Topology,
    TwoLoopParams, WireParams,
};
use crate::error::{LabError, Result};
use crate::solver::{
    solve_closed_circuit, solve_ohm, solve_series_parallel, solve_two_loop, solve_wire,
    ClosedCircuitSolution, OhmSolution, SeriesParallelSolution, SolvedCurrents, WireSolution,
};

/// The labs that carry a live simulation.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationKind {
    Wire,
    Ohm,
    SeriesParallel,
    ClosedCircuit,
    Kirchhoff,
}

impl SimulationKind {
    /// All simulations, in lesson order.
    pub const ALL: [SimulationKind; 5] = [
        SimulationKind::Wire,
        SimulationKind::Ohm,
        SimulationKind::SeriesParallel,
        SimulationKind::ClosedCircuit,
        SimulationKind::Kirchhoff,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SimulationKind::Wire => "wire",
            SimulationKind::Ohm => "ohm",
            SimulationKind::SeriesParallel => "series-parallel",
            SimulationKind::ClosedCircuit => "closed-circuit",
            SimulationKind::Kirchhoff => "kirchhoff",
        }
    }

    /// Numeric parameters the simulation exposes as controls.
    pub fn params(&self) -> &'static [ParamKey] {
        match self {
            SimulationKind::Wire => &[ParamKey::Length, ParamKey::Area],
            SimulationKind::Ohm => &[ParamKey::Voltage, ParamKey::Resistance],
            SimulationKind::SeriesParallel => &[
                ParamKey::R1,
                ParamKey::R2,
                ParamKey::R3,
                ParamKey::SupplyVoltage,
            ],
            SimulationKind::ClosedCircuit => &[
                ParamKey::SupplyVoltage,
                ParamKey::InternalResistance,
                ParamKey::ExternalResistance,
            ],
            SimulationKind::Kirchhoff => &[
                ParamKey::V1,
                ParamKey::V2,
                ParamKey::R1,
                ParamKey::R2,
                ParamKey::R3,
            ],
        }
    }
}

impl fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SimulationKind {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "wire" => Ok(SimulationKind::Wire),
            "ohm" => Ok(SimulationKind::Ohm),
            "series-parallel" => Ok(SimulationKind::SeriesParallel),
            "closed-circuit" => Ok(SimulationKind::ClosedCircuit),
            "kirchhoff" | "two-loop" => Ok(SimulationKind::Kirchhoff),
            _ => Err(LabError::UnknownSimulation { name: s.to_string() }),
        }
    }
}

/// Parameters of one simulation.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Simulation {
    Wire(WireParams),
    Ohm(OhmParams),
    SeriesParallel(SeriesParallelParams),
    ClosedCircuit(ClosedCircuitParams),
    Kirchhoff(TwoLoopParams),
}

impl Simulation {
    /// Create a simulation at its lab start-up values.
    pub fn new(kind: SimulationKind) -> Self {
        match kind {
            SimulationKind::Wire => Simulation::Wire(WireParams::default()),
            SimulationKind::Ohm => Simulation::Ohm(OhmParams::default()),
            SimulationKind::SeriesParallel => Simulation::SeriesParallel(SeriesParallelParams::default()),
            SimulationKind::ClosedCircuit => Simulation::ClosedCircuit(ClosedCircuitParams::default()),
            SimulationKind::Kirchhoff => Simulation::Kirchhoff(TwoLoopParams::default()),
        }
    }

    pub fn kind(&self) -> SimulationKind {
        match self {
            Simulation::Wire(_) => SimulationKind::Wire,
            Simulation::Ohm(_) => SimulationKind::Ohm,
            Simulation::SeriesParallel(_) => SimulationKind::SeriesParallel,
            Simulation::ClosedCircuit(_) => SimulationKind::ClosedCircuit,
            Simulation::Kirchhoff(_) => SimulationKind::Kirchhoff,
        }
    }

    /// Locate a parameter and the control domain bounding it.
    fn slot(&mut self, key: ParamKey) -> Option<(&mut f64, ControlDomain)> {
        use ParamKey as K;

        let slot = match (self, key) {
            (Simulation::Wire(p), K::Length) => (&mut p.length, WIRE_LENGTH),
            (Simulation::Wire(p), K::Area) => (&mut p.area, WIRE_AREA),

            (Simulation::Ohm(p), K::Voltage) => (&mut p.voltage, OHM_VOLTAGE),
            (Simulation::Ohm(p), K::Resistance) => (&mut p.resistance, OHM_RESISTANCE),

            (Simulation::SeriesParallel(p), K::R1) => (&mut p.r1, NETWORK_RESISTANCE),
            (Simulation::SeriesParallel(p), K::R2) => (&mut p.r2, NETWORK_RESISTANCE),
            (Simulation::SeriesParallel(p), K::R3) => (&mut p.r3, NETWORK_RESISTANCE),
            (Simulation::SeriesParallel(p), K::SupplyVoltage) => (&mut p.supply_voltage, BATTERY_EMF),

            (Simulation::ClosedCircuit(p), K::SupplyVoltage) => (&mut p.source_voltage, BATTERY_EMF),
            (Simulation::ClosedCircuit(p), K::InternalResistance) => {
                (&mut p.internal_resistance, INTERNAL_RESISTANCE)
            }
            (Simulation::ClosedCircuit(p), K::ExternalResistance) => {
                (&mut p.external_resistance, EXTERNAL_RESISTANCE)
            }

            (Simulation::Kirchhoff(p), K::V1) => (&mut p.v1, LOOP_EMF),
            (Simulation::Kirchhoff(p), K::V2) => (&mut p.v2, LOOP_EMF),
            (Simulation::Kirchhoff(p), K::R1) => (&mut p.r1, LOOP_RESISTANCE),
            (Simulation::Kirchhoff(p), K::R2) => (&mut p.r2, LOOP_RESISTANCE),
            (Simulation::Kirchhoff(p), K::R3) => (&mut p.r3, LOOP_RESISTANCE),

            _ => return None,
        };
        Some(slot)
    }

    /// Control domain of a parameter, if this simulation has it.
    pub fn domain(&self, key: ParamKey) -> Option<ControlDomain> {
        let mut scratch = *self;
        scratch.slot(key).map(|(_, domain)| domain)
    }

    /// Current value of a parameter, if this simulation has it.
    pub fn get(&self, key: ParamKey) -> Option<f64> {
        let mut scratch = *self;
        scratch.slot(key).map(|(value, _)| *value)
    }

    /// Overwrite a parameter without consulting its control domain.
    pub fn set(&mut self, key: ParamKey, value: f64) -> Result<()> {
        let kind = self.kind();
        let (slot, _) = self
            .slot(key)
            .ok_or_else(|| LabError::unknown_parameter(key.name(), kind))?;
        *slot = value;
        Ok(())
    }

    /// Resistor topology, for the series/parallel lab.
    pub fn topology(&self) -> Option<Topology> {
        match self {
            Simulation::SeriesParallel(p) => Some(p.topology),
            _ => None,
        }
    }

    pub fn set_topology(&mut self, topology: Topology) -> Result<()> {
        match self {
            Simulation::SeriesParallel(p) => {
                p.topology = topology;
                Ok(())
            }
            other => Err(LabError::unknown_parameter("topology", other.kind())),
        }
    }

    /// Run the solver for this simulation.
    pub fn solve(&self) -> Result<Solution> {
        let solution = match self {
            Simulation::Wire(p) => Solution::Wire(solve_wire(p)?),
            Simulation::Ohm(p) => Solution::Ohm(solve_ohm(p)?),
            Simulation::SeriesParallel(p) => Solution::SeriesParallel(solve_series_parallel(p)?),
            Simulation::ClosedCircuit(p) => Solution::ClosedCircuit(solve_closed_circuit(p)?),
            Simulation::Kirchhoff(p) => Solution::Kirchhoff(solve_two_loop(p)?),
        };
        Ok(solution)
    }
}

/// A named scalar output, for bindings that display solutions generically.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl Quantity {
    const fn new(name: &'static str, value: f64, unit: &'static str) -> Self {
        Self { name, value, unit }
    }
}

/// Output of one simulation.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "kebab-case"))]
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Wire(WireSolution),
    Ohm(OhmSolution),
    SeriesParallel(SeriesParallelSolution),
    ClosedCircuit(ClosedCircuitSolution),
    Kirchhoff(SolvedCurrents),
}

const BRANCH_CURRENTS: [&str; 3] = ["i_r1", "i_r2", "i_r3"];
const BRANCH_VOLTAGES: [&str; 3] = ["v_r1", "v_r2", "v_r3"];

impl Solution {
    pub fn kind(&self) -> SimulationKind {
        match self {
            Solution::Wire(_) => SimulationKind::Wire,
            Solution::Ohm(_) => SimulationKind::Ohm,
            Solution::SeriesParallel(_) => SimulationKind::SeriesParallel,
            Solution::ClosedCircuit(_) => SimulationKind::ClosedCircuit,
            Solution::Kirchhoff(_) => SimulationKind::Kirchhoff,
        }
    }

    /// Scalar outputs in display order.
    pub fn quantities(&self) -> Vec<Quantity> {
        match self {
            Solution::Wire(s) => vec![Quantity::new("relative_resistance", s.relative_resistance, "x")],
            Solution::Ohm(s) => vec![Quantity::new("current", s.current, "A")],
            Solution::SeriesParallel(s) => {
                let mut out = vec![
                    Quantity::new("r_eq", s.equivalent_resistance, "Ω"),
                    Quantity::new("i_total", s.total_current, "A"),
                ];
                for (k, branch) in s.branches.iter().enumerate() {
                    out.push(Quantity::new(BRANCH_CURRENTS[k], branch.current, "A"));
                    out.push(Quantity::new(BRANCH_VOLTAGES[k], branch.voltage, "V"));
                }
                out
            }
            Solution::ClosedCircuit(s) => vec![
                Quantity::new("i_total", s.total_current, "A"),
                Quantity::new("v_terminal", s.terminal_voltage, "V"),
                Quantity::new("v_internal", s.internal_drop, "V"),
                Quantity::new("v_load", s.load_voltage, "V"),
            ],
            Solution::Kirchhoff(s) => vec![
                Quantity::new("i1", s.i1, "A"),
                Quantity::new("i2", s.i2, "A"),
                Quantity::new("i3", s.i3, "A"),
            ],
        }
    }

    /// Look up one scalar output by name.
    pub fn quantity(&self, name: &str) -> Option<f64> {
        self.quantities()
            .into_iter()
            .find(|q| q.name == name)
            .map(|q| q.value)
    }
}
