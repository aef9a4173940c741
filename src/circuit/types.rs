//! Core types for circuit parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::LabError;

/// How the three lab resistors are connected.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    /// Single current path; resistances add.
    #[default]
    Series,
    /// Shared voltage across every branch; conductances add.
    Parallel,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Series => write!(f, "series"),
            Topology::Parallel => write!(f, "parallel"),
        }
    }
}

impl FromStr for Topology {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "series" | "s" => Ok(Topology::Series),
            "parallel" | "p" => Ok(Topology::Parallel),
            _ => Err(LabError::UnknownTopology { name: s.to_string() }),
        }
    }
}

/// Inputs of the series/parallel resistor lab.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesParallelParams {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub topology: Topology,
    /// Supply voltage driving the network (volts)
    pub supply_voltage: f64,
}

impl Default for SeriesParallelParams {
    fn default() -> Self {
        Self {
            r1: 10.0,
            r2: 10.0,
            r3: 10.0,
            topology: Topology::Series,
            supply_voltage: crate::DEFAULT_SUPPLY_VOLTAGE,
        }
    }
}

impl SeriesParallelParams {
    /// Resistances in branch order.
    pub fn resistances(&self) -> [f64; 3] {
        [self.r1, self.r2, self.r3]
    }
}

/// Inputs of the closed-circuit lab: a battery with internal resistance
/// driving a single external load.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedCircuitParams {
    /// Battery EMF (volts)
    pub source_voltage: f64,
    /// Internal resistance `r` (ohms)
    pub internal_resistance: f64,
    /// External load `R` (ohms)
    pub external_resistance: f64,
}

impl Default for ClosedCircuitParams {
    fn default() -> Self {
        Self {
            source_voltage: crate::DEFAULT_SUPPLY_VOLTAGE,
            internal_resistance: 2.0,
            external_resistance: 10.0,
        }
    }
}

/// Inputs of the two-loop Kirchhoff lab.
///
/// ```text
///   +--[R1]--+--[R2]--+
///   |        |        |
///  V1       R3       V2
///   |        |        |
///   +--------+--------+
/// ```
///
/// `r3` is the branch shared by both loops.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoLoopParams {
    pub v1: f64,
    pub v2: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
}

impl Default for TwoLoopParams {
    fn default() -> Self {
        Self {
            v1: 12.0,
            v2: 6.0,
            r1: 4.0,
            r2: 2.0,
            r3: 6.0,
        }
    }
}

/// Inputs of the wire lab, as multiples of a reference wire.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireParams {
    pub length: f64,
    pub area: f64,
}

impl Default for WireParams {
    fn default() -> Self {
        Self {
            length: 1.0,
            area: 1.0,
        }
    }
}

/// Inputs of the Ohm's law lab.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhmParams {
    pub voltage: f64,
    pub resistance: f64,
}

impl Default for OhmParams {
    fn default() -> Self {
        Self {
            voltage: 10.0,
            resistance: 5.0,
        }
    }
}

/// An adjustable lab parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Length,
    Area,
    Voltage,
    Resistance,
    R1,
    R2,
    R3,
    SupplyVoltage,
    InternalResistance,
    ExternalResistance,
    V1,
    V2,
}

impl ParamKey {
    /// Canonical name used on the command line and in WASM bindings.
    pub fn name(&self) -> &'static str {
        match self {
            ParamKey::Length => "length",
            ParamKey::Area => "area",
            ParamKey::Voltage => "voltage",
            ParamKey::Resistance => "resistance",
            ParamKey::R1 => "r1",
            ParamKey::R2 => "r2",
            ParamKey::R3 => "r3",
            ParamKey::SupplyVoltage => "vb",
            ParamKey::InternalResistance => "internal",
            ParamKey::ExternalResistance => "external",
            ParamKey::V1 => "v1",
            ParamKey::V2 => "v2",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamKey {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.to_ascii_lowercase().as_str() {
            "length" | "l" => ParamKey::Length,
            "area" | "a" => ParamKey::Area,
            "voltage" | "v" => ParamKey::Voltage,
            "resistance" | "r" => ParamKey::Resistance,
            "r1" => ParamKey::R1,
            "r2" => ParamKey::R2,
            "r3" => ParamKey::R3,
            "vb" | "supply" | "emf" => ParamKey::SupplyVoltage,
            "internal" | "r_internal" => ParamKey::InternalResistance,
            "external" | "r_external" | "load" => ParamKey::ExternalResistance,
            "v1" => ParamKey::V1,
            "v2" => ParamKey::V2,
            _ => return Err(LabError::UnknownParameterName { name: s.to_string() }),
        };
        Ok(key)
    }
}
