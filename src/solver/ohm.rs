//! Ohm's law and the V–I characteristic of a fixed resistor.

use crate::circuit::{ensure_finite, require_non_negative, require_positive, OhmParams};
use crate::error::Result;

/// Highest current sampled on the characteristic line (A).
pub const CHART_MAX_CURRENT: u32 = 10;

/// One point of the V–I line.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub current: f64,
    pub voltage: f64,
}

/// Solved Ohm's law lab.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OhmSolution {
    /// `I = V / R` (A)
    pub current: f64,
    /// Operating point on the characteristic
    pub operating_point: ChartPoint,
    /// `V = I R` sampled at whole amperes from 0 to [`CHART_MAX_CURRENT`]
    pub characteristic: Vec<ChartPoint>,
}

/// Apply Ohm's law.
pub fn solve_ohm(params: &OhmParams) -> Result<OhmSolution> {
    let voltage = require_non_negative("voltage", params.voltage)?;
    let resistance = require_positive("resistance", params.resistance)?;

    let current = ensure_finite("current", voltage / resistance)?;
    let characteristic = (0..=CHART_MAX_CURRENT)
        .map(|amps| {
            let current = f64::from(amps);
            ChartPoint {
                current,
                voltage: current * resistance,
            }
        })
        .collect();

    Ok(OhmSolution {
        current,
        operating_point: ChartPoint { current, voltage },
        characteristic,
    })
}
