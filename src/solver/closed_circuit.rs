//! Ohm's law for a complete circuit: a battery with internal resistance
//! driving an external load.

use crate::circuit::{ensure_finite, require_non_negative, require_positive, ClosedCircuitParams};
use crate::error::Result;

/// Solved closed circuit.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedCircuitSolution {
    /// Loop current `I = E / (R + r)` (A)
    pub total_current: f64,
    /// Voltage across the battery terminals `V = E - I r` (V)
    pub terminal_voltage: f64,
    /// Voltage lost inside the battery `I r` (V)
    pub internal_drop: f64,
    /// Voltage across the load `I R` (V)
    pub load_voltage: f64,
}

/// Solve the closed circuit.
///
/// A larger load draws less current, so less voltage is lost on the internal
/// resistance and the terminal voltage rises toward the EMF.
pub fn solve_closed_circuit(params: &ClosedCircuitParams) -> Result<ClosedCircuitSolution> {
    let emf = require_non_negative("vb", params.source_voltage)?;
    let r_internal = require_non_negative("internal", params.internal_resistance)?;
    let r_external = require_positive("external", params.external_resistance)?;

    let total_current = ensure_finite("i_total", emf / (r_external + r_internal))?;
    let internal_drop = total_current * r_internal;

    Ok(ClosedCircuitSolution {
        total_current,
        terminal_voltage: emf - internal_drop,
        internal_drop,
        load_voltage: total_current * r_external,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::LabError;

    fn params(emf: f64, r_internal: f64, r_external: f64) -> ClosedCircuitParams {
        ClosedCircuitParams {
            source_voltage: emf,
            internal_resistance: r_internal,
            external_resistance: r_external,
        }
    }

    #[test]
    fn test_default_lab_values() {
        let sol = solve_closed_circuit(&params(12.0, 2.0, 10.0)).unwrap();
        assert_relative_eq!(sol.total_current, 1.0);
        assert_relative_eq!(sol.terminal_voltage, 10.0);
        assert_relative_eq!(sol.internal_drop, 2.0);
        assert_relative_eq!(sol.load_voltage, 10.0);
    }

    #[test]
    fn test_ideal_battery_keeps_full_emf() {
        let sol = solve_closed_circuit(&params(9.0, 0.0, 3.0)).unwrap();
        assert_eq!(sol.terminal_voltage, 9.0);
        assert_eq!(sol.internal_drop, 0.0);
        assert_relative_eq!(sol.total_current, 3.0);
    }

    #[test]
    fn test_terminal_voltage_rises_with_load() {
        let mut prev = solve_closed_circuit(&params(12.0, 2.0, 1.0)).unwrap();
        let mut r_external = 1.5;
        while r_external <= 50.0 {
            let sol = solve_closed_circuit(&params(12.0, 2.0, r_external)).unwrap();
            assert!(sol.total_current < prev.total_current);
            assert!(sol.terminal_voltage > prev.terminal_voltage);
            assert!(sol.terminal_voltage < 12.0);
            prev = sol;
            r_external += 0.5;
        }
    }

    #[test]
    fn test_zero_load_rejected() {
        assert!(matches!(
            solve_closed_circuit(&params(12.0, 2.0, 0.0)),
            Err(LabError::InvalidInput { param: "external", .. })
        ));
        assert!(matches!(
            solve_closed_circuit(&params(12.0, -0.5, 10.0)),
            Err(LabError::InvalidInput { param: "internal", .. })
        ));
    }
}
