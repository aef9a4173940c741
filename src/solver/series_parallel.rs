//! Series/parallel resistor combination.

use crate::circuit::{ensure_finite, require_non_negative, require_positive, SeriesParallelParams, Topology};
use crate::error::Result;

/// Voltage and current of one resistor in the network.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchValue {
    pub label: &'static str,
    pub resistance: f64,
    pub current: f64,
    pub voltage: f64,
}

/// Solved resistor network.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesParallelSolution {
    pub topology: Topology,
    /// Equivalent resistance of the whole network (Ω)
    pub equivalent_resistance: f64,
    /// Current drawn from the supply (A)
    pub total_current: f64,
    pub branches: [BranchValue; 3],
}

const LABELS: [&str; 3] = ["R1", "R2", "R3"];

/// Combine three resistors under the given topology and drive them from the supply.
///
/// In series every resistor carries the supply current and drops `I * Rk`.
/// In parallel every branch sees the full supply and carries `Vb / Rk`.
pub fn solve_series_parallel(params: &SeriesParallelParams) -> Result<SeriesParallelSolution> {
    let r = [
        require_positive("r1", params.r1)?,
        require_positive("r2", params.r2)?,
        require_positive("r3", params.r3)?,
    ];
    let vb = require_non_negative("vb", params.supply_voltage)?;

    let equivalent_resistance = match params.topology {
        Topology::Series => r.iter().sum::<f64>(),
        Topology::Parallel => {
            let conductance = ensure_finite("conductance", r.iter().map(|rk| 1.0 / rk).sum())?;
            1.0 / conductance
        }
    };
    let equivalent_resistance = ensure_finite("r_eq", equivalent_resistance)?;
    let total_current = ensure_finite("i_total", vb / equivalent_resistance)?;

    let branches = std::array::from_fn(|k| {
        let (current, voltage) = match params.topology {
            Topology::Series => (total_current, total_current * r[k]),
            Topology::Parallel => (vb / r[k], vb),
        };
        BranchValue {
            label: LABELS[k],
            resistance: r[k],
            current,
            voltage,
        }
    });

    Ok(SeriesParallelSolution {
        topology: params.topology,
        equivalent_resistance,
        total_current,
        branches,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::LabError;

    fn params(r1: f64, r2: f64, r3: f64, topology: Topology) -> SeriesParallelParams {
        SeriesParallelParams {
            r1,
            r2,
            r3,
            topology,
            supply_voltage: 12.0,
        }
    }

    #[test]
    fn test_equal_resistors() {
        let series = solve_series_parallel(&params(10.0, 10.0, 10.0, Topology::Series)).unwrap();
        assert_relative_eq!(series.equivalent_resistance, 30.0);
        assert_relative_eq!(series.total_current, 0.4);

        let parallel = solve_series_parallel(&params(10.0, 10.0, 10.0, Topology::Parallel)).unwrap();
        assert_relative_eq!(parallel.equivalent_resistance, 10.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(parallel.total_current, 3.6, epsilon = 1e-12);
    }

    #[test]
    fn test_series_branches_share_current() {
        let sol = solve_series_parallel(&params(2.0, 4.0, 6.0, Topology::Series)).unwrap();
        assert_relative_eq!(sol.total_current, 1.0);
        for branch in &sol.branches {
            assert_relative_eq!(branch.current, 1.0);
            assert_relative_eq!(branch.voltage, branch.resistance);
        }
        // Drops add back up to the supply
        let drop: f64 = sol.branches.iter().map(|b| b.voltage).sum();
        assert_relative_eq!(drop, 12.0);
    }

    #[test]
    fn test_parallel_branches_share_voltage() {
        let sol = solve_series_parallel(&params(2.0, 4.0, 6.0, Topology::Parallel)).unwrap();
        assert_eq!(sol.branches[1].label, "R2");
        let currents: Vec<f64> = sol.branches.iter().map(|b| b.current).collect();
        assert_relative_eq!(currents[0], 6.0);
        assert_relative_eq!(currents[1], 3.0);
        assert_relative_eq!(currents[2], 2.0);
        assert!(sol.branches.iter().all(|b| b.voltage == 12.0));
        assert_relative_eq!(currents.iter().sum::<f64>(), sol.total_current, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_resistance_rejected() {
        let err = solve_series_parallel(&params(10.0, 0.0, 10.0, Topology::Parallel)).unwrap_err();
        assert!(matches!(err, LabError::InvalidInput { param: "r2", .. }));

        let err = solve_series_parallel(&params(-5.0, 10.0, 10.0, Topology::Series)).unwrap_err();
        assert!(matches!(err, LabError::InvalidInput { param: "r1", .. }));
    }

    #[test]
    fn test_negative_supply_rejected() {
        let mut p = params(10.0, 10.0, 10.0, Topology::Series);
        p.supply_voltage = -1.0;
        assert!(matches!(
            solve_series_parallel(&p),
            Err(LabError::InvalidInput { param: "vb", .. })
        ));
    }

    #[test]
    fn test_overflow_reported() {
        // Subnormal resistance: 1/r overflows
        let p = params(f64::MIN_POSITIVE / 16.0, 1.0, 1.0, Topology::Parallel);
        assert_eq!(solve_series_parallel(&p).unwrap_err(), LabError::non_finite("conductance"));

        let p = params(f64::MAX, f64::MAX, 1.0, Topology::Series);
        assert_eq!(solve_series_parallel(&p).unwrap_err(), LabError::non_finite("r_eq"));
    }
}
