//! Circuit-law checks swept across the lab's control ranges.

use approx::assert_relative_eq;
use ohm_lab::circuit::controls::{
    BATTERY_EMF, EXTERNAL_RESISTANCE, INTERNAL_RESISTANCE, LOOP_EMF, LOOP_RESISTANCE,
    NETWORK_RESISTANCE,
};
use ohm_lab::circuit::{ClosedCircuitParams, SeriesParallelParams, Topology, TwoLoopParams};
use ohm_lab::solver::{determinant, solve_closed_circuit, solve_series_parallel, solve_two_loop};
use ohm_lab::{LabError, LabSession, SimulationKind};

fn network(r: [f64; 3], topology: Topology) -> SeriesParallelParams {
    SeriesParallelParams {
        r1: r[0],
        r2: r[1],
        r3: r[2],
        topology,
        supply_voltage: 12.0,
    }
}

#[test]
fn series_and_parallel_combination_rules() {
    let grid: Vec<f64> = NETWORK_RESISTANCE.values().step_by(7).collect();
    for &r1 in &grid {
        for &r2 in &grid {
            for &r3 in &grid {
                let series = solve_series_parallel(&network([r1, r2, r3], Topology::Series)).unwrap();
                assert_eq!(series.equivalent_resistance, r1 + r2 + r3);

                let parallel = solve_series_parallel(&network([r1, r2, r3], Topology::Parallel)).unwrap();
                assert_relative_eq!(
                    parallel.equivalent_resistance,
                    1.0 / (1.0 / r1 + 1.0 / r2 + 1.0 / r3),
                    max_relative = 1e-12
                );
                assert!(parallel.equivalent_resistance <= r1.min(r2).min(r3));
            }
        }
    }
}

#[test]
fn terminal_voltage_never_exceeds_emf() {
    for emf in BATTERY_EMF.values() {
        for r_internal in INTERNAL_RESISTANCE.values() {
            for r_external in EXTERNAL_RESISTANCE.values().step_by(9) {
                let sol = solve_closed_circuit(&ClosedCircuitParams {
                    source_voltage: emf,
                    internal_resistance: r_internal,
                    external_resistance: r_external,
                })
                .unwrap();
                if r_internal == 0.0 {
                    assert_eq!(sol.terminal_voltage, emf);
                } else {
                    assert!(sol.terminal_voltage < emf);
                }
            }
        }
    }
}

#[test]
fn larger_load_means_less_current_and_higher_terminal_voltage() {
    for r_internal in [0.1, 1.0, 2.0, 5.0] {
        let sweep: Vec<_> = EXTERNAL_RESISTANCE
            .values()
            .map(|r_external| {
                solve_closed_circuit(&ClosedCircuitParams {
                    source_voltage: 12.0,
                    internal_resistance: r_internal,
                    external_resistance: r_external,
                })
                .unwrap()
            })
            .collect();
        for pair in sweep.windows(2) {
            assert!(pair[1].total_current < pair[0].total_current);
            assert!(pair[1].terminal_voltage > pair[0].terminal_voltage);
        }
    }
}

#[test]
fn kirchhoff_current_law_holds_at_the_shared_node() {
    let resistances: Vec<f64> = LOOP_RESISTANCE.values().step_by(6).collect();
    let emfs: Vec<f64> = LOOP_EMF.values().step_by(8).collect();
    for &v1 in &emfs {
        for &v2 in &emfs {
            for &r1 in &resistances {
                for &r2 in &resistances {
                    for &r3 in &resistances {
                        let params = TwoLoopParams { v1, v2, r1, r2, r3 };
                        assert!(determinant(&params) > 0.0);
                        let sol = solve_two_loop(&params).unwrap();
                        assert!((sol.i1 + sol.i2 - sol.i3).abs() < 1e-9);
                        assert!(sol.kcl_residual() < 1e-9);
                    }
                }
            }
        }
    }
}

#[test]
fn worked_examples() {
    let series = solve_series_parallel(&network([10.0; 3], Topology::Series)).unwrap();
    assert_relative_eq!(series.equivalent_resistance, 30.0);
    let parallel = solve_series_parallel(&network([10.0; 3], Topology::Parallel)).unwrap();
    assert_relative_eq!(parallel.equivalent_resistance, 3.333_333_333_333, epsilon = 1e-9);

    let closed = solve_closed_circuit(&ClosedCircuitParams {
        source_voltage: 12.0,
        internal_resistance: 2.0,
        external_resistance: 10.0,
    })
    .unwrap();
    assert_relative_eq!(closed.total_current, 1.0);
    assert_relative_eq!(closed.terminal_voltage, 10.0);

    let loops = TwoLoopParams {
        v1: 12.0,
        v2: 6.0,
        r1: 4.0,
        r2: 2.0,
        r3: 6.0,
    };
    assert_eq!(determinant(&loops), 44.0);
    let currents = solve_two_loop(&loops).unwrap();
    assert_relative_eq!(currents.i1, 1.364, epsilon = 1e-3);
    assert_relative_eq!(currents.i2, -0.273, epsilon = 1e-3);
    assert_relative_eq!(currents.i3, 1.091, epsilon = 1e-3);
}

#[test]
fn zero_resistance_is_rejected_not_divided() {
    let err = solve_series_parallel(&network([10.0, 10.0, 0.0], Topology::Parallel)).unwrap_err();
    assert!(matches!(err, LabError::InvalidInput { param: "r3", .. }));

    let err = solve_two_loop(&TwoLoopParams {
        v1: 12.0,
        v2: 6.0,
        r1: 4.0,
        r2: 0.0,
        r3: 6.0,
    })
    .unwrap_err();
    assert!(matches!(err, LabError::InvalidInput { param: "r2", .. }));
}

#[test]
fn session_walks_a_lesson() {
    let mut lab = LabSession::new(SimulationKind::Kirchhoff).unwrap();
    let before = lab.solution().quantity("i2").unwrap();
    assert!(before < 0.0);

    // Raising V2 past the point of balance turns I2 around
    lab.apply("v2=18").unwrap();
    let after = lab.solution().quantity("i2").unwrap();
    assert!(after > 0.0);
    assert_relative_eq!(
        lab.solution().quantity("i1").unwrap() + after,
        lab.solution().quantity("i3").unwrap()
    );
}
