//! Plain-text rendering of lab results.
//!
//! Values are shown to two decimals, the precision the lab panels display.

use std::fmt::Write;

use crate::lab::{Simulation, Solution};
use crate::solver::CurrentDirection;

/// Render the parameters and solution of a simulation.
///
/// A Kirchhoff node whose residual `|I1 + I2 - I3|` exceeds `kcl_tolerance`
/// is flagged as unbalanced.
pub fn summary(simulation: &Simulation, solution: &Solution, kcl_tolerance: f64) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_summary(&mut out, simulation, solution, kcl_tolerance);
    out
}

fn write_summary(
    out: &mut String,
    simulation: &Simulation,
    solution: &Solution,
    kcl_tolerance: f64,
) -> std::fmt::Result {
    let kind = simulation.kind();
    write!(out, "{kind}")?;
    if let Some(topology) = simulation.topology() {
        write!(out, " ({topology})")?;
    }
    writeln!(out)?;

    let params: Vec<String> = kind
        .params()
        .iter()
        .filter_map(|&key| simulation.get(key).map(|value| format!("{key} = {value}")))
        .collect();
    writeln!(out, "  inputs: {}", params.join(", "))?;

    match solution {
        Solution::Kirchhoff(currents) => {
            let values = [currents.i1, currents.i2, currents.i3];
            for (k, (value, direction)) in values.iter().zip(currents.directions()).enumerate() {
                writeln!(
                    out,
                    "  I{} = {:>7.2} A {} ({direction})",
                    k + 1,
                    value,
                    direction_label(direction)
                )?;
            }
            let balance = if currents.kcl_residual() <= kcl_tolerance {
                "balanced"
            } else {
                "unbalanced"
            };
            writeln!(
                out,
                "  node: I1 + I2 = {:.2} A, I3 = {:.2} A ({balance})",
                currents.i1 + currents.i2,
                currents.i3
            )?;
        }
        Solution::SeriesParallel(network) => {
            writeln!(out, "  R_eq    = {:>7.2} Ω", network.equivalent_resistance)?;
            writeln!(out, "  I_total = {:>7.2} A", network.total_current)?;
            for branch in &network.branches {
                writeln!(
                    out,
                    "  {}: {:>6.2} Ω {:>7.2} A {:>7.2} V",
                    branch.label, branch.resistance, branch.current, branch.voltage
                )?;
            }
        }
        other => {
            for q in other.quantities() {
                writeln!(out, "  {:<19} = {:>7.2} {}", q.name, q.value, q.unit)?;
            }
        }
    }
    Ok(())
}

/// Short label for a branch current's direction, as shown next to its arrow.
pub fn direction_label(direction: CurrentDirection) -> &'static str {
    match direction {
        CurrentDirection::AsAssumed => "→",
        CurrentDirection::Reversed => "←",
        CurrentDirection::Zero => "·",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Topology;
    use crate::lab::SimulationKind;
    use crate::solver::SolvedCurrents;
    use crate::DEFAULT_KCL_TOLERANCE;

    fn render(simulation: Simulation) -> String {
        let solution = simulation.solve().unwrap();
        summary(&simulation, &solution, DEFAULT_KCL_TOLERANCE)
    }

    #[test]
    fn test_kirchhoff_summary_marks_reversed_current() {
        let text = render(Simulation::new(SimulationKind::Kirchhoff));
        assert!(text.starts_with("kirchhoff\n"));
        assert!(text.contains("inputs: v1 = 12, v2 = 6, r1 = 4, r2 = 2, r3 = 6"));
        assert!(text.contains("I1 =    1.36 A → (as assumed)"));
        assert!(text.contains("I2 =   -0.27 A ← (reversed)"));
        assert!(text.contains("node: I1 + I2 = 1.09 A, I3 = 1.09 A (balanced)"));
    }

    #[test]
    fn test_unbalanced_node_is_flagged() {
        let simulation = Simulation::new(SimulationKind::Kirchhoff);
        let currents = SolvedCurrents {
            i1: 1.0,
            i2: 0.5,
            i3: 1.52,
        };
        let solution = Solution::Kirchhoff(currents);

        let strict = summary(&simulation, &solution, DEFAULT_KCL_TOLERANCE);
        assert!(strict.contains("node: I1 + I2 = 1.50 A, I3 = 1.52 A (unbalanced)"));

        let loose = summary(&simulation, &solution, 0.05);
        assert!(loose.contains("(balanced)"));
    }

    #[test]
    fn test_network_summary_lists_branches() {
        let mut sim = Simulation::new(SimulationKind::SeriesParallel);
        sim.set_topology(Topology::Parallel).unwrap();
        let text = render(sim);
        assert!(text.starts_with("series-parallel (parallel)\n"));
        assert!(text.contains("R_eq    =    3.33 Ω"));
        assert!(text.contains("R3:  10.00 Ω    1.20 A   12.00 V"));
    }

    #[test]
    fn test_generic_summary() {
        let text = render(Simulation::new(SimulationKind::ClosedCircuit));
        assert!(text.contains("v_terminal          =   10.00 V"));
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(direction_label(CurrentDirection::Reversed), "←");
    }
}
