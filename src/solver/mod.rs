//! Closed-form circuit solvers.
//!
//! Every solver is a pure function from a parameter struct to a solution
//! struct. Inputs are validated before any division; a solver returns a
//! [`LabError`](crate::error::LabError) rather than NaN or infinity.
//!
//! | Solver | Lab | Relation |
//! |--------|-----|----------|
//! | [`solve_wire`] | Wire | `R ∝ L / A²` |
//! | [`solve_ohm`] | Ohm's law | `I = V / R` |
//! | [`solve_series_parallel`] | Resistor networks | `R = ΣRk` or `1/R = Σ1/Rk` |
//! | [`solve_closed_circuit`] | Closed circuit | `I = E / (R + r)`, `V = E - I r` |
//! | [`solve_two_loop`] | Kirchhoff | 2x2 loop equations |

mod closed_circuit;
mod ohm;
mod series_parallel;
mod two_loop;
mod wire;

pub use closed_circuit::{solve_closed_circuit, ClosedCircuitSolution};
pub use ohm::{solve_ohm, ChartPoint, OhmSolution, CHART_MAX_CURRENT};
pub use series_parallel::{solve_series_parallel, BranchValue, SeriesParallelSolution};
pub use two_loop::{determinant, solve_two_loop, CurrentDirection, SolvedCurrents};
pub use wire::{solve_wire, WireSolution};
