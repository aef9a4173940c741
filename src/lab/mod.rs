//! Simulation dispatch and live lab state.
//!
//! A [`Simulation`] holds the parameters of one lab and dispatches to the
//! matching solver. A [`LabSession`] wraps a simulation for a UI binding:
//! every control change is domain-checked and recomputed in full, with no
//! state carried between recomputations besides the parameters themselves.

mod session;
mod simulation;

pub use session::{LabConfig, LabSession};
pub use simulation::{Quantity, Simulation, SimulationKind, Solution};
