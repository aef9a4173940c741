//! # Ohm Lab
//!
//! The circuit-solving core of an interactive electricity lab.
//!
//! This library provides:
//! - Closed-form solvers for the lab's circuits: wire resistance, Ohm's law,
//!   series/parallel resistor networks, a battery with internal resistance,
//!   and a two-loop Kirchhoff circuit
//! - Control domains for every adjustable input
//! - A session type that recomputes every derived quantity when a control moves
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`circuit`] - Parameter types, validation, and control domains
//! - [`solver`] - Pure solver functions
//! - [`lab`] - Simulation dispatch and live session state
//! - [`report`] - Plain-text rendering of results
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use ohm_lab::circuit::TwoLoopParams;
//! use ohm_lab::solver::solve_two_loop;
//!
//! let currents = solve_two_loop(&TwoLoopParams::default()).unwrap();
//! assert!((currents.i1 + currents.i2 - currents.i3).abs() < 1e-9);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! ohm-lab series-parallel --topology parallel --set r1=20 --format json
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmLab } from 'ohm_lab';
//!
//! const lab = new WasmLab('closed-circuit');
//! lab.set('external', 22);
//! lab.quantity('v_terminal'); // 11
//! ```

pub mod circuit;
pub mod error;
pub mod lab;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use error::{LabError, Result};
pub use lab::{LabConfig, LabSession, Simulation, SimulationKind, Solution};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmLab;

/// Supply voltage of the resistor network and closed-circuit labs (volts)
pub const DEFAULT_SUPPLY_VOLTAGE: f64 = 12.0;

/// Largest node imbalance `|I1 + I2 - I3|` still reported as balanced (amps)
pub const DEFAULT_KCL_TOLERANCE: f64 = 1e-9;
