//! Two-loop Kirchhoff circuit.
//!
//! Writing Kirchhoff's voltage law around each loop, with `I3 = I1 + I2`
//! through the shared branch, gives
//!
//! ```text
//! | R1+R3    R3   | | I1 |   | V1 |
//! |   R3   R2+R3  | | I2 | = | V2 |
//! ```
//!
//! which is solved in closed form (Cramer's rule).

use std::fmt;

use crate::circuit::{ensure_finite, require_finite, require_positive, TwoLoopParams};
use crate::error::{LabError, Result};

/// Direction of a branch current relative to the reference drawn on the
/// circuit diagram.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentDirection {
    /// Positive: flows the way the reference arrow points
    AsAssumed,
    /// Negative: flows against the reference arrow
    Reversed,
    /// Exactly zero
    Zero,
}

impl CurrentDirection {
    /// Classify a current by its sign alone.
    pub fn of(current: f64) -> Self {
        if current > 0.0 {
            CurrentDirection::AsAssumed
        } else if current < 0.0 {
            CurrentDirection::Reversed
        } else {
            CurrentDirection::Zero
        }
    }
}

impl fmt::Display for CurrentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentDirection::AsAssumed => write!(f, "as assumed"),
            CurrentDirection::Reversed => write!(f, "reversed"),
            CurrentDirection::Zero => write!(f, "no current"),
        }
    }
}

/// Branch currents of the two-loop circuit.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvedCurrents {
    /// Left branch (through V1 and R1)
    pub i1: f64,
    /// Right branch (through V2 and R2)
    pub i2: f64,
    /// Shared branch (through R3); always `i1 + i2`
    pub i3: f64,
}

impl SolvedCurrents {
    /// Directions of `[i1, i2, i3]`.
    pub fn directions(&self) -> [CurrentDirection; 3] {
        [
            CurrentDirection::of(self.i1),
            CurrentDirection::of(self.i2),
            CurrentDirection::of(self.i3),
        ]
    }

    /// How far the node currents are from balancing.
    pub fn kcl_residual(&self) -> f64 {
        (self.i1 + self.i2 - self.i3).abs()
    }
}

/// Determinant of the loop matrix, `(R1+R3)(R2+R3) - R3²`.
///
/// Evaluated in its expanded form `R1 R2 + R1 R3 + R2 R3`, which has no
/// subtraction and stays positive for any positive resistances unless the
/// products underflow or overflow.
pub fn determinant(params: &TwoLoopParams) -> f64 {
    let TwoLoopParams { r1, r2, r3, .. } = *params;
    r1 * r2 + r1 * r3 + r2 * r3
}

/// Solve the branch currents.
///
/// Returns [`LabError::SingularSystem`] when the determinant underflows to
/// zero and [`LabError::NonFinite`] when any intermediate or current
/// overflows, never NaN or infinite currents.
pub fn solve_two_loop(params: &TwoLoopParams) -> Result<SolvedCurrents> {
    let v1 = require_finite("v1", params.v1)?;
    let v2 = require_finite("v2", params.v2)?;
    let r1 = require_positive("r1", params.r1)?;
    let r2 = require_positive("r2", params.r2)?;
    let r3 = require_positive("r3", params.r3)?;

    let det = ensure_finite("determinant", determinant(params))?;
    if det == 0.0 {
        tracing::debug!(r1, r2, r3, "two-loop determinant underflowed to zero");
        return Err(LabError::SingularSystem { determinant: det });
    }

    // Cramer numerators regrouped as v1 r2 + (v1 - v2) r3 so a large shared
    // branch does not cancel the small terms away
    let i1 = ensure_finite("i1", (v1 * r2 + (v1 - v2) * r3) / det)?;
    let i2 = ensure_finite("i2", (v2 * r1 + (v2 - v1) * r3) / det)?;
    let i3 = ensure_finite("i3", i1 + i2)?;

    Ok(SolvedCurrents { i1, i2, i3 })
}
