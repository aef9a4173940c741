//! Circuit parameters, their validation, and the control domains that bound them.
//!
//! Each lab simulation takes one plain parameter struct. The structs carry
//! the lab's start-up values as their [`Default`], and [`controls`] holds the
//! `[min, max, step]` range of every slider that feeds them.

pub mod controls;
mod types;
mod validate;

pub use controls::ControlDomain;
pub use types::*;
pub use validate::{ensure_finite, require_finite, require_non_negative, require_positive};
