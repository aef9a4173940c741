//! Control domains: the `[min, max, step]` range of each lab slider.

/// The range an input control allows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ControlDomain {
    /// Create a new control domain.
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Check whether a value lies inside the domain.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the domain.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Every value the control can take, from `min` to `max` in `step` increments.
    pub fn values(&self) -> impl Iterator<Item = f64> {
        let ControlDomain { min, max, step } = *self;
        let count = ((max - min) / step + 1e-9).floor() as usize + 1;
        (0..count).map(move |k| (min + k as f64 * step).min(max))
    }
}

/// Wire length multiplier.
pub const WIRE_LENGTH: ControlDomain = ControlDomain::new(0.5, 3.0, 0.1);
/// Wire cross-section multiplier.
pub const WIRE_AREA: ControlDomain = ControlDomain::new(0.5, 2.0, 0.1);

/// Ohm's law voltage (V).
pub const OHM_VOLTAGE: ControlDomain = ControlDomain::new(1.0, 50.0, 1.0);
/// Ohm's law resistance (Ω).
pub const OHM_RESISTANCE: ControlDomain = ControlDomain::new(1.0, 20.0, 1.0);

/// Series/parallel resistor (Ω).
pub const NETWORK_RESISTANCE: ControlDomain = ControlDomain::new(1.0, 50.0, 1.0);

/// Battery EMF (V), shared by the resistor network and closed-circuit labs.
pub const BATTERY_EMF: ControlDomain = ControlDomain::new(1.0, 24.0, 0.5);
/// Battery internal resistance (Ω).
pub const INTERNAL_RESISTANCE: ControlDomain = ControlDomain::new(0.0, 5.0, 0.1);
/// External load (Ω).
pub const EXTERNAL_RESISTANCE: ControlDomain = ControlDomain::new(1.0, 50.0, 0.5);

/// Kirchhoff lab EMF (V).
pub const LOOP_EMF: ControlDomain = ControlDomain::new(1.0, 24.0, 0.5);
/// Kirchhoff lab resistor (Ω).
pub const LOOP_RESISTANCE: ControlDomain = ControlDomain::new(1.0, 20.0, 0.5);
