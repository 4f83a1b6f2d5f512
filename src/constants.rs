/// Fixed conversion factors and formula coefficients.
///
/// Every value here is process-wide and immutable; nothing in the crate
/// reads units or coefficients from configuration.

// -- Unit conversions --

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Multiply km/h by this to get m/s.
pub const KMH_TO_MS: f64 = 1000.0 / 3600.0;

/// Minutes in one hour.
pub const MIN_IN_H: f64 = 60.0;

/// Centimeters in one meter.
pub const CM_IN_M: f64 = 100.0;

// -- Step lengths [m] --

/// Distance covered by one step on land (running, sports walking).
pub const LAND_STEP_M: f64 = 0.65;

/// Distance covered by one swimming stroke.
pub const SWIM_STROKE_M: f64 = 1.38;

// -- Running --

pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 1.79;

// -- Sports walking --

/// Weight coefficient of the base metabolic term.
pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Coefficient of the speed²/height term.
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// -- Swimming --

pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;
