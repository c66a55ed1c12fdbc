//! Plank constants, in plank units unless noted otherwise.
/// Length of the plank.
pub const PLANK_LENGTH: f64 = 400.0;
/// Pivot position, the centre of the plank.
pub const PIVOT_X: f64 = PLANK_LENGTH / 2.0;
/// Maximum tilt in degrees, either direction.
pub const MAX_ANGLE: i32 = 30;
/// Tilt sensitivity: torque units per degree.
pub const TORQUE_DIVISOR: f64 = 10.0;
/// Lightest weight that can be generated or placed.
pub const MIN_WEIGHT: u8 = 1;
/// Heaviest weight that can be generated or placed.
pub const MAX_WEIGHT: u8 = 10;
