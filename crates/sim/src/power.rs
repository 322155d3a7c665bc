//! Instantaneous tractive power model.

use aev_core::constants::{AERO_POWER_FACTOR, DRIVETRAIN_LOSS_FACTOR, GRAVITY_MS2};
use aev_vehicle::VehicleParameters;

/// Tractive power (W) demanded at the wheels for the given operating point.
///
/// `power = 0.6125·A·Cd·v³ + g·m·v·(Crr + incline + 0.107·a)`
///
/// `incline` is the segment pitch angle in radians, used directly as a
/// grade term (small-angle approximation of the tangent). The result can be
/// negative on steep descents or under braking; callers decide what to do
/// with negative power — the segment integrator discards it, since no
/// regenerative recovery is modelled.
pub fn power_required(
    acceleration: f64,
    velocity: f64,
    incline: f64,
    params: &VehicleParameters,
) -> f64 {
    AERO_POWER_FACTOR * params.frontal_area_m2 * params.drag_coefficient * velocity.powi(3)
        + GRAVITY_MS2
            * params.mass_kg
            * velocity
            * (params.rolling_resistance + incline + DRIVETRAIN_LOSS_FACTOR * acceleration)
}
