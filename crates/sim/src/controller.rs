//! Braking-distance-aware bang-bang motion control with jerk-limited
//! acceleration tracking.

use aev_vehicle::VehicleParameters;

/// Two-phase braking breakdown from a given kinematic state to standstill.
///
/// Phase one ramps acceleration down to `-max_accel` at the jerk limit;
/// phase two holds `-max_accel` until the remaining velocity is gone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingProfile {
    pub jerk_phase_time_s: f64,
    pub jerk_phase_distance_m: f64,
    /// Velocity at the end of the jerk phase (m/s).
    pub velocity_after_jerk_ms: f64,
    pub constant_phase_distance_m: f64,
    pub total_distance_m: f64,
}

impl StoppingProfile {
    const ZERO: Self = Self {
        jerk_phase_time_s: 0.0,
        jerk_phase_distance_m: 0.0,
        velocity_after_jerk_ms: 0.0,
        constant_phase_distance_m: 0.0,
        total_distance_m: 0.0,
    };
}

/// Stopping distance under maximum braking, accounting for the jerk-limited
/// ramp from the current acceleration down to full deceleration.
///
/// If the jerk phase alone would stop the vehicle, the constant phase is
/// taken as zero distance rather than solved for the in-phase stop, which
/// slightly underestimates the true stopping distance. Kept for parity with
/// historical results.
pub fn stopping_profile(
    velocity: f64,
    current_accel: f64,
    params: &VehicleParameters,
) -> StoppingProfile {
    if velocity <= 0.0 {
        return StoppingProfile::ZERO;
    }

    let target_decel = -params.max_accel_ms2;

    // Jerk phase: constant-jerk polynomials integrated over the ramp time.
    // Skipped entirely when braking is already at or beyond the target.
    let (t_j, d_j, v_after) = if current_accel > target_decel {
        let t = (current_accel - target_decel) / params.max_jerk_ms3;
        let d = velocity * t + 0.5 * current_accel * t * t
            - params.max_jerk_ms3 * t * t * t / 6.0;
        let v = velocity + current_accel * t - 0.5 * params.max_jerk_ms3 * t * t;
        (t, d, v)
    } else {
        (0.0, 0.0, velocity)
    };

    // Constant-deceleration phase: v² = 2·a·d for whatever velocity is left.
    let d_c = if v_after > 0.0 {
        v_after * v_after / (2.0 * params.max_accel_ms2)
    } else {
        0.0
    };

    StoppingProfile {
        jerk_phase_time_s: t_j,
        jerk_phase_distance_m: d_j,
        velocity_after_jerk_ms: v_after,
        constant_phase_distance_m: d_c,
        total_distance_m: d_j + d_c,
    }
}

/// Total stopping distance (m); see [`stopping_profile`].
pub fn stopping_distance(velocity: f64, current_accel: f64, params: &VehicleParameters) -> f64 {
    stopping_profile(velocity, current_accel, params).total_distance_m
}

/// Choose the commanded acceleration for the upcoming step.
///
/// Regime selection is bang-bang: full braking once the segment end is
/// within stopping distance, full acceleration below the speed cap, cruise
/// otherwise. The step-to-step change is then limited to `max_jerk * dt`,
/// which realizes bounded-jerk tracking without carrying jerk as a state
/// variable.
pub fn decide_acceleration(
    distance_remaining: f64,
    velocity: f64,
    current_accel: f64,
    params: &VehicleParameters,
    dt: f64,
) -> f64 {
    let target = if distance_remaining <= stopping_distance(velocity, current_accel, params) {
        -params.max_accel_ms2
    } else if velocity < params.max_velocity_ms {
        params.max_accel_ms2
    } else {
        0.0
    };

    let bound = params.max_jerk_ms3 * dt;
    let gap = target - current_accel;
    if gap.abs() <= bound {
        target
    } else {
        current_accel + bound.copysign(gap)
    }
}
