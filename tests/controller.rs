use aev_route_energy::sim::{decide_acceleration, stopping_distance, stopping_profile};
use aev_route_energy::vehicle::VehicleParameters;

const DT: f64 = 0.1;

#[test]
fn jerk_phase_time_matches_constant_jerk_kinematics() {
    // Ramping from +max_accel down to -max_accel at 2.5 m/s³ takes
    // (1 - (-1)) / 2.5 = 0.8 s.
    let params = VehicleParameters::city_default();
    let profile = stopping_profile(params.max_velocity_ms, params.max_accel_ms2, &params);

    assert!((profile.jerk_phase_time_s - 0.8).abs() < 1e-12);

    // With a = +1 and t = 0.8 the velocity gained during the ramp cancels
    // exactly: v + a·t - ½·j·t² = v + 0.8 - 0.8.
    assert!((profile.velocity_after_jerk_ms - params.max_velocity_ms).abs() < 1e-9);

    // Constant phase from v² = 2·a·d, and the total is the sum of phases.
    let expected_constant =
        params.max_velocity_ms * params.max_velocity_ms / (2.0 * params.max_accel_ms2);
    assert!((profile.constant_phase_distance_m - expected_constant).abs() < 1e-9);
    assert!(
        (profile.total_distance_m
            - (profile.jerk_phase_distance_m + profile.constant_phase_distance_m))
            .abs()
            < 1e-12
    );
}

#[test]
fn stationary_vehicle_needs_no_stopping_distance() {
    let params = VehicleParameters::city_default();
    assert_eq!(stopping_distance(0.0, 0.0, &params), 0.0);
    assert_eq!(stopping_distance(-1.0, 0.5, &params), 0.0);
}

#[test]
fn jerk_phase_skipped_when_already_at_full_braking() {
    let params = VehicleParameters::city_default();
    let v = 8.0;
    let profile = stopping_profile(v, -params.max_accel_ms2, &params);

    assert_eq!(profile.jerk_phase_time_s, 0.0);
    assert_eq!(profile.jerk_phase_distance_m, 0.0);
    // The whole stop is the constant phase from the current velocity.
    assert!((profile.total_distance_m - v * v / (2.0 * params.max_accel_ms2)).abs() < 1e-12);
}

#[test]
fn cruises_at_speed_cap_far_from_segment_end() {
    let params = VehicleParameters::city_default();
    let accel = decide_acceleration(1.0e6, params.max_velocity_ms, 0.0, &params, DT);
    assert_eq!(accel, 0.0);
}

#[test]
fn acceleration_change_is_rate_limited_by_jerk() {
    let params = VehicleParameters::city_default();
    let bound = params.max_jerk_ms3 * DT;

    // Far from the boundary, below the cap: target is +max_accel, but only
    // one jerk-bound worth of change is allowed per step.
    let first = decide_acceleration(1.0e6, 1.0, 0.0, &params, DT);
    assert!((first - bound).abs() < 1e-12);

    let second = decide_acceleration(1.0e6, 1.0, first, &params, DT);
    assert!((second - 2.0 * bound).abs() < 1e-12);

    // Once within one bound of the target, snap straight to it.
    let nearly = params.max_accel_ms2 - 0.5 * bound;
    let snapped = decide_acceleration(1.0e6, 1.0, nearly, &params, DT);
    assert_eq!(snapped, params.max_accel_ms2);
}

#[test]
fn brakes_once_inside_stopping_distance() {
    let params = VehicleParameters::city_default();
    let v = params.max_velocity_ms;

    // One metre left at full speed: braking regime, rate-limited downward.
    let easing = decide_acceleration(1.0, v, 0.0, &params, DT);
    assert!((easing - (-params.max_jerk_ms3 * DT)).abs() < 1e-12);

    // Already at full braking: stays there.
    let held = decide_acceleration(1.0, v, -params.max_accel_ms2, &params, DT);
    assert_eq!(held, -params.max_accel_ms2);
}
