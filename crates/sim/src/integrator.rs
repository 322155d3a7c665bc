//! Fixed-timestep segment integrator.

use serde::Serialize;
use thiserror::Error;

use aev_vehicle::{ParameterError, VehicleParameters};

use crate::controller::decide_acceleration;
use crate::power::power_required;
use crate::segment::Segment;

/// Errors raised before or during a single segment simulation. All are
/// fatal to that segment; no partial results are returned.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    InvalidParameter(#[from] ParameterError),
    #[error("vehicle can never move: max velocity is {0} m/s")]
    StuckVehicle(f64),
    #[error("segment must have finite, non-negative geometry, got length {length_m} m, elevation change {elev_change_m} m")]
    InvalidSegment { length_m: f64, elev_change_m: f64 },
    #[error("timestep must be finite and positive, got {0} s")]
    InvalidTimestep(f64),
}

/// One integration step of the trace, ordered by time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepRecord {
    pub time_s: f64,
    pub speed_ms: f64,
    pub acceleration_ms2: f64,
    pub step_distance_m: f64,
    pub distance_m: f64,
    pub power_w: f64,
    pub step_energy_j: f64,
    pub energy_j: f64,
}

/// Totals returned once a segment has been traversed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentResult {
    pub energy_j: f64,
    pub time_s: f64,
    pub length_m: f64,
    pub steps: usize,
}

/// Simulation state owned by the integration loop, discarded on completion.
#[derive(Debug, Clone, Copy)]
struct KinematicState {
    position_m: f64,
    velocity_ms: f64,
    accel_ms2: f64,
    time_s: f64,
    energy_j: f64,
}

/// Lazy segment simulation: an iterator yielding one [`StepRecord`] per
/// timestep until the vehicle reaches the end of the segment.
///
/// The loop always terminates: from rest the controller ramps acceleration
/// up at the jerk limit, so velocity becomes positive and position grows
/// monotonically toward the boundary, where the closing step is shortened
/// to land exactly on the segment length.
#[derive(Debug)]
pub struct SegmentSim<'a> {
    params: &'a VehicleParameters,
    segment: Segment,
    incline: f64,
    dt: f64,
    state: KinematicState,
    done: bool,
}

impl<'a> SegmentSim<'a> {
    /// Set up a simulation, failing fast on inputs that could produce a
    /// silently wrong or non-terminating run.
    pub fn new(
        segment: Segment,
        params: &'a VehicleParameters,
        dt: f64,
    ) -> Result<Self, SimError> {
        if params.max_velocity_ms <= 0.0 {
            return Err(SimError::StuckVehicle(params.max_velocity_ms));
        }
        params.validate()?;
        if !segment.length_m.is_finite()
            || segment.length_m < 0.0
            || !segment.elev_change_m.is_finite()
        {
            return Err(SimError::InvalidSegment {
                length_m: segment.length_m,
                elev_change_m: segment.elev_change_m,
            });
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimestep(dt));
        }

        Ok(Self {
            params,
            segment,
            incline: segment.incline(),
            dt,
            state: KinematicState {
                position_m: 0.0,
                velocity_ms: 0.0,
                accel_ms2: 0.0,
                time_s: 0.0,
                energy_j: 0.0,
            },
            done: false,
        })
    }

    /// Drain the trace and return the accumulated totals.
    pub fn run(mut self) -> SegmentResult {
        let mut steps = 0usize;
        for _ in &mut self {
            steps += 1;
        }
        let result = SegmentResult {
            energy_j: self.state.energy_j,
            time_s: self.state.time_s,
            length_m: self.segment.length_m,
            steps,
        };
        log::debug!(
            "segment done: {:.1} m in {:.2} s, {:.0} J, {} steps",
            result.length_m,
            result.time_s,
            result.energy_j,
            steps
        );
        result
    }
}

impl Iterator for SegmentSim<'_> {
    type Item = StepRecord;

    fn next(&mut self) -> Option<StepRecord> {
        if self.done || self.state.position_m >= self.segment.length_m {
            return None;
        }

        let remaining = self.segment.length_m - self.state.position_m;
        let accel = decide_acceleration(
            remaining,
            self.state.velocity_ms,
            self.state.accel_ms2,
            self.params,
            self.dt,
        );
        self.state.accel_ms2 = accel;

        let velocity =
            (self.state.velocity_ms + accel * self.dt).clamp(0.0, self.params.max_velocity_ms);
        self.state.velocity_ms = velocity;

        // Overshoot check: shorten the closing step so position lands
        // exactly on the boundary. A stationary vehicle keeps the full dt
        // rather than dividing by zero.
        let tentative = self.state.position_m + velocity * self.dt;
        let (step_dt, step_distance) = if tentative >= self.segment.length_m {
            self.done = true;
            self.state.position_m = self.segment.length_m;
            let step_dt = if velocity > 0.0 {
                remaining / velocity
            } else {
                self.dt
            };
            (step_dt, remaining)
        } else {
            self.state.position_m = tentative;
            (self.dt, velocity * self.dt)
        };

        let power = power_required(accel, velocity, self.incline, self.params);
        // Negative power is discarded, not banked: no regenerative recovery.
        let step_energy = if power > 0.0 { power * step_dt } else { 0.0 };
        self.state.energy_j += step_energy;
        self.state.time_s += step_dt;

        Some(StepRecord {
            time_s: self.state.time_s,
            speed_ms: velocity,
            acceleration_ms2: accel,
            step_distance_m: step_distance,
            distance_m: self.state.position_m,
            power_w: power,
            step_energy_j: step_energy,
            energy_j: self.state.energy_j,
        })
    }
}

/// Simulate one segment to completion and return its totals.
pub fn simulate_segment(
    length_m: f64,
    elev_change_m: f64,
    params: &VehicleParameters,
    dt: f64,
) -> Result<SegmentResult, SimError> {
    SegmentSim::new(Segment::new(length_m, elev_change_m), params, dt).map(SegmentSim::run)
}
