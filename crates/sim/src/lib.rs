//! Segment-level kinematic and power simulation.
//!
//! A [`Segment`] is a straight route portion with a length and a net
//! elevation change. [`SegmentSim`] advances a vehicle across it with a
//! fixed-timestep integration loop: the controller picks a jerk-limited
//! acceleration each step, the power model prices the step, and the
//! integrator accumulates elapsed time and consumed energy, closing the
//! segment with one fractional step so the final position lands exactly on
//! the boundary.

pub mod controller;
pub mod integrator;
pub mod power;
pub mod segment;

pub use controller::{StoppingProfile, decide_acceleration, stopping_distance, stopping_profile};
pub use integrator::{SegmentResult, SegmentSim, SimError, StepRecord, simulate_segment};
pub use power::power_required;
pub use segment::Segment;
