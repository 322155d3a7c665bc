//! Vehicle parameter records used to check feasibility and drive the simulator.

use aev_core::units::mph_to_ms;
use thiserror::Error;

/// Errors surfaced when a vehicle definition fails validation.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("vehicle parameter '{field}' must be strictly positive and finite, got {value}")]
    InvalidParameter { field: &'static str, value: f64 },
}

/// Design parameters for a single vehicle. All fields are SI.
///
/// Invariant: every numeric field is strictly positive and finite once
/// [`VehicleParameters::validate`] has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleParameters {
    pub name: String,
    /// Speed cap applied to the velocity state (m/s).
    pub max_velocity_ms: f64,
    /// Magnitude bound for both acceleration and braking (m/s²).
    pub max_accel_ms2: f64,
    /// Bound on the rate of change of acceleration (m/s³).
    pub max_jerk_ms3: f64,
    /// Aerodynamic drag coefficient (dimensionless).
    pub drag_coefficient: f64,
    /// Rolling resistance coefficient (dimensionless).
    pub rolling_resistance: f64,
    pub mass_kg: f64,
    pub frontal_area_m2: f64,
}

impl VehicleParameters {
    /// The reference city vehicle used throughout the design study:
    /// 25 mph speed cap, 1 m/s² accel/brake, 2.5 m/s³ jerk, 1350 kg.
    pub fn city_default() -> Self {
        Self {
            name: "city-default".to_string(),
            max_velocity_ms: mph_to_ms(25.0),
            max_accel_ms2: 1.0,
            max_jerk_ms3: 2.5,
            drag_coefficient: 0.5,
            rolling_resistance: 0.03,
            mass_kg: 1_350.0,
            frontal_area_m2: 2.646,
        }
    }

    /// Check every numeric field against the strict-positivity invariant.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let fields = [
            ("max_velocity_ms", self.max_velocity_ms),
            ("max_accel_ms2", self.max_accel_ms2),
            ("max_jerk_ms3", self.max_jerk_ms3),
            ("drag_coefficient", self.drag_coefficient),
            ("rolling_resistance", self.rolling_resistance),
            ("mass_kg", self.mass_kg),
            ("frontal_area_m2", self.frontal_area_m2),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidParameter { field, value });
            }
        }
        Ok(())
    }

    /// Consume and return the record once validation has passed.
    pub fn validated(self) -> Result<Self, ParameterError> {
        self.validate()?;
        Ok(self)
    }
}
