//! Core units and constants shared across the AEV route energy workspace.

/// Physical and model constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational acceleration used by the power model (m/s²).
    pub const GRAVITY_MS2: f64 = 9.81;
    /// Aerodynamic power factor, one half the sea-level air density (kg/m³ / 2).
    pub const AERO_POWER_FACTOR: f64 = 0.6125;
    /// Empirical drivetrain/inertial loss factor applied to the acceleration term.
    pub const DRIVETRAIN_LOSS_FACTOR: f64 = 0.107;
    /// Metres per statute mile.
    pub const METRES_PER_MILE: f64 = 1_609.344;
    /// Default integration timestep for segment simulation (s).
    pub const DEFAULT_TIMESTEP_S: f64 = 0.1;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::METRES_PER_MILE;

    /// Convert miles per hour to metres per second.
    #[inline]
    pub fn mph_to_ms(v: f64) -> f64 {
        v * METRES_PER_MILE / 3_600.0
    }

    /// Convert metres per second to miles per hour.
    #[inline]
    pub fn ms_to_mph(v: f64) -> f64 {
        v * 3_600.0 / METRES_PER_MILE
    }

    /// Convert metres per second to kilometres per hour.
    #[inline]
    pub fn ms_to_kmh(v: f64) -> f64 {
        v * 3.6
    }

    /// Convert joules to watt-hours.
    #[inline]
    pub fn joules_to_watt_hours(e: f64) -> f64 {
        e / 3_600.0
    }

    /// Convert watt-hours to joules.
    #[inline]
    pub fn watt_hours_to_joules(e: f64) -> f64 {
        e * 3_600.0
    }
}
