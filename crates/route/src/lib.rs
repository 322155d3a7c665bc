//! Route-level orchestration: simulate segments in order and thread
//! cumulative length, time, and energy from one segment to the next.

use serde::Serialize;
use thiserror::Error;

use aev_sim::{SegmentResult, SimError, simulate_segment};
use aev_vehicle::VehicleParameters;

/// One route segment as handed over by the (out-of-process) segment
/// builder: an ordinal id, a length, and a net elevation change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSegment {
    pub id: u32,
    pub length_m: f64,
    pub elev_change_m: f64,
}

/// Per-segment row of the route results table, with running totals.
///
/// `cumulative_time_s` doubles as the continuation offset for stitching
/// per-segment traces back into one route-long timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentSummary {
    pub id: u32,
    pub length_m: f64,
    pub cumulative_length_m: f64,
    pub elev_change_m: f64,
    pub time_s: f64,
    pub cumulative_time_s: f64,
    pub energy_j: f64,
    pub cumulative_energy_j: f64,
}

/// Aggregated route results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub segments: Vec<SegmentSummary>,
    pub total_length_m: f64,
    pub total_time_s: f64,
    pub total_energy_j: f64,
}

/// Top-level route simulation error. A failing segment aborts the route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("segment {id} failed: {source}")]
    Segment {
        id: u32,
        #[source]
        source: SimError,
    },
}

/// Simulate every segment strictly in order and fold the running totals.
pub fn simulate_route(
    segments: &[RouteSegment],
    params: &VehicleParameters,
    dt: f64,
) -> Result<RouteSummary, RouteError> {
    let results = segments
        .iter()
        .map(|segment| simulate_one(segment, params, dt))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(fold_results(segments, &results))
}

/// Simulate segments in parallel, then fold the results in original order.
/// Totals are identical to [`simulate_route`]; segments are independent
/// computations and only the fold is order-sensitive.
#[cfg(feature = "parallel")]
pub fn simulate_route_parallel(
    segments: &[RouteSegment],
    params: &VehicleParameters,
    dt: f64,
) -> Result<RouteSummary, RouteError> {
    use rayon::prelude::*;

    let results = segments
        .par_iter()
        .map(|segment| simulate_one(segment, params, dt))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(fold_results(segments, &results))
}

fn simulate_one(
    segment: &RouteSegment,
    params: &VehicleParameters,
    dt: f64,
) -> Result<SegmentResult, RouteError> {
    simulate_segment(segment.length_m, segment.elev_change_m, params, dt).map_err(|source| {
        RouteError::Segment {
            id: segment.id,
            source,
        }
    })
}

fn fold_results(segments: &[RouteSegment], results: &[SegmentResult]) -> RouteSummary {
    let mut rows = Vec::with_capacity(segments.len());
    let mut total_length_m = 0.0;
    let mut total_time_s = 0.0;
    let mut total_energy_j = 0.0;

    for (segment, result) in segments.iter().zip(results) {
        total_length_m += segment.length_m;
        total_time_s += result.time_s;
        total_energy_j += result.energy_j;
        rows.push(SegmentSummary {
            id: segment.id,
            length_m: segment.length_m,
            cumulative_length_m: total_length_m,
            elev_change_m: segment.elev_change_m,
            time_s: result.time_s,
            cumulative_time_s: total_time_s,
            energy_j: result.energy_j,
            cumulative_energy_j: total_energy_j,
        });
    }

    log::debug!(
        "route done: {} segments, {:.1} m, {:.1} s, {:.0} J",
        rows.len(),
        total_length_m,
        total_time_s,
        total_energy_j
    );

    RouteSummary {
        segments: rows,
        total_length_m,
        total_time_s,
        total_energy_j,
    }
}

pub mod vehicle {
    //! Conversion and selection of vehicles from configuration catalogs.

    use aev_config::VehicleConfig;
    use aev_vehicle::{ParameterError, VehicleParameters};
    use thiserror::Error;

    /// Errors surfaced when selecting or converting vehicles.
    #[derive(Debug, Error)]
    pub enum VehicleError {
        #[error("vehicle '{0}' not found in catalog")]
        NotFound(String),
        #[error("vehicle catalog is empty")]
        EmptyCatalog,
        #[error(transparent)]
        Invalid(#[from] ParameterError),
    }

    /// Convert a parsed `VehicleConfig` into the validated runtime record.
    pub fn from_config(config: &VehicleConfig) -> Result<VehicleParameters, VehicleError> {
        let params = VehicleParameters {
            name: config.name.clone(),
            max_velocity_ms: config.max_velocity_ms,
            max_accel_ms2: config.max_accel_ms2,
            max_jerk_ms3: config.max_jerk_ms3,
            drag_coefficient: config.drag_coefficient,
            rolling_resistance: config.rolling_resistance,
            mass_kg: config.mass_kg,
            frontal_area_m2: config.frontal_area_m2,
        };
        Ok(params.validated()?)
    }

    /// Select a vehicle from the catalog by optional name (case-insensitive),
    /// defaulting to the first entry.
    pub fn select(
        configs: &[VehicleConfig],
        requested: Option<&str>,
    ) -> Result<VehicleParameters, VehicleError> {
        if configs.is_empty() {
            return Err(VehicleError::EmptyCatalog);
        }

        let chosen = if let Some(name) = requested {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| VehicleError::NotFound(name.to_string()))?
        } else {
            &configs[0]
        };

        from_config(chosen)
    }
}
