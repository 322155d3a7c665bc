//! Route segment descriptor.

/// A straight route portion with a fixed length and net elevation change,
/// the unit of simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub length_m: f64,
    /// Signed: positive uphill, negative downhill.
    pub elev_change_m: f64,
}

impl Segment {
    pub fn new(length_m: f64, elev_change_m: f64) -> Self {
        Self {
            length_m,
            elev_change_m,
        }
    }

    /// Flat segment of the given length.
    pub fn flat(length_m: f64) -> Self {
        Self::new(length_m, 0.0)
    }

    /// Pitch angle of the segment in radians, `atan(rise / run)`.
    ///
    /// The angle itself is used as the grade term in the power model, a
    /// small-angle stand-in for the tangent. Zero-length segments have an
    /// incline of 0 by policy so degenerate geometry never divides by zero.
    pub fn incline(&self) -> f64 {
        if self.length_m == 0.0 {
            0.0
        } else {
            (self.elev_change_m / self.length_m).atan()
        }
    }
}
