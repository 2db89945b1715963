//! Influence parameters and fixed numeric constants.
//!
//! Policy
//! - Constants are fixed to keep classification reproducible across callers.
//! - `InfluenceCfg` is the caller-facing parameter block; `validate` turns it
//!   into a prepared `InfluenceRegion` (slope precomputed, rotation built).

use serde::{Deserialize, Serialize};

use crate::classify::InfluenceRegion;
use crate::error::ValidationError;

/// Decimal digits kept when rounding the cone slope `tan(90° − θ)`.
pub const SLOPE_ROUND_DIGITS: i32 = 10;

/// Wake influence parameters for one wind condition.
///
/// Angles are in degrees. `influence_angle_th_deg` is the cone half-angle measured
/// from the downstream axis and must lie in `(0, 90)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfluenceCfg {
    pub wind_direction_deg: f64,
    pub influence_angle_th_deg: f64,
    pub influence_dist: f64,
    /// Cylinder half-width around the downstream axis; 0 disables the cylinder.
    #[serde(default)]
    pub influence_radius: f64,
}

impl InfluenceCfg {
    pub fn new(wind_direction_deg: f64, influence_angle_th_deg: f64, influence_dist: f64) -> Self {
        Self {
            wind_direction_deg,
            influence_angle_th_deg,
            influence_dist,
            influence_radius: 0.0,
        }
    }

    pub fn with_radius(mut self, influence_radius: f64) -> Self {
        self.influence_radius = influence_radius;
        self
    }

    pub fn with_wind_direction(mut self, wind_direction_deg: f64) -> Self {
        self.wind_direction_deg = wind_direction_deg;
        self
    }

    /// Check every parameter and prepare the region used by the classifier.
    pub fn validate(&self) -> Result<InfluenceRegion, ValidationError> {
        if !self.wind_direction_deg.is_finite() {
            return Err(ValidationError::NonFiniteWindDirection(
                self.wind_direction_deg,
            ));
        }
        let th = self.influence_angle_th_deg;
        if !(th > 0.0 && th < 90.0) {
            return Err(ValidationError::AngleOutOfRange(th));
        }
        non_negative("influence_dist", self.influence_dist)?;
        non_negative("influence_radius", self.influence_radius)?;
        Ok(InfluenceRegion::new(
            self.wind_direction_deg,
            cone_slope(th),
            self.influence_dist,
            self.influence_radius,
        ))
    }
}

// NaN fails the comparison and is rejected too; +inf is an unbounded cutoff.
fn non_negative(name: &'static str, value: f64) -> Result<(), ValidationError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::Negative { name, value })
    }
}

/// Slope `a` of the cone's bounding half-lines in the rotated frame:
/// `|round(tan(90° − θ), SLOPE_ROUND_DIGITS)|`.
#[inline]
pub fn cone_slope(influence_angle_th_deg: f64) -> f64 {
    let raw = (90.0 - influence_angle_th_deg).to_radians().tan();
    round_decimals(raw, SLOPE_ROUND_DIGITS).abs()
}

#[inline]
fn round_decimals(x: f64, digits: i32) -> f64 {
    let s = 10f64.powi(digits);
    (x * s).round() / s
}
