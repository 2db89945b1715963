//! Wind-aligned frame: translate to the source, rotate counter-clockwise by the
//! wind direction.
//!
//! Axis convention
//! - Rotated `x` (`rx`) is the radial (cross-wind) axis, rotated `y` (`ry`) the
//!   downstream axis.
//! - Exposed distances are negated: `downstream_dist = -ry`, `radial_dist = -rx`.
//!   Region tests work on the pre-negation `rx`/`ry`.

use nalgebra::{matrix, Matrix2, Vector2};
use serde::Serialize;

/// Rotation for one wind direction (degrees, any real value).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindFrame {
    rot: Matrix2<f64>,
}

impl WindFrame {
    pub fn new(wind_direction_deg: f64) -> Self {
        let th = wind_direction_deg.to_radians();
        let (s, c) = th.sin_cos();
        Self {
            rot: matrix![c, -s; s, c],
        }
    }

    /// Rotate a translated displacement `dst - src`.
    #[inline]
    pub fn rotate(&self, delta: Vector2<f64>) -> FrameCoords {
        let r = self.rot * delta;
        FrameCoords { rx: r.x, ry: r.y }
    }

    /// Displacement from `src` to `dst` expressed in this frame.
    #[inline]
    pub fn relative(&self, src: Vector2<f64>, dst: Vector2<f64>) -> FrameCoords {
        self.rotate(dst - src)
    }
}

/// Rotated displacement of a destination relative to its source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameCoords {
    pub rx: f64,
    pub ry: f64,
}

impl FrameCoords {
    /// Positive when the destination lies downwind of the source.
    #[inline]
    pub fn downstream_dist(&self) -> f64 {
        -self.ry
    }

    #[inline]
    pub fn radial_dist(&self) -> f64 {
        -self.rx
    }
}
