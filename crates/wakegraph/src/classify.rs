//! Influence classification: cone, cylinder, and distance tests per candidate pair.
//!
//! Model
//! - A destination is influenced by its source iff it lies in the downstream cone
//!   or the downstream cylinder, and within `influence_dist` (Euclidean).
//! - Cone: `ry <= a*rx && ry <= -a*rx` with `a = cone_slope(θ)`.
//! - Cylinder: `|rx| <= radius && ry < 0`; covers the axis near the source where
//!   the cone is narrow.
//!
//! Evaluation is a pure batch over all candidates (`classify_all`); the
//! `parallel` feature splits source rows across rayon workers without changing
//! the output order.
//!
//! Code cross-refs: `frame::{WindFrame, FrameCoords}`, `cfg::cone_slope`, `pairs`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::frame::{FrameCoords, WindFrame};
use crate::pairs::{candidate_count, row_pairs};
use crate::points::PointSet;

/// Per-edge scalars. `dist` is frame-independent; the other two are signed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    pub dist: f64,
    pub downstream_dist: f64,
    pub radial_dist: f64,
}

/// Outcome for one candidate pair (kept or not).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub coords: FrameCoords,
    pub attrs: EdgeAttributes,
    pub in_cone: bool,
    pub in_cylinder: bool,
    pub in_range: bool,
}

impl Classification {
    #[inline]
    pub fn is_influential(&self) -> bool {
        (self.in_cone || self.in_cylinder) && self.in_range
    }
}

/// A classified candidate pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub src: usize,
    pub dst: usize,
    pub class: Classification,
}

/// Prepared influence region for one wind condition (see `InfluenceCfg::validate`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InfluenceRegion {
    frame: WindFrame,
    slope: f64,
    influence_dist: f64,
    influence_radius: f64,
}

impl InfluenceRegion {
    /// Parameters are trusted here; go through `InfluenceCfg::validate` for checks.
    pub(crate) fn new(
        wind_direction_deg: f64,
        slope: f64,
        influence_dist: f64,
        influence_radius: f64,
    ) -> Self {
        Self {
            frame: WindFrame::new(wind_direction_deg),
            slope,
            influence_dist,
            influence_radius,
        }
    }

    /// Cone half-line slope `a` (already rounded).
    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    #[inline]
    pub fn in_cone(&self, c: &FrameCoords) -> bool {
        c.ry <= self.slope * c.rx && c.ry <= -self.slope * c.rx
    }

    #[inline]
    pub fn in_cylinder(&self, c: &FrameCoords) -> bool {
        c.rx.abs() <= self.influence_radius && c.ry < 0.0
    }

    /// Classify the displacement `delta = dst - src`.
    pub fn classify_delta(&self, delta: Vector2<f64>) -> Classification {
        let dist = delta.norm();
        let coords = self.frame.rotate(delta);
        Classification {
            coords,
            attrs: EdgeAttributes {
                dist,
                downstream_dist: coords.downstream_dist(),
                radial_dist: coords.radial_dist(),
            },
            in_cone: self.in_cone(&coords),
            in_cylinder: self.in_cylinder(&coords),
            in_range: dist <= self.influence_dist,
        }
    }

    #[inline]
    pub fn classify(&self, src: Vector2<f64>, dst: Vector2<f64>) -> Classification {
        self.classify_delta(dst - src)
    }

    /// Classify every candidate pair of `points`, row-major, unfiltered.
    pub fn classify_all(&self, points: &PointSet) -> Vec<Candidate> {
        let n = points.count();
        let pos = points.positions();
        let row = move |i: usize| {
            row_pairs(i, n).map(move |(src, dst)| Candidate {
                src,
                dst,
                class: self.classify(pos[src], pos[dst]),
            })
        };
        collect_rows(n, row)
    }

    /// Influential candidates only, in row-major order.
    pub fn influential(&self, points: &PointSet) -> Vec<Candidate> {
        let mut all = self.classify_all(points);
        all.retain(|c| c.class.is_influential());
        all
    }
}

#[cfg(not(feature = "parallel"))]
fn collect_rows<F, I>(n: usize, row: F) -> Vec<Candidate>
where
    F: Fn(usize) -> I,
    I: Iterator<Item = Candidate>,
{
    let mut out = Vec::with_capacity(candidate_count(n));
    out.extend((0..n).flat_map(row));
    out
}

// Rows run on rayon workers; `par_extend` keeps row-major order.
#[cfg(feature = "parallel")]
fn collect_rows<F, I>(n: usize, row: F) -> Vec<Candidate>
where
    F: Fn(usize) -> I + Send + Sync,
    I: Iterator<Item = Candidate>,
{
    use rayon::prelude::*;
    let mut out = Vec::with_capacity(candidate_count(n));
    out.par_extend((0..n).into_par_iter().flat_map_iter(row));
    out
}
