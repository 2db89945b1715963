//! Turbine layout generators (regular grids and seeded random farms).
//!
//! Random layouts draw uniform positions in a box and reject candidates closer
//! than `min_spacing` to any accepted turbine. Draws are reproducible from the
//! seed alone.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::points::PointSet;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid layout params: {0}")]
    InvalidParams(String),
    #[error("placed {placed} of {requested} turbines after {attempts} attempts")]
    Exhausted {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
}

/// `rows × cols` grid starting at the origin, row-major (x varies fastest).
pub fn grid_layout(
    rows: usize,
    cols: usize,
    spacing_x: f64,
    spacing_y: f64,
) -> Result<PointSet, LayoutError> {
    if !(spacing_x.is_finite() && spacing_y.is_finite()) {
        return Err(LayoutError::InvalidParams(format!(
            "grid spacing must be finite, got ({spacing_x}, {spacing_y})"
        )));
    }
    let count = rows.checked_mul(cols).ok_or_else(|| {
        LayoutError::InvalidParams(format!("grid of {rows} × {cols} turbines overflows"))
    })?;
    let mut pos = Vec::with_capacity(count);
    for r in 0..rows {
        for c in 0..cols {
            pos.push(Vector2::new(c as f64 * spacing_x, r as f64 * spacing_y));
        }
    }
    PointSet::from_positions(pos).map_err(|e| LayoutError::InvalidParams(e.to_string()))
}

/// Random farm configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomLayoutCfg {
    pub num_turbines: usize,
    pub width: f64,
    pub height: f64,
    /// Minimum pairwise distance between accepted turbines.
    pub min_spacing: f64,
    /// Total candidate draws before giving up.
    pub max_attempts: usize,
}

impl Default for RandomLayoutCfg {
    fn default() -> Self {
        Self {
            num_turbines: 20,
            width: 2000.0,
            height: 2000.0,
            min_spacing: 200.0,
            max_attempts: 100_000,
        }
    }
}

impl RandomLayoutCfg {
    fn check(&self) -> Result<(), LayoutError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(LayoutError::InvalidParams(format!(
                "width must be positive and finite, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(LayoutError::InvalidParams(format!(
                "height must be positive and finite, got {}",
                self.height
            )));
        }
        if !(self.min_spacing.is_finite() && self.min_spacing >= 0.0) {
            return Err(LayoutError::InvalidParams(format!(
                "min_spacing must be non-negative and finite, got {}",
                self.min_spacing
            )));
        }
        Ok(())
    }
}

/// Draw `cfg.num_turbines` positions in `[0, width) × [0, height)`.
pub fn random_layout(cfg: &RandomLayoutCfg, seed: u64) -> Result<PointSet, LayoutError> {
    cfg.check()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let min_sq = cfg.min_spacing * cfg.min_spacing;
    let mut pos: Vec<Vector2<f64>> = Vec::with_capacity(cfg.num_turbines);
    let mut attempts = 0usize;
    while pos.len() < cfg.num_turbines {
        if attempts >= cfg.max_attempts {
            return Err(LayoutError::Exhausted {
                placed: pos.len(),
                requested: cfg.num_turbines,
                attempts,
            });
        }
        attempts += 1;
        let p = Vector2::new(
            rng.gen_range(0.0..cfg.width),
            rng.gen_range(0.0..cfg.height),
        );
        if pos.iter().all(|q| (p - q).norm_squared() >= min_sq) {
            pos.push(p);
        }
    }
    tracing::trace!(turbines = pos.len(), attempts, seed, "random layout drawn");
    PointSet::from_positions(pos).map_err(|e| LayoutError::InvalidParams(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_row_major() {
        let g = grid_layout(2, 3, 100.0, 50.0).unwrap();
        assert_eq!(g.count(), 6);
        assert_eq!(g.xs(), vec![0.0, 100.0, 200.0, 0.0, 100.0, 200.0]);
        assert_eq!(g.ys(), vec![0.0, 0.0, 0.0, 50.0, 50.0, 50.0]);
        assert!(grid_layout(0, 5, 1.0, 1.0).unwrap().is_empty());
        assert!(grid_layout(2, 2, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert!(matches!(
            grid_layout(usize::MAX, 2, 1.0, 1.0),
            Err(LayoutError::InvalidParams(_))
        ));
    }

    #[test]
    fn random_layout_is_seeded_and_spaced() {
        let cfg = RandomLayoutCfg {
            num_turbines: 15,
            ..RandomLayoutCfg::default()
        };
        let a = random_layout(&cfg, 42).unwrap();
        let b = random_layout(&cfg, 42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.count(), 15);
        let pos = a.positions();
        for i in 0..pos.len() {
            assert!(pos[i].x >= 0.0 && pos[i].x < cfg.width);
            assert!(pos[i].y >= 0.0 && pos[i].y < cfg.height);
            for j in i + 1..pos.len() {
                assert!((pos[i] - pos[j]).norm() >= cfg.min_spacing);
            }
        }
        assert_ne!(random_layout(&cfg, 43).unwrap(), a);
    }

    #[test]
    fn overfull_farm_is_exhausted() {
        let cfg = RandomLayoutCfg {
            num_turbines: 50,
            width: 100.0,
            height: 100.0,
            min_spacing: 60.0,
            max_attempts: 2_000,
        };
        let err = random_layout(&cfg, 1).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Exhausted {
                requested: 50,
                attempts: 2_000,
                ..
            }
        ));
    }

    #[test]
    fn bad_box_is_rejected() {
        let cfg = RandomLayoutCfg {
            width: 0.0,
            ..RandomLayoutCfg::default()
        };
        assert!(matches!(
            random_layout(&cfg, 0),
            Err(LayoutError::InvalidParams(_))
        ));
    }
}
