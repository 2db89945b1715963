//! Immutable point sets (turbine positions).

use nalgebra::Vector2;
use serde::Serialize;

use crate::error::ValidationError;

/// A labeled position; `id` is the index in the input arrays.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

/// Ordered, finite 2D coordinates. Never mutated after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    pos: Vec<Vector2<f64>>,
}

impl PointSet {
    /// Build from parallel coordinate slices.
    ///
    /// Fails if the lengths differ or any coordinate is NaN/Infinite.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, ValidationError> {
        if xs.len() != ys.len() {
            return Err(ValidationError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let mut pos = Vec::with_capacity(xs.len());
        for (index, (&x, &y)) in xs.iter().zip(ys).enumerate() {
            if !(x.is_finite() && y.is_finite()) {
                return Err(ValidationError::NonFiniteCoordinate { index, x, y });
            }
            pos.push(Vector2::new(x, y));
        }
        Ok(Self { pos })
    }

    /// Build from already-assembled positions, with the same finiteness check.
    pub fn from_positions(pos: Vec<Vector2<f64>>) -> Result<Self, ValidationError> {
        if let Some((index, p)) = pos
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(ValidationError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }
        Ok(Self { pos })
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    #[inline]
    pub fn get(&self, id: usize) -> Option<Point> {
        self.pos.get(id).map(|p| Point { id, x: p.x, y: p.y })
    }

    /// Position of point `id`. Panics if out of range, like slice indexing.
    #[inline]
    pub fn position(&self, id: usize) -> Vector2<f64> {
        self.pos[id]
    }

    #[inline]
    pub fn positions(&self) -> &[Vector2<f64>] {
        &self.pos
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.pos
            .iter()
            .enumerate()
            .map(|(id, p)| Point { id, x: p.x, y: p.y })
    }

    pub fn xs(&self) -> Vec<f64> {
        self.pos.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.pos.iter().map(|p| p.y).collect()
    }
}
