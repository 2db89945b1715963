//! Error types shared by the pipeline and the graph-store seam.
//!
//! - `ValidationError`: bad inputs, always raised before any pair is evaluated.
//! - `StoreError`: a `GraphStore` rejected a mutation (length or id mismatch).
//! - `GraphError`: what `update_edges` and `write_into` return.

use thiserror::Error;

/// Input rejected before the pipeline starts.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("coordinate length mismatch: {xs} xs vs {ys} ys")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("non-finite coordinate at index {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },
    #[error("influence angle must lie in (0, 90) degrees, got {0}")]
    AngleOutOfRange(f64),
    #[error("{name} must be a non-negative number, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("wind direction must be finite, got {0}")]
    NonFiniteWindDirection(f64),
}

/// A `GraphStore` mutation that could not be applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("attribute `{key}` has {actual} values, expected {expected}")]
    AttributeLength {
        key: String,
        expected: usize,
        actual: usize,
    },
    #[error("edge endpoint lists differ in length: {src} sources vs {dst} destinations")]
    EndpointLength { src: usize, dst: usize },
    #[error("unknown node {id} (graph has {num_nodes} nodes)")]
    UnknownNode { id: usize, num_nodes: usize },
    #[error("unknown edge {id} (graph has {num_edges} edges)")]
    UnknownEdge { id: usize, num_edges: usize },
}

/// Failure while wiring influence edges into a store.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GraphError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("store has no node feature `{0}`")]
    MissingNodeData(&'static str),
}
