//! Graph-store seam: the minimal capability set an influence graph is written into.
//!
//! Attributes are columnar: each key maps to one `f64` per node (or edge) in the
//! batch being added. Any container that can append nodes, append edges, and
//! drop edges by id is a valid backing store.

use std::collections::BTreeMap;

use crate::error::StoreError;

/// Columnar attribute batch (`name → one value per element`).
pub type AttrMap = BTreeMap<String, Vec<f64>>;

/// Node feature keys.
pub const NODE_X: &str = "x";
pub const NODE_Y: &str = "y";

/// Edge feature keys.
pub const EDGE_DIST: &str = "dist";
pub const EDGE_DOWNSTREAM_DIST: &str = "down_stream_dist";
pub const EDGE_RADIAL_DIST: &str = "radial_dist";

/// Minimal mutable graph container.
pub trait GraphStore {
    fn num_nodes(&self) -> usize;

    fn num_edges(&self) -> usize;

    /// Append `count` nodes; ids continue from `num_nodes()`.
    fn add_nodes(&mut self, count: usize, attrs: AttrMap) -> Result<(), StoreError>;

    /// Append edges `src[k] → dst[k]`; ids continue from `num_edges()`.
    fn add_edges(&mut self, src: &[usize], dst: &[usize], attrs: AttrMap)
        -> Result<(), StoreError>;

    /// Drop the given edges. Remaining edges are renumbered densely, keeping order.
    fn remove_edges(&mut self, edge_ids: &[usize]) -> Result<(), StoreError>;

    fn node_data(&self, key: &str) -> Option<&[f64]>;

    fn edge_data(&self, key: &str) -> Option<&[f64]>;

    /// `(src, dst)` per edge, indexed by edge id.
    fn endpoints(&self) -> Vec<(usize, usize)>;
}

/// Check that every column in `attrs` has exactly `expected` values.
pub(crate) fn check_columns(attrs: &AttrMap, expected: usize) -> Result<(), StoreError> {
    for (key, col) in attrs {
        if col.len() != expected {
            return Err(StoreError::AttributeLength {
                key: key.clone(),
                expected,
                actual: col.len(),
            });
        }
    }
    Ok(())
}
