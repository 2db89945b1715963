//! Wake influence graph: assembly and the graph-store seam.
//!
//! Purpose
//! - Turn classified candidate pairs into a directed graph over all input points
//!   (`build_influence_graph`), in two phases: classify everything, then build.
//! - Hand results to any container implementing `GraphStore`, or rewire an
//!   existing node-only store in place for a new wind condition (`update_edges`).
//!
//! Layout
//! - `types.rs` (graph data), `build.rs` (assembly, store wiring),
//!   `store.rs` (the `GraphStore` trait), `memory.rs` (in-memory store).

mod build;
mod memory;
mod store;
mod types;

pub use build::{build_from_points, build_influence_graph, node_only_graph, update_edges};
pub use memory::MemoryGraph;
pub use store::{
    AttrMap, GraphStore, EDGE_DIST, EDGE_DOWNSTREAM_DIST, EDGE_RADIAL_DIST, NODE_X, NODE_Y,
};
pub use types::{InfluenceEdge, InfluenceGraph, NodeId};

#[cfg(test)]
mod tests;
