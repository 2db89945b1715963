//! Wake influence graphs over turbine layouts.
//!
//! Pipeline (pure, stateless):
//! `PointSet` → candidate pairs → wind-aligned frame → cone/cylinder/distance
//! classification → `InfluenceGraph`.
//!
//! An edge `i → j` means turbine `j` lies in the wake influence region of `i`
//! for the given wind direction. Edges carry the Euclidean distance plus the
//! signed downstream and radial distances in the wind frame.
//!
//! Entry points
//! - `build_influence_graph(xs, ys, &InfluenceCfg)`: validate, classify, assemble.
//! - `update_edges(&mut store, &InfluenceCfg)`: rewire any `GraphStore` holding
//!   `x`/`y` node features (see `node_only_graph`).

pub mod cfg;
pub mod classify;
pub mod error;
pub mod frame;
pub mod graph;
pub mod layout;
pub mod pairs;
pub mod points;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::InfluenceCfg;
pub use classify::{EdgeAttributes, InfluenceRegion};
pub use error::{GraphError, StoreError, ValidationError};
pub use graph::{
    build_from_points, build_influence_graph, node_only_graph, update_edges, GraphStore,
    InfluenceEdge, InfluenceGraph, MemoryGraph, NodeId,
};
pub use points::{Point, PointSet};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::InfluenceCfg;
    pub use crate::classify::{EdgeAttributes, InfluenceRegion};
    pub use crate::error::{GraphError, StoreError, ValidationError};
    pub use crate::frame::{FrameCoords, WindFrame};
    pub use crate::graph::{
        build_influence_graph, node_only_graph, update_edges, AttrMap, GraphStore,
        InfluenceGraph, MemoryGraph, NodeId,
    };
    pub use crate::layout::{grid_layout, random_layout, RandomLayoutCfg};
    pub use crate::points::{Point, PointSet};
}
