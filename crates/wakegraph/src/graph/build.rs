//! Graph assembly: classify every candidate pair, then construct the edge set
//! from the survivors. Nothing is built until classification is complete.

use crate::cfg::InfluenceCfg;
use crate::classify::{Candidate, EdgeAttributes, InfluenceRegion};
use crate::error::{GraphError, ValidationError};
use crate::points::PointSet;

use super::store::{
    AttrMap, GraphStore, EDGE_DIST, EDGE_DOWNSTREAM_DIST, EDGE_RADIAL_DIST, NODE_X, NODE_Y,
};
use super::types::{InfluenceEdge, InfluenceGraph, NodeId};
use super::MemoryGraph;

/// Build the wake influence graph over `(xs[i], ys[i])`.
///
/// All inputs are validated before any pair is evaluated; on error no graph is
/// returned. Node `i` is input point `i`; isolated points stay as nodes.
pub fn build_influence_graph(
    xs: &[f64],
    ys: &[f64],
    cfg: &InfluenceCfg,
) -> Result<InfluenceGraph, ValidationError> {
    let region = cfg.validate()?;
    let points = PointSet::from_xy(xs, ys)?;
    Ok(assemble(points, *cfg, &region))
}

/// Same as `build_influence_graph` for an existing point set.
pub fn build_from_points(
    points: PointSet,
    cfg: &InfluenceCfg,
) -> Result<InfluenceGraph, ValidationError> {
    let region = cfg.validate()?;
    Ok(assemble(points, *cfg, &region))
}

fn assemble(points: PointSet, cfg: InfluenceCfg, region: &InfluenceRegion) -> InfluenceGraph {
    let n = points.count();
    let kept = region.influential(&points);
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    let edges: Vec<InfluenceEdge> = kept
        .into_iter()
        .enumerate()
        .map(|(eidx, c)| {
            adj[c.src].push(eidx);
            InfluenceEdge {
                src: NodeId(c.src),
                dst: NodeId(c.dst),
                attrs: c.class.attrs,
            }
        })
        .collect();
    tracing::debug!(
        nodes = n,
        edges = edges.len(),
        wind_direction = cfg.wind_direction_deg,
        angle_th = cfg.influence_angle_th_deg,
        influence_dist = cfg.influence_dist,
        influence_radius = cfg.influence_radius,
        "influence graph assembled"
    );
    InfluenceGraph {
        points,
        cfg,
        edges,
        adj,
    }
}

/// Node-only store holding `x`/`y` features for every point and no edges.
pub fn node_only_graph(points: &PointSet) -> MemoryGraph {
    MemoryGraph::from_node_columns(points.count(), node_attrs(points))
}

/// Rewire `store` for one wind condition.
///
/// Reads the `x`/`y` node features, drops every existing edge, and adds the
/// influential ones with `dist`, `down_stream_dist` and `radial_dist` features.
/// Inputs are fully validated before the store is touched. Returns the number
/// of edges added.
pub fn update_edges<S: GraphStore + ?Sized>(
    store: &mut S,
    cfg: &InfluenceCfg,
) -> Result<usize, GraphError> {
    let region = cfg.validate()?;
    let xs = store
        .node_data(NODE_X)
        .ok_or(GraphError::MissingNodeData(NODE_X))?;
    let ys = store
        .node_data(NODE_Y)
        .ok_or(GraphError::MissingNodeData(NODE_Y))?;
    let points = PointSet::from_xy(xs, ys)?;
    let kept = region.influential(&points);

    let stale: Vec<usize> = (0..store.num_edges()).collect();
    store.remove_edges(&stale)?;
    let (src, dst, attrs) = edge_batch(&kept);
    store.add_edges(&src, &dst, attrs)?;
    tracing::debug!(
        nodes = points.count(),
        removed = stale.len(),
        added = kept.len(),
        wind_direction = cfg.wind_direction_deg,
        "edges updated"
    );
    Ok(kept.len())
}

impl InfluenceGraph {
    /// Append this graph's nodes and edges to `store`.
    ///
    /// Node ids are offset by the store's prior node count. Returns that offset.
    pub fn write_into<S: GraphStore + ?Sized>(&self, store: &mut S) -> Result<usize, GraphError> {
        let offset = store.num_nodes();
        store.add_nodes(self.num_nodes(), node_attrs(&self.points))?;
        let src: Vec<usize> = self.edges.iter().map(|e| e.src.0 + offset).collect();
        let dst: Vec<usize> = self.edges.iter().map(|e| e.dst.0 + offset).collect();
        let attrs = edge_attrs(self.edges.iter().map(|e| e.attrs));
        store.add_edges(&src, &dst, attrs)?;
        Ok(offset)
    }
}

fn node_attrs(points: &PointSet) -> AttrMap {
    let mut attrs = AttrMap::new();
    attrs.insert(NODE_X.to_string(), points.xs());
    attrs.insert(NODE_Y.to_string(), points.ys());
    attrs
}

fn edge_batch(kept: &[Candidate]) -> (Vec<usize>, Vec<usize>, AttrMap) {
    let src = kept.iter().map(|c| c.src).collect();
    let dst = kept.iter().map(|c| c.dst).collect();
    (src, dst, edge_attrs(kept.iter().map(|c| c.class.attrs)))
}

fn edge_attrs(rows: impl Iterator<Item = EdgeAttributes>) -> AttrMap {
    let (mut dist, mut down, mut radial) = (Vec::new(), Vec::new(), Vec::new());
    for a in rows {
        dist.push(a.dist);
        down.push(a.downstream_dist);
        radial.push(a.radial_dist);
    }
    let mut attrs = AttrMap::new();
    attrs.insert(EDGE_DIST.to_string(), dist);
    attrs.insert(EDGE_DOWNSTREAM_DIST.to_string(), down);
    attrs.insert(EDGE_RADIAL_DIST.to_string(), radial);
    attrs
}
