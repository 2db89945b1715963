//! Data types for the assembled influence graph.

use serde::Serialize;

use crate::cfg::InfluenceCfg;
use crate::classify::EdgeAttributes;
use crate::points::PointSet;

/// Node identifier; equals the point's index in the input arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

/// Directed edge `src → dst`: `dst` lies in the wake influence region of `src`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InfluenceEdge {
    pub src: NodeId,
    pub dst: NodeId,
    #[serde(flatten)]
    pub attrs: EdgeAttributes,
}

/// Influence graph for one wind condition.
///
/// Every input point is a node (isolated ones included). Edges are stored
/// row-major by source; `adj[k]` lists the edge indices leaving node `k`.
#[derive(Clone, Debug, PartialEq)]
pub struct InfluenceGraph {
    pub(crate) points: PointSet,
    pub(crate) cfg: InfluenceCfg,
    pub(crate) edges: Vec<InfluenceEdge>,
    pub(crate) adj: Vec<Vec<usize>>,
}

impl InfluenceGraph {
    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Parameters the graph was built with.
    #[inline]
    pub fn cfg(&self) -> &InfluenceCfg {
        &self.cfg
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.points.count()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edges(&self) -> &[InfluenceEdge] {
        &self.edges
    }

    /// Edges leaving `node`, in increasing destination order.
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = &InfluenceEdge> + '_ {
        self.adj
            .get(node.0)
            .into_iter()
            .flatten()
            .map(move |&e| &self.edges[e])
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.adj.get(node.0).map_or(0, Vec::len)
    }

    pub fn in_degree(&self, node: NodeId) -> usize {
        self.edges.iter().filter(|e| e.dst == node).count()
    }

    pub fn edge(&self, src: NodeId, dst: NodeId) -> Option<&InfluenceEdge> {
        self.out_edges(src).find(|e| e.dst == dst)
    }

    #[inline]
    pub fn has_edge(&self, src: NodeId, dst: NodeId) -> bool {
        self.edge(src, dst).is_some()
    }

    /// Edge endpoints as parallel id lists, the shape `GraphStore::add_edges` takes.
    pub fn endpoint_lists(&self) -> (Vec<usize>, Vec<usize>) {
        self.edges.iter().map(|e| (e.src.0, e.dst.0)).unzip()
    }
}
