//! In-memory adjacency-list `GraphStore`.

use crate::error::StoreError;

use super::store::{check_columns, AttrMap, GraphStore};

/// Directed multigraph with columnar node/edge features.
///
/// Columns missing from a batch are zero-filled for the new rows; a key that
/// first appears in a later batch is zero-filled for the earlier rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryGraph {
    num_nodes: usize,
    src: Vec<usize>,
    dst: Vec<usize>,
    out: Vec<Vec<usize>>, // edge ids leaving each node, ascending
    node_attrs: AttrMap,
    edge_attrs: AttrMap,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edgeless graph over `count` nodes. Every column must hold exactly
    /// `count` values.
    pub fn with_nodes(count: usize, attrs: AttrMap) -> Result<Self, StoreError> {
        check_columns(&attrs, count)?;
        Ok(Self::from_node_columns(count, attrs))
    }

    /// Columns already have length `count`.
    pub(super) fn from_node_columns(count: usize, attrs: AttrMap) -> Self {
        Self {
            num_nodes: count,
            out: vec![Vec::new(); count],
            node_attrs: attrs,
            ..Self::default()
        }
    }

    /// Edge ids leaving `node`.
    pub fn out_edges(&self, node: usize) -> &[usize] {
        self.out.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn successors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_edges(node).iter().map(move |&e| self.dst[e])
    }

    /// Id of the first edge `src → dst`, if any.
    pub fn edge_id(&self, src: usize, dst: usize) -> Option<usize> {
        self.out_edges(src)
            .iter()
            .copied()
            .find(|&e| self.dst[e] == dst)
    }

    fn rebuild_out(&mut self) {
        self.out = vec![Vec::new(); self.num_nodes];
        for (e, &s) in self.src.iter().enumerate() {
            self.out[s].push(e);
        }
    }
}

fn append_columns(cols: &mut AttrMap, old_len: usize, added: usize, batch: AttrMap) {
    for (key, values) in batch {
        cols.entry(key)
            .or_insert_with(|| vec![0.0; old_len])
            .extend(values);
    }
    for col in cols.values_mut() {
        col.resize(old_len + added, 0.0);
    }
}

fn retain_unmasked<T>(v: &mut Vec<T>, dropped: &[bool]) {
    let mut k = 0;
    v.retain(|_| {
        let kept = !dropped[k];
        k += 1;
        kept
    });
}

impl GraphStore for MemoryGraph {
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn num_edges(&self) -> usize {
        self.src.len()
    }

    fn add_nodes(&mut self, count: usize, attrs: AttrMap) -> Result<(), StoreError> {
        check_columns(&attrs, count)?;
        append_columns(&mut self.node_attrs, self.num_nodes, count, attrs);
        self.num_nodes += count;
        self.out.resize_with(self.num_nodes, Vec::new);
        Ok(())
    }

    fn add_edges(
        &mut self,
        src: &[usize],
        dst: &[usize],
        attrs: AttrMap,
    ) -> Result<(), StoreError> {
        if src.len() != dst.len() {
            return Err(StoreError::EndpointLength {
                src: src.len(),
                dst: dst.len(),
            });
        }
        check_columns(&attrs, src.len())?;
        if let Some(&id) = src.iter().chain(dst).find(|&&id| id >= self.num_nodes) {
            return Err(StoreError::UnknownNode {
                id,
                num_nodes: self.num_nodes,
            });
        }
        let first = self.src.len();
        append_columns(&mut self.edge_attrs, first, src.len(), attrs);
        for (k, (&s, &d)) in src.iter().zip(dst).enumerate() {
            self.src.push(s);
            self.dst.push(d);
            self.out[s].push(first + k);
        }
        Ok(())
    }

    fn remove_edges(&mut self, edge_ids: &[usize]) -> Result<(), StoreError> {
        let num_edges = self.src.len();
        let mut dropped = vec![false; num_edges];
        for &id in edge_ids {
            if id >= num_edges {
                return Err(StoreError::UnknownEdge { id, num_edges });
            }
            dropped[id] = true;
        }
        retain_unmasked(&mut self.src, &dropped);
        retain_unmasked(&mut self.dst, &dropped);
        for col in self.edge_attrs.values_mut() {
            retain_unmasked(col, &dropped);
        }
        self.rebuild_out();
        Ok(())
    }

    fn node_data(&self, key: &str) -> Option<&[f64]> {
        self.node_attrs.get(key).map(Vec::as_slice)
    }

    fn edge_data(&self, key: &str) -> Option<&[f64]> {
        self.edge_attrs.get(key).map(Vec::as_slice)
    }

    fn endpoints(&self) -> Vec<(usize, usize)> {
        self.src.iter().copied().zip(self.dst.iter().copied()).collect()
    }
}
