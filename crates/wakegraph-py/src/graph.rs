//! Influence-graph bindings (kept separate so `lib.rs` stays tiny).
//!
//! Edges come back as DGL-style parallel lists plus a feature dict, so Python
//! callers can hand them straight to `g.add_edges(src, dst, feats)`.

use std::collections::HashMap;

use crate::common::map_validation_err;
use pyo3::prelude::*;
use wakegraph::graph::{EDGE_DIST, EDGE_DOWNSTREAM_DIST, EDGE_RADIAL_DIST};
use wakegraph::InfluenceCfg;

type EdgeLists = (Vec<usize>, Vec<usize>, HashMap<String, Vec<f64>>);

/// Influential edges for one wind condition: `(src, dst, features)`.
#[pyfunction]
#[pyo3(signature = (xs, ys, wind_direction, influence_angle_th, influence_dist, influence_radius=0.0))]
pub fn build_influence_graph(
    xs: Vec<f64>,
    ys: Vec<f64>,
    wind_direction: f64,
    influence_angle_th: f64,
    influence_dist: f64,
    influence_radius: f64,
) -> PyResult<EdgeLists> {
    let cfg = InfluenceCfg::new(wind_direction, influence_angle_th, influence_dist)
        .with_radius(influence_radius);
    let g = wakegraph::build_influence_graph(&xs, &ys, &cfg).map_err(map_validation_err)?;
    let (src, dst) = g.endpoint_lists();
    let mut feats = HashMap::new();
    feats.insert(
        EDGE_DIST.to_string(),
        g.edges().iter().map(|e| e.attrs.dist).collect(),
    );
    feats.insert(
        EDGE_DOWNSTREAM_DIST.to_string(),
        g.edges().iter().map(|e| e.attrs.downstream_dist).collect(),
    );
    feats.insert(
        EDGE_RADIAL_DIST.to_string(),
        g.edges().iter().map(|e| e.attrs.radial_dist).collect(),
    );
    Ok((src, dst, feats))
}

/// Rounded cone slope `|tan(90° − θ)|` used by the classifier.
#[pyfunction]
pub fn cone_slope(influence_angle_th: f64) -> PyResult<f64> {
    InfluenceCfg::new(0.0, influence_angle_th, 0.0)
        .validate()
        .map(|region| region.slope())
        .map_err(map_validation_err)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_influence_graph, m)?)?;
    m.add_function(wrap_pyfunction!(cone_slope, m)?)?;
    Ok(())
}
