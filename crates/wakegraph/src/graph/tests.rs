//! Graph-level behavior: reference scenarios, universal invariants, store wiring.

use super::*;
use crate::cfg::InfluenceCfg;
use crate::error::{GraphError, ValidationError};
use crate::points::PointSet;
use proptest::prelude::*;

const XS: [f64; 3] = [0.0, 0.0, 10.0];
const YS: [f64; 3] = [0.0, -10.0, 0.0];

fn pairs(g: &InfluenceGraph) -> Vec<(usize, usize)> {
    g.edges().iter().map(|e| (e.src.0, e.dst.0)).collect()
}

#[test]
fn downstream_point_in_cone_crosswind_point_excluded() {
    let g = build_influence_graph(&XS, &YS, &InfluenceCfg::new(0.0, 30.0, 20.0)).unwrap();
    assert_eq!(g.num_nodes(), 3);
    assert!(g.has_edge(NodeId(0), NodeId(1)));
    assert!(!g.has_edge(NodeId(0), NodeId(2)));
    let e = g.edge(NodeId(0), NodeId(1)).unwrap();
    assert_eq!(e.attrs.dist, 10.0);
    assert_eq!(e.attrs.downstream_dist, 10.0);
    assert_eq!(e.attrs.radial_dist, 0.0);
}

#[test]
fn wide_cylinder_still_needs_downstream_sign() {
    let cfg = InfluenceCfg::new(0.0, 30.0, 20.0).with_radius(15.0);
    let g = build_influence_graph(&XS, &YS, &cfg).unwrap();
    assert!(g.has_edge(NodeId(0), NodeId(1)));
    assert!(!g.has_edge(NodeId(0), NodeId(2)));
}

#[test]
fn edges_are_directed() {
    let g = build_influence_graph(&XS, &YS, &InfluenceCfg::new(0.0, 30.0, 20.0)).unwrap();
    assert!(g.has_edge(NodeId(0), NodeId(1)));
    assert!(!g.has_edge(NodeId(1), NodeId(0)));
    assert_eq!(pairs(&g), vec![(0, 1)]);
    assert_eq!(g.out_degree(NodeId(0)), 1);
    assert_eq!(g.in_degree(NodeId(1)), 1);
    // Node 2 has no edges but is still a node.
    assert_eq!(g.out_degree(NodeId(2)), 0);
    assert_eq!(g.in_degree(NodeId(2)), 0);
}

#[test]
fn degenerate_inputs_have_no_edges() {
    let cfg = InfluenceCfg::new(0.0, 30.0, 1e9).with_radius(1e9);
    let empty = build_influence_graph(&[], &[], &cfg).unwrap();
    assert_eq!((empty.num_nodes(), empty.num_edges()), (0, 0));
    let single = build_influence_graph(&[4.0], &[2.0], &cfg).unwrap();
    assert_eq!((single.num_nodes(), single.num_edges()), (1, 0));
}

#[test]
fn validation_fails_fast_without_graph() {
    let cfg = InfluenceCfg::new(0.0, 30.0, 20.0);
    assert_eq!(
        build_influence_graph(&[0.0, 1.0], &[0.0], &cfg).unwrap_err(),
        ValidationError::LengthMismatch { xs: 2, ys: 1 }
    );
    assert!(build_influence_graph(&[0.0, f64::NAN], &[0.0, 0.0], &cfg).is_err());
    let bad_angle = InfluenceCfg::new(0.0, 90.0, 20.0);
    assert_eq!(
        build_influence_graph(&XS, &YS, &bad_angle).unwrap_err(),
        ValidationError::AngleOutOfRange(90.0)
    );
}

#[test]
fn small_cone_angle_keeps_axis_points_through_cylinder() {
    // Off-axis by 0.5 at 40 downstream; the 1e-4° cone misses it, the cylinder catches it.
    let xs = [0.0, 0.0, 0.5, 3.0];
    let ys = [0.0, -50.0, -40.0, -40.0];
    let cfg = InfluenceCfg::new(0.0, 1e-4, 60.0).with_radius(1.0);
    let g = build_influence_graph(&xs, &ys, &cfg).unwrap();
    assert!(g.has_edge(NodeId(0), NodeId(1)));
    assert!(g.has_edge(NodeId(0), NodeId(2)));
    assert!(!g.has_edge(NodeId(0), NodeId(3)));
    let cone_only = build_influence_graph(&xs, &ys, &InfluenceCfg::new(0.0, 1e-4, 60.0)).unwrap();
    assert!(cone_only.has_edge(NodeId(0), NodeId(1)));
    assert!(!cone_only.has_edge(NodeId(0), NodeId(2)));
}

#[test]
fn repeated_builds_are_identical() {
    let xs = [0.0, 120.0, 260.0, 35.0, 410.0, 180.0];
    let ys = [0.0, -40.0, 15.0, -300.0, -220.0, -510.0];
    let cfg = InfluenceCfg::new(213.0, 20.0, 450.0).with_radius(60.0);
    let a = build_influence_graph(&xs, &ys, &cfg).unwrap();
    let b = build_influence_graph(&xs, &ys, &cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn update_edges_rewires_for_new_wind() {
    let points = PointSet::from_xy(&XS, &YS).unwrap();
    let mut store = node_only_graph(&points);
    assert_eq!(store.num_nodes(), 3);
    assert_eq!(store.num_edges(), 0);
    assert_eq!(store.node_data(NODE_X), Some(&XS[..]));

    let added = update_edges(&mut store, &InfluenceCfg::new(0.0, 30.0, 20.0)).unwrap();
    assert_eq!(added, 1);
    assert_eq!(store.endpoints(), vec![(0, 1)]);
    assert_eq!(store.edge_data(EDGE_DIST), Some(&[10.0][..]));
    assert_eq!(store.edge_data(EDGE_DOWNSTREAM_DIST), Some(&[10.0][..]));

    // Reversed wind: the old edge goes away and 1 → 0 appears.
    let added = update_edges(&mut store, &InfluenceCfg::new(180.0, 30.0, 20.0)).unwrap();
    assert_eq!(added, 1);
    assert_eq!(store.endpoints(), vec![(1, 0)]);
    assert_eq!(store.edge_data(EDGE_DOWNSTREAM_DIST), Some(&[10.0][..]));
    assert_eq!(store.num_nodes(), 3);
}

#[test]
fn update_edges_validates_before_touching_store() {
    let points = PointSet::from_xy(&XS, &YS).unwrap();
    let mut store = node_only_graph(&points);
    update_edges(&mut store, &InfluenceCfg::new(0.0, 30.0, 20.0)).unwrap();
    let err = update_edges(&mut store, &InfluenceCfg::new(0.0, 0.0, 20.0)).unwrap_err();
    assert_eq!(
        err,
        GraphError::Validation(ValidationError::AngleOutOfRange(0.0))
    );
    assert_eq!(store.endpoints(), vec![(0, 1)]);

    let mut bare = MemoryGraph::new();
    bare.add_nodes(2, AttrMap::new()).unwrap();
    assert_eq!(
        update_edges(&mut bare, &InfluenceCfg::new(0.0, 30.0, 20.0)).unwrap_err(),
        GraphError::MissingNodeData(NODE_X)
    );
}

#[test]
fn update_edges_matches_build() {
    let xs = [0.0, 80.0, 160.0, 0.0, 80.0, 160.0];
    let ys = [0.0, 0.0, 0.0, -120.0, -120.0, -120.0];
    let cfg = InfluenceCfg::new(30.0, 25.0, 200.0).with_radius(10.0);
    let built = build_influence_graph(&xs, &ys, &cfg).unwrap();
    let mut store = node_only_graph(built.points());
    update_edges(&mut store, &cfg).unwrap();
    assert_eq!(store.endpoints(), pairs(&built));
    let dists: Vec<f64> = built.edges().iter().map(|e| e.attrs.dist).collect();
    assert_eq!(store.edge_data(EDGE_DIST), Some(dists.as_slice()));
}

#[test]
fn write_into_appends_with_offset() {
    let g = build_influence_graph(&XS, &YS, &InfluenceCfg::new(0.0, 30.0, 20.0)).unwrap();
    let mut store = MemoryGraph::new();
    store.add_nodes(2, AttrMap::new()).unwrap();
    let offset = g.write_into(&mut store).unwrap();
    assert_eq!(offset, 2);
    assert_eq!(store.num_nodes(), 5);
    assert_eq!(store.endpoints(), vec![(2, 3)]);
    assert_eq!(
        store.node_data(NODE_Y),
        Some(&[0.0, 0.0, 0.0, -10.0, 0.0][..])
    );
    assert_eq!(store.edge_data(EDGE_RADIAL_DIST), Some(&[0.0][..]));
}

#[test]
fn endpoint_lists_follow_edge_order() {
    let xs = [0.0, 0.0, 0.0];
    let ys = [0.0, -10.0, -20.0];
    let g = build_influence_graph(&xs, &ys, &InfluenceCfg::new(0.0, 30.0, 25.0)).unwrap();
    let (src, dst) = g.endpoint_lists();
    assert_eq!(src, vec![0, 0, 1]);
    assert_eq!(dst, vec![1, 2, 2]);
    let out: Vec<usize> = g.out_edges(NodeId(0)).map(|e| e.dst.0).collect();
    assert_eq!(out, vec![1, 2]);
}

fn layout_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 0..20)
}

proptest! {
    #[test]
    fn no_self_loops_and_distance_bound(
        pts in layout_strategy(),
        wd in -720.0f64..720.0,
        th in 0.5f64..89.5,
        dist in 0.0f64..600.0,
        radius in 0.0f64..80.0,
    ) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
        let cfg = InfluenceCfg::new(wd, th, dist).with_radius(radius);
        let g = build_influence_graph(&xs, &ys, &cfg).unwrap();
        prop_assert_eq!(g.num_nodes(), xs.len());
        for e in g.edges() {
            prop_assert_ne!(e.src, e.dst);
            prop_assert!(e.attrs.dist <= dist);
            prop_assert!(e.attrs.dist >= 0.0);
        }
    }

    #[test]
    fn zero_wind_frame_is_plain_translation(
        pts in layout_strategy(),
        th in 0.5f64..89.5,
    ) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
        let cfg = InfluenceCfg::new(0.0, th, f64::INFINITY);
        let g = build_influence_graph(&xs, &ys, &cfg).unwrap();
        for e in g.edges() {
            let (i, j) = (e.src.0, e.dst.0);
            prop_assert_eq!(e.attrs.downstream_dist, -(ys[j] - ys[i]));
            prop_assert_eq!(e.attrs.radial_dist, -(xs[j] - xs[i]));
        }
    }

    #[test]
    fn edge_set_matches_pairwise_classification(
        pts in layout_strategy(),
        wd in 0.0f64..360.0,
        th in 0.5f64..89.5,
        dist in 0.0f64..600.0,
        radius in 0.0f64..80.0,
    ) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pts.into_iter().unzip();
        let cfg = InfluenceCfg::new(wd, th, dist).with_radius(radius);
        let region = cfg.validate().unwrap();
        let points = PointSet::from_xy(&xs, &ys).unwrap();
        let expected: Vec<(usize, usize)> = crate::pairs::candidate_pairs(points.count())
            .filter(|&(i, j)| region.classify(points.position(i), points.position(j)).is_influential())
            .collect();
        let g = build_from_points(points, &cfg).unwrap();
        prop_assert_eq!(pairs(&g), expected);
    }
}
