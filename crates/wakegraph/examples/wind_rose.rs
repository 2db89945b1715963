//! Wind-rose sweep over a regular 4×5 farm.
//!
//! Purpose
//! - Show how the influence graph of one layout changes with wind direction:
//!   one node-only store, rewired in place for each sector.
//! - Print edge counts and the most-waked turbine per sector.
//!
//! Code: crates/wakegraph/src/graph/build.rs::update_edges

use wakegraph::graph::{GraphStore, EDGE_DOWNSTREAM_DIST};
use wakegraph::layout::grid_layout;
use wakegraph::{node_only_graph, update_edges, InfluenceCfg};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 5D × 7D spacing for a 120 m rotor.
    let layout = grid_layout(4, 5, 600.0, 840.0)?;
    let mut store = node_only_graph(&layout);
    let base = InfluenceCfg::new(0.0, 15.0, 2500.0).with_radius(60.0);

    for sector in 0..12 {
        let wd = sector as f64 * 30.0;
        let added = update_edges(&mut store, &base.with_wind_direction(wd))?;
        let mut in_deg = vec![0usize; store.num_nodes()];
        for (_, dst) in store.endpoints() {
            in_deg[dst] += 1;
        }
        let (most_waked, deg) = in_deg
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|&(_, d)| d)
            .unwrap_or((0, 0));
        let mean_down = store
            .edge_data(EDGE_DOWNSTREAM_DIST)
            .filter(|col| !col.is_empty())
            .map(|col| col.iter().sum::<f64>() / col.len() as f64)
            .unwrap_or(0.0);
        println!(
            "wd={wd:>5.1} edges={added:>3} most_waked={most_waked:>2} (in={deg}) mean_downstream={mean_down:.1}"
        );
    }
    Ok(())
}
