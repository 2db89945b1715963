//! Layout and graph files: turbine positions in, graph JSON out.
//!
//! Layouts are tables with numeric `x` and `y` columns (CSV or Parquet); extra
//! columns are ignored. Integer columns are cast to `f64`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use wakegraph::{InfluenceCfg, InfluenceEdge, InfluenceGraph, Point, PointSet};

/// Read a layout table into a validated point set.
pub fn read_layout(path: &Path) -> Result<PointSet> {
    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    let lf = if is_parquet {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
    } else {
        LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
    }
    .with_context(|| format!("opening layout {}", path.display()))?;
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    let xs = f64_column(&df, "x")?;
    let ys = f64_column(&df, "y")?;
    tracing::info!(rows = xs.len(), path = %path.display(), "layout_read");
    Ok(PointSet::from_xy(&xs, &ys)?)
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let ca = df.column(name)?.f64()?;
    let mut out = Vec::with_capacity(ca.len());
    for (row, v) in ca.into_iter().enumerate() {
        match v {
            Some(v) => out.push(v),
            None => bail!("column `{name}` is null at row {row}"),
        }
    }
    Ok(out)
}

/// Write a point set as a two-column CSV (`x`, `y`).
pub fn write_layout_csv(path: &Path, points: &PointSet) -> Result<()> {
    ensure_parent(path)?;
    let mut df = df!("x" => points.xs(), "y" => points.ys())?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// JSON shape of a built graph.
#[derive(Serialize)]
pub struct GraphDoc<'a> {
    pub params: &'a InfluenceCfg,
    pub num_nodes: usize,
    pub num_edges: usize,
    pub nodes: Vec<Point>,
    pub edges: &'a [InfluenceEdge],
}

impl<'a> GraphDoc<'a> {
    pub fn new(g: &'a InfluenceGraph) -> Self {
        Self {
            params: g.cfg(),
            num_nodes: g.num_nodes(),
            num_edges: g.num_edges(),
            nodes: g.points().iter().collect(),
            edges: g.edges(),
        }
    }
}

pub fn write_graph_json(path: &Path, g: &InfluenceGraph) -> Result<()> {
    ensure_parent(path)?;
    let doc = GraphDoc::new(g);
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;
    use wakegraph::build_from_points;

    #[test]
    fn layout_csv_survives_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("farm/layout.csv");
        let points = PointSet::from_xy(&[0.0, 250.5, -80.0], &[0.0, -400.0, 12.25]).unwrap();
        write_layout_csv(&path, &points).unwrap();
        assert_eq!(read_layout(&path).unwrap(), points);
    }

    #[test]
    fn integer_columns_and_extra_columns_are_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.csv");
        fs::write(&path, "id,x,y\n0,0,0\n1,0,-10\n2,10,0\n").unwrap();
        let points = read_layout(&path).unwrap();
        assert_eq!(points.xs(), vec![0.0, 0.0, 10.0]);
        assert_eq!(points.ys(), vec![0.0, -10.0, 0.0]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("layout.csv");
        fs::write(&path, "x,z\n0,0\n").unwrap();
        assert!(read_layout(&path).is_err());
    }

    #[test]
    fn graph_json_lists_nodes_and_edges() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let points = PointSet::from_xy(&[0.0, 0.0, 10.0], &[0.0, -10.0, 0.0]).unwrap();
        let g = build_from_points(points, &InfluenceCfg::new(0.0, 30.0, 20.0)).unwrap();
        write_graph_json(&path, &g).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(doc["num_nodes"], 3);
        assert_eq!(doc["num_edges"], 1);
        assert_eq!(doc["edges"][0]["src"], 0);
        assert_eq!(doc["edges"][0]["dst"], 1);
        assert_eq!(doc["edges"][0]["downstream_dist"], 10.0);
        assert_eq!(doc["params"]["influence_angle_th_deg"], 30.0);
        assert_eq!(doc["nodes"][2]["x"], 10.0);
    }
}
