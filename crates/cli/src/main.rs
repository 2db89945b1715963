use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use wakegraph::layout::{grid_layout, random_layout, RandomLayoutCfg};
use wakegraph::{build_from_points, InfluenceCfg};

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "wakegraph")]
#[command(about = "Wake influence graphs over turbine layouts")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the influence graph of a layout and write it as JSON
    Build {
        /// Layout table with `x`/`y` columns (.csv or .parquet)
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        params: ParamFlags,
    },
    /// Write a turbine layout CSV
    Layout {
        #[command(subcommand)]
        kind: LayoutKind,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Influence parameters; flags override values from `--config`.
#[derive(Args, Clone, Debug, Default)]
struct ParamFlags {
    /// JSON file holding an `InfluenceCfg`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Wind direction in degrees
    #[arg(long, allow_hyphen_values = true)]
    wind_direction: Option<f64>,
    /// Cone half-angle in degrees, in (0, 90)
    #[arg(long)]
    angle: Option<f64>,
    /// Distance cutoff
    #[arg(long)]
    dist: Option<f64>,
    /// Cylinder radius around the downstream axis
    #[arg(long)]
    radius: Option<f64>,
}

#[derive(Subcommand)]
enum LayoutKind {
    /// Regular rows × cols grid
    Grid {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
        #[arg(long)]
        spacing_x: f64,
        /// Defaults to `spacing_x`
        #[arg(long)]
        spacing_y: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Uniform random farm with minimum spacing
    Random {
        #[arg(long)]
        turbines: usize,
        #[arg(long, default_value_t = 2000.0)]
        width: f64,
        #[arg(long, default_value_t = 2000.0)]
        height: f64,
        #[arg(long, default_value_t = 200.0)]
        min_spacing: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100_000)]
        max_attempts: usize,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Build { input, out, params } => build(&input, &out, &params),
        Action::Layout { kind } => layout(kind),
        Action::Report => report(),
    }
}

fn resolve_cfg(flags: &ParamFlags) -> Result<InfluenceCfg> {
    let base: Option<InfluenceCfg> = match &flags.config {
        Some(path) => {
            let raw = std::fs::read(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            Some(
                serde_json::from_slice(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?,
            )
        }
        None => None,
    };
    let pick = |flag: Option<f64>, from_file: Option<f64>, name: &str| {
        flag.or(from_file)
            .ok_or_else(|| anyhow!("missing --{name} (no config value either)"))
    };
    let cfg = InfluenceCfg {
        wind_direction_deg: pick(
            flags.wind_direction,
            base.map(|c| c.wind_direction_deg),
            "wind-direction",
        )?,
        influence_angle_th_deg: pick(
            flags.angle,
            base.map(|c| c.influence_angle_th_deg),
            "angle",
        )?,
        influence_dist: pick(flags.dist, base.map(|c| c.influence_dist), "dist")?,
        influence_radius: flags
            .radius
            .or(base.map(|c| c.influence_radius))
            .unwrap_or(0.0),
    };
    Ok(cfg)
}

fn build(input: &Path, out: &Path, flags: &ParamFlags) -> Result<()> {
    let cfg = resolve_cfg(flags)?;
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        wind_direction = cfg.wind_direction_deg,
        angle = cfg.influence_angle_th_deg,
        dist = cfg.influence_dist,
        radius = cfg.influence_radius,
        "build"
    );
    let points = io::read_layout(input)?;
    let g = build_from_points(points, &cfg)
        .with_context(|| format!("building influence graph for {}", input.display()))?;
    tracing::info!(nodes = g.num_nodes(), edges = g.num_edges(), "graph_built");
    io::write_graph_json(out, &g)?;
    let payload =
        Payload::new(serde_json::to_value(cfg)?).with_input(input.to_string_lossy());
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn layout(kind: LayoutKind) -> Result<()> {
    match kind {
        LayoutKind::Grid {
            rows,
            cols,
            spacing_x,
            spacing_y,
            out,
        } => {
            let spacing_y = spacing_y.unwrap_or(spacing_x);
            tracing::info!(rows, cols, spacing_x, spacing_y, out = %out.display(), "layout_grid");
            let points = grid_layout(rows, cols, spacing_x, spacing_y)?;
            io::write_layout_csv(&out, &points)?;
            let params = serde_json::json!({
                "kind": "grid",
                "rows": rows,
                "cols": cols,
                "spacing_x": spacing_x,
                "spacing_y": spacing_y
            });
            provenance::write_sidecar(&out, Payload::new(params))?;
        }
        LayoutKind::Random {
            turbines,
            width,
            height,
            min_spacing,
            seed,
            max_attempts,
            out,
        } => {
            let cfg = RandomLayoutCfg {
                num_turbines: turbines,
                width,
                height,
                min_spacing,
                max_attempts,
            };
            tracing::info!(turbines, seed, out = %out.display(), "layout_random");
            let points = random_layout(&cfg, seed)?;
            io::write_layout_csv(&out, &points)?;
            let params = serde_json::json!({ "kind": "random", "seed": seed, "cfg": cfg });
            provenance::write_sidecar(&out, Payload::new(params))?;
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&provenance::report_block())?);
    Ok(())
}
