//! `<artifact>.provenance.json` sidecars: which code and which parameters
//! produced an output file.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: parameters and input files.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
pub struct Sidecar {
    code_rev: String,
    wakegraph_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callsite: Option<Callsite>,
    params: Value,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl Sidecar {
    fn new(params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            wakegraph_version: wakegraph::VERSION,
            callsite: None,
            params,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

/// Write the sidecar next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let caller = Location::caller();
    let sidecar = Sidecar {
        callsite: Some(Callsite {
            file: caller.file(),
            line: caller.line(),
        }),
        inputs: payload.inputs,
        outputs: vec![artifact.to_string_lossy().into_owned()],
        ..Sidecar::new(payload.params)
    };

    let path = sidecar_path(artifact);
    crate::io::ensure_parent(&path)?;
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Block printed by `report`: no artifact, no parameters.
pub fn report_block() -> Sidecar {
    Sidecar::new(Value::Object(Default::default()))
}

/// `dir/graph.json` → `dir/graph.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    if artifact.file_stem().is_some() {
        artifact.with_extension("provenance.json")
    } else {
        artifact.join("artifact.provenance.json")
    }
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .filter(|rev| !rev.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(rev_from_git)
        .unwrap_or_else(|| "unknown".to_string())
}

fn rev_from_git() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
