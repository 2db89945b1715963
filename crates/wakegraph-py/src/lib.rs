//! PyO3 bindings for selected `wakegraph` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: plain lists in, plain lists/dicts out.
//! - Graph construction stays in Rust (`wakegraph` crate); Python owns the
//!   graph container and whatever consumes it.

use pyo3::prelude::*;

mod common;
mod graph;

#[pymodule]
fn wakegraph_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", wakegraph::VERSION)?;
    graph::register(m)?;
    Ok(())
}
