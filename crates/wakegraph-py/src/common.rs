use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use wakegraph::ValidationError;

pub fn map_validation_err(err: ValidationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
