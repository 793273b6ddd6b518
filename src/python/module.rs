use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::python::mappings::RuntimePython;
use crate::{IRuntime, ViewError};

// Errors raised by the interpreter go back unchanged, bad arguments become `ValueError`.
fn to_py_err(err: anyhow::Error) -> PyErr {
    let err = match err.downcast::<PyErr>() {
        Ok(err) => return err,
        Err(err) => err
    };

    match err.downcast_ref::<ViewError>() {
        Some(view_err) => PyValueError::new_err(view_err.to_string()),
        None => PyRuntimeError::new_err(format!("{err:#}"))
    }
}

/// Wraps `capacity` bytes at `addr` in a writable `memoryview` without copying.
///
/// The caller keeps the memory alive for as long as the view is reachable from python.
#[pyfunction]
pub fn new_direct_byte_buffer(addr: i64, capacity: i64) -> PyResult<PyObject> {
    let runtime = RuntimePython::new().map_err(to_py_err)?;
    let view = unsafe { runtime.new_direct_buffer(addr, capacity).map_err(to_py_err)? };

    Ok(view.into_object())
}

/// A Python module implemented in Rust.
#[pymodule]
fn cobra_direct(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(new_direct_byte_buffer, m)?)?;
    Ok(())
}
