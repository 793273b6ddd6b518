use std::{os::raw::c_char, ptr::NonNull, sync::Arc};

use anyhow::Result;
use log::{debug, trace};
use pyo3::{ffi, prelude::*};

use crate::internal_managers::utils::{access_to_python, region_from_raw};
use crate::internal_managers::RawRegion;
use crate::{IRuntime, Python as PythonRuntime, ViewAccess};

use super::ViewPython;

// CPython is the calling runtime: views are `memoryview` objects tracked by its refcounting.
pub struct RuntimePython;

impl IRuntime<PythonRuntime> for RuntimePython {
    fn new() -> Result<Arc<Self>> {
        pyo3::prepare_freethreaded_python();
        debug!("Created python runtime.");

        Ok(Arc::new(RuntimePython))
    }

    unsafe fn new_direct_buffer_with_access(&self, address: i64, capacity: i64, access: ViewAccess) -> Result<ViewPython> {
        let region = region_from_raw(address, capacity)?;
        let object = Python::with_gil(|py| memory_view(py, &region, access))?;
        trace!("New python view: address = {address:#x}, capacity = {capacity}, access = {access:?}");

        Ok(ViewPython::new(object, region, access))
    }
}

fn memory_view(py: Python<'_>, region: &RawRegion, access: ViewAccess) -> PyResult<PyObject> {
    // memoryview asserts on a null base even when empty
    let base: *mut c_char = match region.len() {
        0 => NonNull::dangling().as_ptr(),
        _ => region.as_ptr().cast()
    };

    unsafe {
        let view = ffi::PyMemoryView_FromMemory(base, region.len() as ffi::Py_ssize_t, access_to_python(access));
        PyObject::from_owned_ptr_or_err(py, view)
    }
}
