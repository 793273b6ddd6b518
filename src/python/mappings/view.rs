use std::ffi::c_void;

use anyhow::Result;
use bytemuck::Pod;
use pyo3::PyObject;

use crate::internal_managers::RawRegion;
use crate::{IView, Python, ViewAccess, ViewError};

pub struct ViewPython {
    object: PyObject,
    region: RawRegion,
    access: ViewAccess
}

impl ViewPython {
    pub(crate) fn new(object: PyObject, region: RawRegion, access: ViewAccess) -> ViewPython {
        ViewPython { object, region, access }
    }

    /// The `memoryview` handed to python code.
    pub fn object(&self) -> &PyObject {
        &self.object
    }

    pub fn into_object(self) -> PyObject {
        self.object
    }
}

impl IView<Python> for ViewPython {
    fn host_address(&self) -> *mut c_void {
        self.region.as_ptr().cast()
    }

    fn size(&self) -> u64 {
        self.region.len() as u64
    }

    fn access(&self) -> ViewAccess {
        self.access
    }

    fn host_slice<U>(&self) -> Result<&[U]>
        where U: Pod {
        Ok(self.region.cast()?)
    }

    fn host_slice_mut<U>(&mut self) -> Result<&mut [U]>
        where U: Pod {
        if !self.access.contains(ViewAccess::Write) {
            return Err(ViewError::ReadOnly.into());
        }

        Ok(self.region.cast_mut()?)
    }
}
