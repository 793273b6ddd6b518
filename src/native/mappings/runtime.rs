use std::sync::Arc;

use anyhow::Result;
use log::{debug, trace};

use crate::internal_managers::utils::region_from_raw;
use crate::{IRuntime, Native, ViewAccess};

use super::ViewNative;

// Rust itself is the calling runtime: views are plain values owned by the caller.
pub struct RuntimeNative;

impl IRuntime<Native> for RuntimeNative {
    fn new() -> Result<Arc<Self>> {
        debug!("Created native runtime.");
        Ok(Arc::new(RuntimeNative))
    }

    unsafe fn new_direct_buffer_with_access(&self, address: i64, capacity: i64, access: ViewAccess) -> Result<ViewNative> {
        let region = region_from_raw(address, capacity)?;
        trace!("New native view: address = {address:#x}, capacity = {capacity}, access = {access:?}");

        Ok(ViewNative::new(region, access))
    }
}
