use std::{ffi::c_void, sync::Arc};

use anyhow::Result;
use bytemuck::Pod;

use crate::{DirectType, View};

// View info
bitflags::bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct ViewAccess: u32 {
        const Read = 1;
        const Write = 2;
        const ReadWrite = ViewAccess::Read.union(ViewAccess::Write).bits();
    }
}

impl Default for ViewAccess {
    fn default() -> Self {
        ViewAccess::ReadWrite
    }
}

// Traits
// Runtime
pub trait IRuntime<T>
    where T: DirectType<T>, Self:Sized, Self:Send, Self:Sync {

    fn new() -> Result<Arc<Self>>;

    /// Wraps `capacity` bytes starting at `address` in a runtime buffer object without copying.
    ///
    /// # Safety
    /// `address` must point to at least `capacity` accessible bytes that stay valid for as long
    /// as the returned view (or anything the runtime derives from it) is alive. Reads and writes
    /// through overlapping views or raw pointers must be synchronised by the caller.
    unsafe fn new_direct_buffer(&self, address: i64, capacity: i64) -> Result<View<T>> {
        self.new_direct_buffer_with_access(address, capacity, ViewAccess::default())
    }

    /// # Safety
    /// Same contract as [`IRuntime::new_direct_buffer`].
    unsafe fn new_direct_buffer_with_access(&self, address: i64, capacity: i64, access: ViewAccess) -> Result<View<T>>;
}

// Views
pub trait IView<T>
    where T: DirectType<T>, Self:Sized, Self:Send, Self:Sync {
    fn host_address(&self) -> *mut c_void;
    fn size(&self) -> u64;
    fn access(&self) -> ViewAccess;

    fn host_slice<U>(&self) -> Result<&[U]>
        where U: Pod;
    fn host_slice_mut<U>(&mut self) -> Result<&mut [U]>
        where U: Pod;
}
