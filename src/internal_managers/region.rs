use std::{ptr::NonNull, slice};

use bytemuck::Pod;

use crate::ViewError;

// Non-owning (ptr, len) pair shared by every backend. Never frees what it points at.
pub(crate) struct RawRegion {
    ptr: *mut u8,
    len: usize
}

impl RawRegion {
    pub fn new(ptr: *mut u8, len: usize) -> RawRegion {
        RawRegion { ptr, len }
    }

    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr
    }

    pub fn len(&self) -> usize {
        self.len
    }

    // An empty region may carry a null or unaligned address, which slices can't.
    fn base(&self) -> *mut u8 {
        match self.len {
            0 => NonNull::dangling().as_ptr(),
            _ => self.ptr
        }
    }

    pub fn bytes(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.base(), self.len) }
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        unsafe { slice::from_raw_parts_mut(self.base(), self.len) }
    }

    pub fn cast<U>(&self) -> Result<&[U], ViewError>
        where U: Pod {
        if self.len == 0 {
            return Ok(&[]);
        }

        bytemuck::try_cast_slice(self.bytes()).map_err(|_| self.cast_error::<U>())
    }

    pub fn cast_mut<U>(&mut self) -> Result<&mut [U], ViewError>
        where U: Pod {
        if self.len == 0 {
            return Ok(&mut []);
        }

        let err = self.cast_error::<U>();
        bytemuck::try_cast_slice_mut(self.bytes_mut()).map_err(|_| err)
    }

    fn cast_error<U>(&self) -> ViewError {
        ViewError::Cast { address: self.ptr as usize, len: self.len, ty: std::any::type_name::<U>() }
    }
}

unsafe impl Send for RawRegion { }
unsafe impl Sync for RawRegion { }
