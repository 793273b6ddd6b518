use std::{ffi::c_void, ops::Deref};

use anyhow::Result;
use bytemuck::Pod;

use crate::internal_managers::RawRegion;
use crate::{IView, Native, ViewAccess, ViewError};

pub struct ViewNative {
    region: RawRegion,
    access: ViewAccess
}

impl ViewNative {
    pub(crate) fn new(region: RawRegion, access: ViewAccess) -> ViewNative {
        ViewNative { region, access }
    }
}

impl IView<Native> for ViewNative {
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

impl Deref for ViewNative {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.region.bytes()
    }
}

impl AsRef<[u8]> for ViewNative {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

#[cfg(test)]
mod test {
    use crate::native::mappings::RuntimeNative;
    use crate::{IRuntime, IView};

    #[test]
    fn test_reads_are_live() {
        let runtime = RuntimeNative::new().unwrap();

        let mut storage = vec![0u8; 16];
        let ptr = storage.as_mut_ptr();
        let view = unsafe { runtime.new_direct_buffer(ptr as i64, 16).unwrap() };
        assert_eq!(view[3], 0);

        unsafe { ptr.add(3).write(0xAB) };
        assert_eq!(view[3], 0xAB);
    }

    #[test]
    fn test_writes_reach_memory_and_other_views() {
        let runtime = RuntimeNative::new().unwrap();

        let mut storage = vec![0u8; 16];
        let ptr = storage.as_mut_ptr();
        let mut first = unsafe { runtime.new_direct_buffer(ptr as i64, 16).unwrap() };
        let second = unsafe { runtime.new_direct_buffer(ptr as i64, 16).unwrap() };

        first.host_slice_mut::<u8>().unwrap()[9] = 0x42;

        assert_eq!(unsafe { ptr.add(9).read() }, 0x42);
        assert_eq!(second[9], 0x42);
    }

    #[test]
    fn test_same_region_gives_distinct_handles() {
        let runtime = RuntimeNative::new().unwrap();

        let mut storage = [5u8; 8];
        let ptr = storage.as_mut_ptr();
        let mut first = unsafe { runtime.new_direct_buffer(ptr as i64, 8).unwrap() };
        let second = unsafe { runtime.new_direct_buffer(ptr as i64, 8).unwrap() };

        assert_eq!(first.host_address(), second.host_address());
        assert_eq!(&*first, &*second);

        first.host_slice_mut::<u8>().unwrap()[0] = 6;
        assert_eq!(second[0], 6);
    }

    #[test]
    fn test_dropping_view_keeps_memory() {
        let runtime = RuntimeNative::new().unwrap();

        let mut storage = vec![1u8, 2, 3, 4];
        let ptr = storage.as_mut_ptr();
        let view = unsafe { runtime.new_direct_buffer(ptr as i64, 4).unwrap() };
        drop(view);

        assert_eq!(storage, [1, 2, 3, 4]);
    }

    #[test]
    fn test_typed_view() {
        let runtime = RuntimeNative::new().unwrap();

        let mut storage = [1.0f32, 2.0, 3.0];
        let ptr = storage.as_mut_ptr();
        let mut view = unsafe { runtime.new_direct_buffer(ptr as i64, 12).unwrap() };

        assert_eq!(view.host_slice::<f32>().unwrap(), &[1.0, 2.0, 3.0]);
        view.host_slice_mut::<f32>().unwrap()[1] = 8.0;
        assert_eq!(unsafe { ptr.add(1).read() }, 8.0);
        assert!(view.host_slice::<f64>().is_err());
    }
}
