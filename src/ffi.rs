use std::{ffi::c_void, ptr};

use log::error;

use crate::native::mappings::{RuntimeNative, ViewNative};
use crate::{IRuntime, IView};

/** Wraps `capacity` bytes at `addr` in a new view. Returns null if the arguments can't form a region.
 *
 * # Safety
 * `addr` must point to `capacity` accessible bytes for the whole lifetime of the view.
 */
#[no_mangle]
pub unsafe extern "C" fn cobra_direct_new_view(addr: i64, capacity: i64) -> Option<Box<ViewNative>> {
    let view = RuntimeNative.new_direct_buffer(addr, capacity);
    match view {
        Ok(view) => Some(Box::new(view)),
        Err(err) => {
            error!("cobra_direct_new_view({addr:#x}, {capacity}) failed: {err}");
            None
        }
    }
}

/** Base address of a view, or null for a null handle. */
#[no_mangle]
pub extern "C" fn cobra_direct_view_address(view: Option<&ViewNative>) -> *mut c_void {
    view.map_or(ptr::null_mut(), |view| view.host_address())
}

/** Capacity of a view in bytes, or -1 for a null handle. */
#[no_mangle]
pub extern "C" fn cobra_direct_view_capacity(view: Option<&ViewNative>) -> i64 {
    view.map_or(-1, |view| view.size() as i64)
}

/** Frees a view handle. The memory it aliases is left untouched. */
#[no_mangle]
pub extern "C" fn cobra_direct_free_view(_view: Option<Box<ViewNative>>) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_view_aliases_memory() {
        let _ = pretty_env_logger::try_init();

        let mut storage: Vec<u8> = (0x00..0x10).collect();
        let ptr = storage.as_mut_ptr();
        let view = unsafe { cobra_direct_new_view(ptr as i64, 16) }.unwrap();

        assert_eq!(cobra_direct_view_address(Some(&view)), ptr.cast());
        assert_eq!(cobra_direct_view_capacity(Some(&view)), 16);
        assert_eq!(view[5], 0x05);

        cobra_direct_free_view(Some(view));
        assert_eq!(storage[15], 0x0F);
    }

    #[test]
    fn handles_are_distinct() {
        let mut storage = [0u8; 4];
        let ptr = storage.as_mut_ptr();
        let first = unsafe { cobra_direct_new_view(ptr as i64, 4) }.unwrap();
        let second = unsafe { cobra_direct_new_view(ptr as i64, 4) }.unwrap();

        assert!(!ptr::eq(&*first, &*second));
        assert_eq!(cobra_direct_view_address(Some(&first)), cobra_direct_view_address(Some(&second)));
    }

    #[test]
    fn zero_capacity_is_not_null() {
        let view = unsafe { cobra_direct_new_view(0, 0) };

        assert!(view.is_some());
        assert_eq!(cobra_direct_view_capacity(view.as_deref()), 0);
    }

    #[test]
    fn negative_capacity_is_null() {
        assert!(unsafe { cobra_direct_new_view(0x1000, -1) }.is_none());
    }

    #[test]
    fn null_handle_queries() {
        assert!(cobra_direct_view_address(None).is_null());
        assert_eq!(cobra_direct_view_capacity(None), -1);
        cobra_direct_free_view(None);
    }
}
