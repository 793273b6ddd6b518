use crate::ViewError;
#[cfg(feature="python")]
use crate::ViewAccess;

use super::RawRegion;

// Converters
pub(crate) fn address_to_ptr(address: i64) -> Result<*mut u8, ViewError> {
    // Addresses arrive as a signed 64-bit bit pattern
    let bits = address as u64;
    let address = usize::try_from(bits).map_err(|_| ViewError::AddressOutOfRange(bits))?;

    Ok(address as *mut u8)
}

pub(crate) fn capacity_to_len(capacity: i64) -> Result<usize, ViewError> {
    if capacity < 0 {
        return Err(ViewError::NegativeCapacity(capacity));
    }

    match usize::try_from(capacity) {
        Ok(len) if len <= isize::MAX as usize => Ok(len),
        _ => Err(ViewError::CapacityTooLarge(capacity))
    }
}

// CPython buffer flags (object.h)
#[cfg(feature="python")]
pub(crate) fn access_to_python(access: ViewAccess) -> std::os::raw::c_int {
    const PY_BUF_READ: std::os::raw::c_int = 0x100;
    const PY_BUF_WRITE: std::os::raw::c_int = 0x200;

    match access.contains(ViewAccess::Write) {
        true => PY_BUF_WRITE,
        false => PY_BUF_READ
    }
}

pub(crate) fn region_from_raw(address: i64, capacity: i64) -> Result<RawRegion, ViewError> {
    let ptr = address_to_ptr(address)?;
    let len = capacity_to_len(capacity)?;

    #[cfg(feature="validation")]
    validate(ptr, len)?;

    Ok(RawRegion::new(ptr, len))
}

#[cfg(feature="validation")]
fn validate(ptr: *mut u8, len: usize) -> Result<(), ViewError> {
    if ptr.is_null() && len != 0 {
        return Err(ViewError::NullAddress(len));
    }

    let address = ptr as usize;
    if address.checked_add(len).is_none() {
        return Err(ViewError::RegionOverflow { address, capacity: len });
    }

    Ok(())
}
