use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("negative capacity {0}")]
    NegativeCapacity(i64),
    #[error("capacity {0} exceeds the largest addressable slice")]
    CapacityTooLarge(i64),
    #[error("address {0:#x} does not fit in a pointer on this target")]
    AddressOutOfRange(u64),
    #[error("view is read-only")]
    ReadOnly,
    #[error("cannot reinterpret {len} bytes at {address:#x} as `{ty}`")]
    Cast { address: usize, len: usize, ty: &'static str },

    // Only produced with the `validation` feature
    #[error("null address with capacity {0}")]
    NullAddress(usize),
    #[error("region {address:#x}+{capacity} wraps the address space")]
    RegionOverflow { address: usize, capacity: usize },
}
