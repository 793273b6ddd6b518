pub mod region;
pub mod utils;

pub(crate) use region::RawRegion;
