pub mod error;
pub mod ffi;
pub mod traits;
pub use error::ViewError;
pub use traits::*;

pub(crate) mod internal_managers;

pub mod native;
#[cfg(feature="python")]
pub mod python;

pub use anyhow::{Result, Error};

use paste::paste;

pub struct Native;
#[cfg(feature="python")]
pub struct Python;

macro_rules! create_primitive {
    ($name:ident) => {
        paste! {
            pub trait [<$name Primitive>]<T>
                where Self::Inner: [<I $name>]<T>, T: DirectType<T> {
                type Inner;
            }

            impl [<$name Primitive>]<Native> for Native { type Inner = native::mappings::[<$name Native>]; }
            #[cfg(feature="python")]
            impl [<$name Primitive>]<Python> for Python { type Inner = python::mappings::[<$name Python>]; }
            pub type $name<T> = <T as [<$name Primitive>]<T>>::Inner;
        }
    };
}

pub trait DirectType<T>: RuntimePrimitive<T> + ViewPrimitive<T>
    where T: DirectType<T> { }
impl DirectType<Native> for Native { }
#[cfg(feature="python")]
impl DirectType<Python> for Python { }

create_primitive!(Runtime);
create_primitive!(View);
