pub mod runtime;
pub use runtime::RuntimeNative;

pub mod view;
pub use view::ViewNative;
