pub mod runtime;
pub use runtime::RuntimePython;

pub mod view;
pub use view::ViewPython;
