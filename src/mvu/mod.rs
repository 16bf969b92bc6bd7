pub mod picker;
pub mod runtime;

pub use runtime::run_picker;
