pub mod picker;

pub use picker::PickerSession;
