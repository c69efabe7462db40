pub mod builder;
pub mod platform;

pub use builder::{build, BuiltRequest};
pub use platform::{CaptureIntent, PlatformRequest, TypeFilter};
