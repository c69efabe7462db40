//! # media-picker-fs
//!
//! Filesystem-backed host for media-picker-kit.
//!
//! Provides:
//! - `TempStoreProvisioner` — temp-dir output slots, library copies via `std::fs`
//! - `HostCapabilities` — configurable capability gate
//!
//! A `PlatformLauncher` is deliberately not provided here: what counts as a
//! capture/selection surface is embedder-specific (a desktop dialog, a test
//! double, a mobile bridge).
//!
//! ## Usage
//! ```ignore
//! use media_picker_core::PickerSession;
//! use media_picker_fs::{HostCapabilities, TempStoreProvisioner};
//!
//! let provisioner = TempStoreProvisioner::new("/tmp/picker", "/home/me/Pictures");
//! let session = PickerSession::new(HostCapabilities::default(), provisioner, my_launcher);
//! ```

pub mod capabilities;
pub mod provisioner;

pub use capabilities::HostCapabilities;
pub use provisioner::TempStoreProvisioner;
