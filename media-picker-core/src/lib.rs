//! # media-picker-core
//!
//! Platform-agnostic media picker core library.
//!
//! Normalizes camera capture and media-library selection into one
//! request/response contract: build the right platform request for a mode
//! and capability tier, track the single in-flight request and its
//! provisioned temp slots, reconcile the asynchronous platform callback,
//! and deliver exactly one normalized result per launch. Host-specific
//! backends (filesystem, mobile bridges) implement the collaborator traits
//! and plug into the generic `PickerSession`.
//!
//! ## Architecture
//!
//! ```text
//! media-picker-core (this crate)
//! ├── traits/     ← CapabilityGate, ResourceProvisioner, PlatformLauncher
//! ├── models/     ← PickerOptions, PickerError, PendingRequest, MediaAsset, PickerResult
//! ├── request/    ← PlatformRequest variants + the request builder
//! ├── session/    ← PickerSession (tracker + result reconciler)
//! └── normalize   ← resolved references → caller-facing assets
//! ```

pub mod models;
pub mod normalize;
pub mod request;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::asset::{MediaAsset, PickerResult};
pub use models::error::PickerError;
pub use models::options::{MediaType, PickerOptions, VideoQuality};
pub use models::pending::{CallbackOutcome, CompletionHandle, PendingRequest, RequestKind};
pub use models::resource::{MediaMetadata, ResourceKind, ResourceRef};
pub use request::{BuiltRequest, CaptureIntent, PlatformRequest, TypeFilter};
pub use session::PickerSession;
pub use traits::capability::{ApiTier, Capability, CapabilityGate};
pub use traits::launcher::PlatformLauncher;
pub use traits::provisioner::ResourceProvisioner;
