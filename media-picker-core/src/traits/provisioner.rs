use crate::models::error::PickerError;
use crate::models::resource::{MediaMetadata, ResourceKind, ResourceRef};

/// Interface for the host's temporary-storage and media-store primitives.
///
/// Implemented by `media-picker-fs` for plain filesystems; a mobile host
/// would back this with its content-resolver equivalent.
pub trait ResourceProvisioner: Send + Sync {
    /// Allocate a writable temporary location for the given kind.
    fn provision(&self, kind: ResourceKind) -> Result<ResourceRef, PickerError>;

    /// Make the reference readable and writable by an external capture
    /// surface. Idempotent.
    fn grant_external_access(&self, resource: &ResourceRef) -> Result<(), PickerError>;

    /// Byte size of the referenced content. Returns 0 when the reference no
    /// longer resolves or nothing was written — the signal mixed-mode
    /// disambiguation keys on.
    fn stat_size(&self, resource: &ResourceRef) -> u64;

    /// Metadata for the normalizer: size, declared content type, duration.
    fn metadata(&self, resource: &ResourceRef) -> Result<MediaMetadata, PickerError>;

    /// Copy the content into durable public storage, returning the durable
    /// reference. Callers treat failure as non-fatal.
    fn persist(&self, resource: &ResourceRef, kind: ResourceKind) -> Result<ResourceRef, PickerError>;

    /// Delete a provisioned temporary location. Must be a no-op on a
    /// reference that was never written to or is already gone.
    fn release(&self, resource: &ResourceRef);
}
