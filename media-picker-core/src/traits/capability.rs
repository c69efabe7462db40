/// A grouping of platform versions sharing the same library-selection APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiTier {
    /// Pick-one / get-content style selection.
    Legacy,
    /// Dedicated multi-select media picker.
    Modern,
}

/// Capability keys the gate can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Camera,
    /// Writing captured media into the public library. Only required on the
    /// legacy tier; the modern tier saves without it.
    MediaLibraryWrite,
}

/// Read-only view of platform and environment preconditions.
///
/// Evaluated before anything is provisioned, so a rejected launch never
/// leaks a temp file. Implementations must be side-effect free.
pub trait CapabilityGate: Send + Sync {
    /// Whether capture hardware is present at all.
    fn capture_available(&self) -> bool;

    /// Whether the user has granted the given capability.
    fn has_permission(&self, capability: Capability) -> bool;

    /// Which library-selection API generation the platform offers.
    fn api_tier(&self) -> ApiTier;

    /// Platform maximum for multi-select item counts on the modern tier,
    /// substituted when the caller requests an unbounded selection.
    fn selection_cap(&self) -> u32;
}
