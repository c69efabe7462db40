use media_picker_core::{ApiTier, Capability, CapabilityGate};

/// Configurable host capability gate.
///
/// Desktop filesystems have no permission prompts, so the default grants
/// everything; embedders flip the fields to mirror their host environment.
#[derive(Debug, Clone)]
pub struct HostCapabilities {
    capture_available: bool,
    camera_granted: bool,
    library_write_granted: bool,
    api_tier: ApiTier,
    selection_cap: u32,
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self {
            capture_available: true,
            camera_granted: true,
            library_write_granted: true,
            api_tier: ApiTier::Modern,
            selection_cap: 100,
        }
    }
}

impl HostCapabilities {
    pub fn with_capture_available(mut self, available: bool) -> Self {
        self.capture_available = available;
        self
    }

    pub fn with_camera_granted(mut self, granted: bool) -> Self {
        self.camera_granted = granted;
        self
    }

    pub fn with_library_write_granted(mut self, granted: bool) -> Self {
        self.library_write_granted = granted;
        self
    }

    pub fn with_api_tier(mut self, tier: ApiTier) -> Self {
        self.api_tier = tier;
        self
    }

    pub fn with_selection_cap(mut self, cap: u32) -> Self {
        self.selection_cap = cap;
        self
    }
}

impl CapabilityGate for HostCapabilities {
    fn capture_available(&self) -> bool {
        self.capture_available
    }

    fn has_permission(&self, capability: Capability) -> bool {
        match capability {
            Capability::Camera => self.camera_granted,
            Capability::MediaLibraryWrite => self.library_write_granted,
        }
    }

    fn api_tier(&self) -> ApiTier {
        self.api_tier
    }

    fn selection_cap(&self) -> u32 {
        self.selection_cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grants_everything() {
        let gate = HostCapabilities::default();
        assert!(gate.capture_available());
        assert!(gate.has_permission(Capability::Camera));
        assert!(gate.has_permission(Capability::MediaLibraryWrite));
        assert_eq!(gate.api_tier(), ApiTier::Modern);
    }

    #[test]
    fn builder_setters_apply() {
        let gate = HostCapabilities::default()
            .with_camera_granted(false)
            .with_api_tier(ApiTier::Legacy)
            .with_selection_cap(5);
        assert!(!gate.has_permission(Capability::Camera));
        assert!(gate.has_permission(Capability::MediaLibraryWrite));
        assert_eq!(gate.api_tier(), ApiTier::Legacy);
        assert_eq!(gate.selection_cap(), 5);
    }
}
