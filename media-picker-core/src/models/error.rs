use thiserror::Error;

/// Errors that can occur while launching or reconciling a picker request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("no capture hardware is available")]
    CaptureUnavailable,

    #[error("permission denied")]
    PermissionDenied,

    #[error("no surface is available to host the request")]
    HostUnavailable,

    #[error("provisioning failed: {0}")]
    Provision(String),

    #[error("{0}")]
    Other(String),
}

impl PickerError {
    /// Stable machine-readable code carried in the caller-facing payload.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CaptureUnavailable => "camera_unavailable",
            Self::PermissionDenied => "permission",
            Self::HostUnavailable | Self::Provision(_) | Self::Other(_) => "others",
        }
    }
}
