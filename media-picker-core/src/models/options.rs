use serde::{Deserialize, Serialize};

use super::error::PickerError;
use super::pending::RequestKind;

/// Media class the caller wants to capture or select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
    /// Capture only: the platform offers the user a photo-or-video choice
    /// at launch time.
    Mixed,
}

/// Quality hint attached to video capture requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoQuality {
    Low,
    High,
}

/// Caller-supplied request configuration. Frozen once a launch begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerOptions {
    pub media_type: MediaType,

    /// Library selection cap: 0 = platform default/unbounded,
    /// 1 = single-select, N = at most N items.
    pub selection_limit: u32,

    pub use_front_camera: bool,

    /// Copy captured media into durable public storage. Best-effort: a
    /// failed save degrades to "not saved", it never fails the result.
    pub save_to_library: bool,

    pub video_quality: VideoQuality,

    /// Duration cap for video capture in seconds; 0 = none.
    pub duration_limit_secs: u32,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            media_type: MediaType::Photo,
            selection_limit: 1,
            use_front_camera: false,
            save_to_library: false,
            video_quality: VideoQuality::High,
            duration_limit_secs: 0,
        }
    }
}

impl PickerOptions {
    /// Reject invalid option combinations before anything is provisioned
    /// or any platform call is made.
    pub fn validate(&self, kind: RequestKind) -> Result<(), PickerError> {
        if kind != RequestKind::LibrarySelect && self.selection_limit > 1 {
            return Err(PickerError::Other(format!(
                "selectionLimit {} is not valid for camera capture",
                self.selection_limit
            )));
        }
        Ok(())
    }
}
