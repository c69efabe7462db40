use crate::models::options::VideoQuality;
use crate::models::resource::ResourceRef;

/// Media-type filter for library selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    Images,
    Videos,
    Any,
}

impl TypeFilter {
    /// Platform mime pattern for this filter.
    pub fn mime_pattern(&self) -> &'static str {
        match self {
            Self::Images => "image/*",
            Self::Videos => "video/*",
            Self::Any => "*/*",
        }
    }
}

/// One camera sub-request: where to write and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureIntent {
    /// Pre-provisioned output slot the capture surface writes into.
    pub output: ResourceRef,
    pub front_camera: bool,
    /// Quality hint; video only.
    pub quality: Option<VideoQuality>,
    /// Duration cap in seconds; video only, attached only when positive.
    pub duration_limit_secs: Option<u32>,
}

/// The exact outbound platform request.
///
/// Closed over {capability tier × mode} so that adding a tier or a mode is
/// an exhaustiveness-checked match, not a cascade of conditionals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformRequest {
    ImageCapture(CaptureIntent),
    VideoCapture(CaptureIntent),
    /// Chooser combining an image and a video sub-request; the user picks
    /// one sub-flow at launch time.
    CaptureChooser {
        image: CaptureIntent,
        video: CaptureIntent,
    },
    /// Legacy tier, single item of a concrete media type.
    PickSingle { filter: TypeFilter },
    /// Legacy tier, everything else: openable-content request.
    GetContent {
        allow_multiple: bool,
        filter: TypeFilter,
        /// Explicit accepted-types hint; populated for wildcard filters.
        mime_hints: Vec<String>,
    },
    /// Modern tier dedicated picker.
    ModernPick {
        /// Selection cap; `None` for single-select.
        max_items: Option<u32>,
        filter: TypeFilter,
    },
}
