use uuid::Uuid;

use super::asset::PickerResult;
use super::options::PickerOptions;
use super::resource::ResourceRef;

/// What the platform was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    ImageCapture,
    VideoCapture,
    MixedCapture,
    LibrarySelect,
}

/// Caller completion handle.
///
/// `FnOnce` so a result can be delivered at most once by construction; the
/// session guarantees it is delivered at least once.
pub type CompletionHandle = Box<dyn FnOnce(PickerResult) + Send + 'static>;

/// Outcome reported by the host's asynchronous event-delivery mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The external surface finished successfully. Library selection carries
    /// the chosen references here; capture modes return nothing because they
    /// write into the pre-provisioned output slots.
    Success { items: Vec<ResourceRef> },
    /// The user backed out.
    Canceled,
    /// The external surface reported a failure.
    Failed { message: String },
}

/// The single in-flight request. At most one exists at any time.
pub struct PendingRequest {
    /// Identifier stamped on the outbound request; callbacks that do not
    /// carry it are stale and must be dropped.
    pub id: Uuid,
    pub kind: RequestKind,
    /// Provisioned photo output slot. Mixed capture fills both slots
    /// speculatively since the user picks a sub-flow at launch time.
    pub image_slot: Option<ResourceRef>,
    /// Provisioned video output slot.
    pub video_slot: Option<ResourceRef>,
    pub options: PickerOptions,
    pub handle: CompletionHandle,
}

impl PendingRequest {
    /// Every provisioned slot tied to this request.
    pub fn provisioned_slots(&self) -> impl Iterator<Item = &ResourceRef> {
        self.image_slot.iter().chain(self.video_slot.iter())
    }
}
