use uuid::Uuid;

use crate::models::error::PickerError;
use crate::request::PlatformRequest;

/// Hands a built request to the external capture/selection surface.
///
/// The launch is fire-and-forget; the outcome arrives later through
/// `PickerSession::on_external_result` with the same `request_id`.
pub trait PlatformLauncher: Send + Sync {
    /// Start the external surface for `request`.
    ///
    /// Return `PickerError::HostUnavailable` when there is no surface to
    /// host the request (the equivalent of an activity-not-found failure).
    fn launch(&self, request_id: Uuid, request: &PlatformRequest) -> Result<(), PickerError>;
}
