use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::asset::{MediaAsset, PickerResult};
use crate::models::error::PickerError;
use crate::models::options::{MediaType, PickerOptions};
use crate::models::pending::{CallbackOutcome, CompletionHandle, PendingRequest, RequestKind};
use crate::models::resource::{ResourceKind, ResourceRef};
use crate::normalize;
use crate::request::{self, BuiltRequest};
use crate::traits::capability::{ApiTier, Capability, CapabilityGate};
use crate::traits::launcher::PlatformLauncher;
use crate::traits::provisioner::ResourceProvisioner;

/// Session phase.
///
/// ```text
/// Idle → Awaiting → Resolving → Idle
/// ```
///
/// Only `Awaiting` accepts an external callback; only `Idle` accepts a new
/// launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Awaiting,
    Resolving,
}

/// Single-slot request tracker. Written by launches, read and cleared by the
/// reconciler; nothing else touches it.
struct Slot {
    phase: Phase,
    pending: Option<PendingRequest>,
}

/// Request/response orchestrator for one picker surface.
///
/// Generic over the host collaborators: a capability gate, a resource
/// provisioner, and a platform launcher. At most one request is in flight at
/// a time; a launch attempted while one is pending is rejected immediately
/// rather than racing the active slot. The caller's completion handle fires
/// exactly once per launch, on every path.
pub struct PickerSession<G, P, L>
where
    G: CapabilityGate,
    P: ResourceProvisioner + 'static,
    L: PlatformLauncher,
{
    gate: G,
    provisioner: Arc<P>,
    launcher: L,
    slot: Arc<Mutex<Slot>>,
}

impl<G, P, L> PickerSession<G, P, L>
where
    G: CapabilityGate,
    P: ResourceProvisioner + 'static,
    L: PlatformLauncher,
{
    pub fn new(gate: G, provisioner: P, launcher: L) -> Self {
        Self {
            gate,
            provisioner: Arc::new(provisioner),
            launcher,
            slot: Arc::new(Mutex::new(Slot {
                phase: Phase::Idle,
                pending: None,
            })),
        }
    }

    pub fn provisioner(&self) -> &P {
        &self.provisioner
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Whether the session can accept a new launch.
    pub fn is_idle(&self) -> bool {
        self.slot.lock().phase == Phase::Idle
    }

    /// Launch the camera. The capture kind follows `options.media_type`.
    ///
    /// The result arrives asynchronously through `on_complete`, never
    /// synchronously from the platform surface — though precondition
    /// failures do complete before this returns.
    pub fn launch_camera(&self, options: PickerOptions, on_complete: CompletionHandle) {
        let kind = match options.media_type {
            MediaType::Photo => RequestKind::ImageCapture,
            MediaType::Video => RequestKind::VideoCapture,
            MediaType::Mixed => RequestKind::MixedCapture,
        };

        // Preconditions are pure reads; nothing is provisioned until every
        // one of them has passed.
        if !self.gate.capture_available() {
            on_complete(PickerResult::Error(PickerError::CaptureUnavailable));
            return;
        }
        if !self.gate.has_permission(Capability::Camera) {
            on_complete(PickerResult::Error(PickerError::PermissionDenied));
            return;
        }
        if options.save_to_library
            && self.gate.api_tier() == ApiTier::Legacy
            && !self.gate.has_permission(Capability::MediaLibraryWrite)
        {
            on_complete(PickerResult::Error(PickerError::PermissionDenied));
            return;
        }

        self.launch(kind, options, on_complete);
    }

    /// Launch the media library picker.
    pub fn launch_library(&self, options: PickerOptions, on_complete: CompletionHandle) {
        self.launch(RequestKind::LibrarySelect, options, on_complete);
    }

    fn launch(&self, kind: RequestKind, options: PickerOptions, on_complete: CompletionHandle) {
        if let Err(e) = options.validate(kind) {
            on_complete(PickerResult::Error(e));
            return;
        }

        // Reserve the slot before provisioning anything. Reject policy: a
        // launch while a request is pending completes with an error instead
        // of replacing the in-flight slot.
        {
            let mut slot = self.slot.lock();
            if slot.phase != Phase::Idle {
                drop(slot);
                on_complete(PickerResult::Error(PickerError::Other(
                    "a picker request is already in progress".into(),
                )));
                return;
            }
            slot.phase = Phase::Awaiting;
        }

        let built = match request::build(
            kind,
            &options,
            self.gate.api_tier(),
            self.gate.selection_cap(),
            self.provisioner.as_ref(),
        ) {
            Ok(built) => built,
            Err(e) => {
                self.slot.lock().phase = Phase::Idle;
                on_complete(PickerResult::Error(e));
                return;
            }
        };

        let id = Uuid::new_v4();
        let BuiltRequest {
            request,
            image_slot,
            video_slot,
        } = built;

        // The pending request must be in place before the launcher runs:
        // the external callback may arrive on another thread immediately.
        {
            let mut slot = self.slot.lock();
            slot.pending = Some(PendingRequest {
                id,
                kind,
                image_slot,
                video_slot,
                options,
                handle: on_complete,
            });
        }

        if let Err(e) = self.launcher.launch(id, &request) {
            // Roll back as if the launch never happened.
            let pending = {
                let mut slot = self.slot.lock();
                slot.phase = Phase::Idle;
                slot.pending.take()
            };
            if let Some(pending) = pending {
                self.release_slots(&pending);
                (pending.handle)(PickerResult::Error(e));
            }
            return;
        }

        log::debug!("launched {kind:?} request {id}");
    }

    /// Sole intake for the host's asynchronous result delivery.
    ///
    /// Safe against duplicate and late delivery: a callback whose identifier
    /// does not match the pending request, or that arrives with no request
    /// pending, is dropped without touching any state.
    pub fn on_external_result(&self, request_id: Uuid, outcome: CallbackOutcome) {
        let pending = {
            let mut slot = self.slot.lock();
            let matches = matches!(slot.pending.as_ref(), Some(p) if p.id == request_id);
            if !matches {
                log::debug!("dropping callback for unknown request {request_id}");
                return;
            }
            slot.phase = Phase::Resolving;
            slot.pending.take()
        };
        let Some(pending) = pending else { return };

        match outcome {
            CallbackOutcome::Canceled => {
                self.release_slots(&pending);
                self.finish(pending.handle, PickerResult::Canceled);
            }
            CallbackOutcome::Failed { message } => {
                self.release_slots(&pending);
                self.finish(pending.handle, PickerResult::Error(PickerError::Other(message)));
            }
            CallbackOutcome::Success { items } => self.resolve_off_thread(pending, items),
        }
    }

    fn release_slots(&self, pending: &PendingRequest) {
        for slot in pending.provisioned_slots() {
            self.provisioner.release(slot);
        }
    }

    /// Clear the slot and deliver the result. Every reconciliation path
    /// funnels through here, so the handle fires exactly once.
    fn finish(&self, handle: CompletionHandle, result: PickerResult) {
        self.slot.lock().phase = Phase::Idle;
        handle(result);
    }

    /// Success-path resolution runs on its own thread so persistence and
    /// size checks never block whatever thread delivered the callback.
    fn resolve_off_thread(&self, pending: PendingRequest, items: Vec<ResourceRef>) {
        let provisioner = Arc::clone(&self.provisioner);
        let slot = Arc::clone(&self.slot);
        thread::Builder::new()
            .name("picker-resolve".into())
            .spawn(move || {
                let PendingRequest {
                    id,
                    kind,
                    image_slot,
                    video_slot,
                    options,
                    handle,
                } = pending;
                let result =
                    match resolve_success(provisioner.as_ref(), kind, image_slot, video_slot, &options, items)
                    {
                        Ok(assets) => PickerResult::Success(assets),
                        Err(e) => PickerResult::Error(e),
                    };
                log::debug!("request {id} resolved");
                slot.lock().phase = Phase::Idle;
                handle(result);
            })
            .expect("failed to spawn resolve thread");
    }
}

/// Reconcile a successful platform outcome into assets.
fn resolve_success<P: ResourceProvisioner + ?Sized>(
    provisioner: &P,
    kind: RequestKind,
    image_slot: Option<ResourceRef>,
    video_slot: Option<ResourceRef>,
    options: &PickerOptions,
    items: Vec<ResourceRef>,
) -> Result<Vec<MediaAsset>, PickerError> {
    match kind {
        RequestKind::ImageCapture => {
            finalize_capture(provisioner, image_slot, ResourceKind::Photo, options)
        }
        RequestKind::VideoCapture => {
            finalize_capture(provisioner, video_slot, ResourceKind::Video, options)
        }
        RequestKind::MixedCapture => {
            let (image, video) = match (image_slot, video_slot) {
                (Some(image), Some(video)) => (image, video),
                (image, video) => {
                    // The builder always fills both slots; still release
                    // whichever one is present before bailing.
                    for slot in image.iter().chain(video.iter()) {
                        provisioner.release(slot);
                    }
                    return Err(PickerError::Other(
                        "mixed capture is missing an output slot".into(),
                    ));
                }
            };

            // Only one sub-flow ran; whichever slot has bytes is the user's
            // choice. The loser was never written, but release it anyway.
            if provisioner.stat_size(&image) > 0 {
                provisioner.release(&video);
                finalize_capture(provisioner, Some(image), ResourceKind::Photo, options)
            } else if provisioner.stat_size(&video) > 0 {
                provisioner.release(&image);
                finalize_capture(provisioner, Some(video), ResourceKind::Video, options)
            } else {
                // The chooser reported success but the user backed out of
                // the sub-flow before anything was written.
                provisioner.release(&image);
                provisioner.release(&video);
                Err(PickerError::Other("No file was created".into()))
            }
        }
        RequestKind::LibrarySelect => Ok(normalize::normalize(provisioner, &items)),
    }
}

fn finalize_capture<P: ResourceProvisioner + ?Sized>(
    provisioner: &P,
    slot: Option<ResourceRef>,
    kind: ResourceKind,
    options: &PickerOptions,
) -> Result<Vec<MediaAsset>, PickerError> {
    let resource =
        slot.ok_or_else(|| PickerError::Other("capture finished without an output slot".into()))?;

    let saved = if options.save_to_library {
        match provisioner.persist(&resource, kind) {
            Ok(dest) => Some(dest),
            Err(e) => {
                log::warn!("failed to save {resource} to the library: {e}");
                None
            }
        }
    } else {
        None
    };

    let mut assets = normalize::normalize(provisioner, std::slice::from_ref(&resource));
    if assets.is_empty() {
        provisioner.release(&resource);
        return Err(PickerError::Other(format!(
            "captured media could not be resolved: {resource}"
        )));
    }
    if let Some(dest) = saved {
        if let Some(asset) = assets.first_mut() {
            asset.saved_to = Some(dest);
        }
    }
    Ok(assets)
}
