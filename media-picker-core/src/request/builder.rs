use crate::models::error::PickerError;
use crate::models::options::{MediaType, PickerOptions};
use crate::models::pending::RequestKind;
use crate::models::resource::{ResourceKind, ResourceRef};
use crate::traits::capability::ApiTier;
use crate::traits::provisioner::ResourceProvisioner;

use super::platform::{CaptureIntent, PlatformRequest, TypeFilter};

/// A built outbound request plus the output slots provisioned for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub request: PlatformRequest,
    pub image_slot: Option<ResourceRef>,
    pub video_slot: Option<ResourceRef>,
}

/// Build the outbound platform request for `kind`, provisioning and granting
/// whatever output slots the kind needs.
///
/// On any provisioning failure, slots already provisioned by this call are
/// released before the error is returned.
pub fn build<P: ResourceProvisioner + ?Sized>(
    kind: RequestKind,
    options: &PickerOptions,
    tier: ApiTier,
    selection_cap: u32,
    provisioner: &P,
) -> Result<BuiltRequest, PickerError> {
    match kind {
        RequestKind::ImageCapture => {
            let output = provision_granted(provisioner, ResourceKind::Photo)?;
            Ok(BuiltRequest {
                request: PlatformRequest::ImageCapture(image_intent(&output, options)),
                image_slot: Some(output),
                video_slot: None,
            })
        }
        RequestKind::VideoCapture => {
            let output = provision_granted(provisioner, ResourceKind::Video)?;
            Ok(BuiltRequest {
                request: PlatformRequest::VideoCapture(video_intent(&output, options)),
                image_slot: None,
                video_slot: Some(output),
            })
        }
        RequestKind::MixedCapture => {
            // Both slots are provisioned speculatively: the user chooses the
            // sub-flow only after the chooser is on screen.
            let image = provision_granted(provisioner, ResourceKind::Photo)?;
            let video = match provision_granted(provisioner, ResourceKind::Video) {
                Ok(video) => video,
                Err(e) => {
                    provisioner.release(&image);
                    return Err(e);
                }
            };
            Ok(BuiltRequest {
                request: PlatformRequest::CaptureChooser {
                    image: image_intent(&image, options),
                    video: video_intent(&video, options),
                },
                image_slot: Some(image),
                video_slot: Some(video),
            })
        }
        RequestKind::LibrarySelect => Ok(BuiltRequest {
            request: library_request(options, tier, selection_cap),
            image_slot: None,
            video_slot: None,
        }),
    }
}

fn provision_granted<P: ResourceProvisioner + ?Sized>(
    provisioner: &P,
    kind: ResourceKind,
) -> Result<ResourceRef, PickerError> {
    let resource = provisioner.provision(kind)?;
    if let Err(e) = provisioner.grant_external_access(&resource) {
        provisioner.release(&resource);
        return Err(e);
    }
    Ok(resource)
}

fn image_intent(output: &ResourceRef, options: &PickerOptions) -> CaptureIntent {
    CaptureIntent {
        output: output.clone(),
        front_camera: options.use_front_camera,
        quality: None,
        duration_limit_secs: None,
    }
}

fn video_intent(output: &ResourceRef, options: &PickerOptions) -> CaptureIntent {
    CaptureIntent {
        output: output.clone(),
        front_camera: options.use_front_camera,
        quality: Some(options.video_quality),
        duration_limit_secs: (options.duration_limit_secs > 0).then_some(options.duration_limit_secs),
    }
}

fn library_request(options: &PickerOptions, tier: ApiTier, selection_cap: u32) -> PlatformRequest {
    let filter = match options.media_type {
        MediaType::Photo => TypeFilter::Images,
        MediaType::Video => TypeFilter::Videos,
        MediaType::Mixed => TypeFilter::Any,
    };
    let single = options.selection_limit == 1;

    match tier {
        ApiTier::Legacy => {
            if single && filter != TypeFilter::Any {
                PlatformRequest::PickSingle { filter }
            } else {
                // Wildcard filters carry an explicit accepted-types hint so
                // the content surface still narrows to media.
                let mime_hints = match filter {
                    TypeFilter::Any => vec![
                        TypeFilter::Images.mime_pattern().to_string(),
                        TypeFilter::Videos.mime_pattern().to_string(),
                    ],
                    TypeFilter::Images | TypeFilter::Videos => Vec::new(),
                };
                PlatformRequest::GetContent {
                    allow_multiple: !single,
                    filter,
                    mime_hints,
                }
            }
        }
        ApiTier::Modern => {
            let max_items = if single {
                None
            } else if options.selection_limit == 0 {
                Some(selection_cap)
            } else {
                Some(options.selection_limit)
            };
            PlatformRequest::ModernPick { max_items, filter }
        }
    }
}
