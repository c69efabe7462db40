//! Response normalization: resolved references → caller-facing assets.

use crate::models::asset::MediaAsset;
use crate::models::resource::ResourceRef;
use crate::traits::provisioner::ResourceProvisioner;

/// Convert resolved references into the uniform asset shape.
///
/// A reference that fails to resolve is skipped with a warning instead of
/// aborting the batch; for multi-select a partial result beats total failure.
pub fn normalize<P: ResourceProvisioner + ?Sized>(
    provisioner: &P,
    refs: &[ResourceRef],
) -> Vec<MediaAsset> {
    let mut assets = Vec::with_capacity(refs.len());
    for resource in refs {
        let meta = match provisioner.metadata(resource) {
            Ok(meta) => meta,
            Err(e) => {
                log::warn!("skipping unresolvable reference {resource}: {e}");
                continue;
            }
        };
        let content_type = meta
            .content_type
            .unwrap_or_else(|| sniff_content_type(resource).to_string());
        let duration_secs = if content_type.starts_with("video/") {
            meta.duration_secs
        } else {
            None
        };
        assets.push(MediaAsset {
            uri: resource.clone(),
            content_type,
            file_size: meta.byte_size,
            duration_secs,
            saved_to: None,
        });
    }
    assets
}

/// Extension-based fallback when the store declares no content type.
fn sniff_content_type(resource: &ResourceRef) -> &'static str {
    let Some(ext) = resource.extension() else {
        return "application/octet-stream";
    };
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" | "heif" => "image/heic",
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "3gp" => "video/3gpp",
        _ => "application/octet-stream",
    }
}
