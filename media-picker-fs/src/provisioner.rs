use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use media_picker_core::{MediaMetadata, PickerError, ResourceKind, ResourceProvisioner, ResourceRef};

/// Filesystem-backed resource provisioner.
///
/// Temp slots are uuid-named empty files under `temp_dir`; `persist` copies
/// into `library_dir` the way a platform save-to-gallery step would. The
/// declared content type is always `None` — plain files carry no type, so
/// the normalizer's extension sniffing takes over.
pub struct TempStoreProvisioner {
    temp_dir: PathBuf,
    library_dir: PathBuf,
}

impl TempStoreProvisioner {
    pub fn new(temp_dir: impl Into<PathBuf>, library_dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: temp_dir.into(),
            library_dir: library_dir.into(),
        }
    }

    fn path_of(resource: &ResourceRef) -> &Path {
        Path::new(resource.as_str())
    }
}

impl ResourceProvisioner for TempStoreProvisioner {
    fn provision(&self, kind: ResourceKind) -> Result<ResourceRef, PickerError> {
        fs::create_dir_all(&self.temp_dir)
            .map_err(|e| PickerError::Provision(format!("failed to create temp directory: {e}")))?;
        let name = format!("{}.{}", Uuid::new_v4(), kind.default_extension());
        let path = self.temp_dir.join(name);
        fs::File::create(&path)
            .map_err(|e| PickerError::Provision(format!("failed to create temp file: {e}")))?;
        Ok(ResourceRef::new(path.to_string_lossy()))
    }

    fn grant_external_access(&self, resource: &ResourceRef) -> Result<(), PickerError> {
        // Same-process filesystem access needs no grant.
        log::debug!("granting external access to {resource}");
        Ok(())
    }

    fn stat_size(&self, resource: &ResourceRef) -> u64 {
        fs::metadata(Self::path_of(resource)).map(|m| m.len()).unwrap_or(0)
    }

    fn metadata(&self, resource: &ResourceRef) -> Result<MediaMetadata, PickerError> {
        let meta = fs::metadata(Self::path_of(resource))
            .map_err(|e| PickerError::Other(format!("cannot resolve {resource}: {e}")))?;
        Ok(MediaMetadata {
            byte_size: meta.len(),
            content_type: None,
            duration_secs: None,
        })
    }

    fn persist(&self, resource: &ResourceRef, kind: ResourceKind) -> Result<ResourceRef, PickerError> {
        fs::create_dir_all(&self.library_dir)
            .map_err(|e| PickerError::Provision(format!("failed to create library directory: {e}")))?;
        let prefix = match kind {
            ResourceKind::Photo => "IMG",
            ResourceKind::Video => "VID",
        };
        let source = Self::path_of(resource);
        let ext = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_else(|| kind.default_extension());
        let name = format!("{prefix}_{}.{ext}", chrono::Utc::now().format("%Y%m%d_%H%M%S%3f"));
        let dest = self.library_dir.join(name);
        fs::copy(source, &dest)
            .map_err(|e| PickerError::Provision(format!("failed to save {resource}: {e}")))?;
        Ok(ResourceRef::new(dest.to_string_lossy()))
    }

    fn release(&self, resource: &ResourceRef) {
        match fs::remove_file(Self::path_of(resource)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("failed to release {resource}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provisioner() -> (tempfile::TempDir, TempStoreProvisioner) {
        let root = tempfile::tempdir().unwrap();
        let provisioner =
            TempStoreProvisioner::new(root.path().join("tmp"), root.path().join("library"));
        (root, provisioner)
    }

    #[test]
    fn provision_creates_an_empty_file() {
        let (_root, provisioner) = provisioner();
        let resource = provisioner.provision(ResourceKind::Photo).unwrap();

        assert!(Path::new(resource.as_str()).exists());
        assert_eq!(resource.extension(), Some("jpg"));
        assert_eq!(provisioner.stat_size(&resource), 0);
    }

    #[test]
    fn stat_reflects_written_bytes() {
        let (_root, provisioner) = provisioner();
        let resource = provisioner.provision(ResourceKind::Video).unwrap();
        fs::write(resource.as_str(), vec![0u8; 1024]).unwrap();

        assert_eq!(provisioner.stat_size(&resource), 1024);
        assert_eq!(provisioner.metadata(&resource).unwrap().byte_size, 1024);
    }

    #[test]
    fn stat_of_missing_reference_is_zero() {
        let (_root, provisioner) = provisioner();
        assert_eq!(provisioner.stat_size(&ResourceRef::from("/nope/gone.jpg")), 0);
    }

    #[test]
    fn metadata_of_missing_reference_fails() {
        let (_root, provisioner) = provisioner();
        assert!(provisioner.metadata(&ResourceRef::from("/nope/gone.jpg")).is_err());
    }

    #[test]
    fn release_is_idempotent_and_never_panics() {
        let (_root, provisioner) = provisioner();
        let resource = provisioner.provision(ResourceKind::Photo).unwrap();

        provisioner.release(&resource);
        assert!(!Path::new(resource.as_str()).exists());
        provisioner.release(&resource); // already gone
        provisioner.release(&ResourceRef::from("/never/was.jpg"));
    }

    #[test]
    fn persist_copies_into_the_library() {
        let (_root, provisioner) = provisioner();
        let resource = provisioner.provision(ResourceKind::Photo).unwrap();
        fs::write(resource.as_str(), b"jpeg bytes").unwrap();

        let saved = provisioner.persist(&resource, ResourceKind::Photo).unwrap();

        let name = Path::new(saved.as_str()).file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("IMG_"), "unexpected library name: {name}");
        assert_eq!(fs::read(saved.as_str()).unwrap(), b"jpeg bytes");
        // The original temp file is untouched.
        assert_eq!(provisioner.stat_size(&resource), 10);
    }

    #[test]
    fn grant_is_idempotent() {
        let (_root, provisioner) = provisioner();
        let resource = provisioner.provision(ResourceKind::Photo).unwrap();
        provisioner.grant_external_access(&resource).unwrap();
        provisioner.grant_external_access(&resource).unwrap();
    }
}
