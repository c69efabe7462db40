use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of media a provisioned output slot is meant to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Photo,
    Video,
}

impl ResourceKind {
    pub fn default_extension(&self) -> &'static str {
        match self {
            Self::Photo => "jpg",
            Self::Video => "mp4",
        }
    }
}

/// Opaque shareable reference to a media location.
///
/// The provisioner decides what the string means (content URI, file path);
/// the core only threads it through and compares it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRef(String);

impl ResourceRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File extension of the last path segment, if any.
    pub fn extension(&self) -> Option<&str> {
        let name = self.0.rsplit(['/', '\\']).next()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext)
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceRef {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

/// Per-reference metadata read used by the response normalizer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaMetadata {
    pub byte_size: u64,
    /// Declared content type, if the backing store knows one. The normalizer
    /// falls back to extension sniffing when this is `None`.
    pub content_type: Option<String>,
    /// Duration in seconds, for media that has one.
    pub duration_secs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_of_plain_path() {
        assert_eq!(ResourceRef::from("/tmp/abc.jpg").extension(), Some("jpg"));
        assert_eq!(ResourceRef::from("content://media/1234.MP4").extension(), Some("MP4"));
    }

    #[test]
    fn extension_absent() {
        assert_eq!(ResourceRef::from("/tmp/abc").extension(), None);
        assert_eq!(ResourceRef::from("/tmp/.hidden").extension(), None);
        assert_eq!(ResourceRef::from("/tmp/trailing.").extension(), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ResourceRef::from("/tmp/a.jpg")).unwrap();
        assert_eq!(json, "\"/tmp/a.jpg\"");
    }
}
