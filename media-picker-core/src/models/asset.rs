use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::error::PickerError;
use super::resource::ResourceRef;

/// One finalized media item, uniform across platform and mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub uri: ResourceRef,

    #[serde(rename = "type")]
    pub content_type: String,

    pub file_size: u64,

    /// Video duration in seconds; absent for images.
    #[serde(rename = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,

    /// Durable location the item was copied to, when a save was requested
    /// and succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<ResourceRef>,
}

/// Tagged outcome of a launch. Exactly one is delivered per launch, through
/// the caller's completion handle.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerResult {
    Success(Vec<MediaAsset>),
    Canceled,
    Error(PickerError),
}

impl PickerResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Serialized per the completion-handle contract:
/// `{"assets": [...]}` | `{"didCancel": true}` |
/// `{"errorCode": ..., "errorMessage": ...}`.
impl Serialize for PickerResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(assets) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("assets", assets)?;
                map.end()
            }
            Self::Canceled => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("didCancel", &true)?;
                map.end()
            }
            Self::Error(error) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("errorCode", error.code())?;
                map.serialize_entry("errorMessage", &error.to_string())?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cancel_payload_shape() {
        let payload = serde_json::to_value(PickerResult::Canceled).unwrap();
        assert_eq!(payload, json!({"didCancel": true}));
    }

    #[test]
    fn error_payload_shape() {
        let payload = serde_json::to_value(PickerResult::Error(PickerError::CaptureUnavailable)).unwrap();
        assert_eq!(
            payload,
            json!({
                "errorCode": "camera_unavailable",
                "errorMessage": "no capture hardware is available",
            })
        );
    }

    #[test]
    fn success_payload_shape() {
        let asset = MediaAsset {
            uri: ResourceRef::from("/tmp/a.mp4"),
            content_type: "video/mp4".into(),
            file_size: 2048,
            duration_secs: Some(12.5),
            saved_to: None,
        };
        let payload = serde_json::to_value(PickerResult::Success(vec![asset])).unwrap();
        assert_eq!(
            payload,
            json!({
                "assets": [{
                    "uri": "/tmp/a.mp4",
                    "type": "video/mp4",
                    "fileSize": 2048,
                    "duration": 12.5,
                }]
            })
        );
    }
}
