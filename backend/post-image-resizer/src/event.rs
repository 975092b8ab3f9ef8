//! Trigger and response payloads
//!
//! The function is subscribed to `s3:ObjectCreated:*` notifications. Only the
//! fields the resizer reads are modelled; everything else in the record is
//! ignored during deserialization.

use crate::error::{ResizeError, Result};
use serde::{Deserialize, Serialize};

/// Status returned for every invocation, including failures, so the platform
/// never retries a bad image
pub const STATUS_OK: u16 = 200;

pub const SKIPPED_WRONG_BUCKET: &str = "Skipped: wrong bucket";
pub const SKIPPED_WRONG_PATH: &str = "Skipped: wrong path";

/// S3 event notification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct S3UploadEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<S3EventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3EventRecord {
    pub s3: S3Entity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3ObjectRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3ObjectRef {
    /// URL-encoded, with spaces sent as `+`
    pub key: String,
}

/// The object a notification refers to, with its key decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    pub bucket: String,
    pub key: String,
}

impl S3UploadEvent {
    /// Build a single-record event, as S3 delivers them
    pub fn single(bucket: impl Into<String>, encoded_key: impl Into<String>) -> Self {
        Self {
            records: vec![S3EventRecord {
                s3: S3Entity {
                    bucket: S3Bucket {
                        name: bucket.into(),
                    },
                    object: S3ObjectRef {
                        key: encoded_key.into(),
                    },
                },
            }],
        }
    }

    /// First record's bucket and decoded key. Further records are ignored.
    pub fn first_object(&self) -> Result<UploadedObject> {
        let record = self
            .records
            .first()
            .ok_or_else(|| ResizeError::InvalidEvent("event contains no records".to_string()))?;

        Ok(UploadedObject {
            bucket: record.s3.bucket.name.clone(),
            key: decode_key(&record.s3.object.key)?,
        })
    }
}

/// Undo S3's key encoding: `+` is a space, then percent-decode
pub fn decode_key(encoded: &str) -> Result<String> {
    let spaced = encoded.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|key| key.into_owned())
        .map_err(|e| ResizeError::InvalidEvent(format!("object key is not valid UTF-8: {e}")))
}

/// One stored variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantResult {
    /// Profile name
    pub size: String,
    pub key: String,
    /// `<width>x<height>`
    pub dimensions: String,
    pub bytes: usize,
}

/// Success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeSummary {
    pub original: String,
    pub original_size: usize,
    pub results: Vec<VariantResult>,
}

/// Failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Lambda response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn skipped(reason: &str) -> Self {
        Self {
            status_code: STATUS_OK,
            body: reason.to_string(),
        }
    }

    pub fn success(summary: &ResizeSummary) -> Result<Self> {
        Ok(Self {
            status_code: STATUS_OK,
            body: serde_json::to_string(summary)?,
        })
    }

    pub fn failure(error: &ResizeError) -> Self {
        let body = ErrorBody {
            error: error.to_string(),
        };
        Self {
            status_code: STATUS_OK,
            body: serde_json::to_string(&body)
                .unwrap_or_else(|_| r#"{"error":"unknown error"}"#.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_s3_notification() {
        let payload = json!({
            "Records": [{
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": { "name": "nova-media", "arn": "arn:aws:s3:::nova-media" },
                    "object": { "key": "posts/images/originals/cat.jpg", "size": 1024 }
                }
            }]
        });

        let event: S3UploadEvent = serde_json::from_value(payload).unwrap();
        let object = event.first_object().unwrap();
        assert_eq!(object.bucket, "nova-media");
        assert_eq!(object.key, "posts/images/originals/cat.jpg");
    }

    #[test]
    fn test_only_first_record_is_used() {
        let mut event = S3UploadEvent::single("first", "a.jpg");
        event.records.extend(S3UploadEvent::single("second", "b.jpg").records);

        assert_eq!(event.first_object().unwrap().bucket, "first");
    }

    #[test]
    fn test_empty_event_is_invalid() {
        let event: S3UploadEvent = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            event.first_object(),
            Err(ResizeError::InvalidEvent(_))
        ));
    }

    #[test]
    fn test_decode_key_plus_and_percent() {
        assert_eq!(
            decode_key("posts/images/originals/my+holiday%282%29.jpg").unwrap(),
            "posts/images/originals/my holiday(2).jpg"
        );
    }

    #[test]
    fn test_decode_key_multibyte() {
        assert_eq!(
            decode_key("posts/images/originals/%EA%B3%A0%EC%96%91%EC%9D%B4.png").unwrap(),
            "posts/images/originals/고양이.png"
        );
    }

    #[test]
    fn test_decode_key_encoded_plus_survives() {
        assert_eq!(decode_key("a%2Bb.jpg").unwrap(), "a+b.jpg");
    }

    #[test]
    fn test_decode_key_invalid_utf8() {
        assert!(matches!(
            decode_key("bad%FF.jpg"),
            Err(ResizeError::InvalidEvent(_))
        ));
    }

    #[test]
    fn test_response_field_names() {
        let summary = ResizeSummary {
            original: "posts/images/originals/cat.jpg".to_string(),
            original_size: 42,
            results: vec![VariantResult {
                size: "thumbnail".to_string(),
                key: "posts/images/resized/thumbnail/cat.webp".to_string(),
                dimensions: "800x600".to_string(),
                bytes: 7,
            }],
        };

        let response = HandlerResponse::success(&summary).unwrap();
        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire["statusCode"], 200);

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["original"], "posts/images/originals/cat.jpg");
        assert_eq!(body["originalSize"], 42);
        assert_eq!(body["results"][0]["size"], "thumbnail");
        assert_eq!(body["results"][0]["dimensions"], "800x600");
        assert_eq!(body["results"][0]["bytes"], 7);
    }

    #[test]
    fn test_failure_body() {
        let response =
            HandlerResponse::failure(&ResizeError::Encode("frame too large".to_string()));
        assert_eq!(response.status_code, 200);

        let body: ErrorBody = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body.error, "Failed to encode WebP: frame too large");
    }
}
