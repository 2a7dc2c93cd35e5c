/*!
 * AWS Rekognition label detection over the JSON-1.1 wire protocol.
 *
 * The request is signed with AWS Signature Version 4; no SDK is involved.
 * Detection parameters are fixed: at most `MAX_LABELS` labels at or above
 * `MIN_CONFIDENCE` percent confidence, and the result is the detected label
 * names joined with ", ".
 */

use std::time::Duration;

use chrono::Utc;
use log::error;
use reqwest::Client;
use ring::hmac;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::app_config::RekognitionConfig;
use crate::errors::ProviderError;
use crate::file_utils::strip_base64_prefix;

/// Maximum number of labels requested per image.
pub const MAX_LABELS: u32 = 10;

/// Minimum label confidence, in percent.
pub const MIN_CONFIDENCE: f32 = 70.0;

const SERVICE: &str = "rekognition";
const TARGET: &str = "RekognitionService.DetectLabels";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Rekognition client
#[derive(Debug)]
pub struct Rekognition {
    /// HTTP client for API requests
    client: Client,
    /// AWS access key id
    access_key_id: String,
    /// AWS secret access key
    secret_access_key: String,
    /// AWS region
    region: String,
}

/// DetectLabels request body
#[derive(Debug, Serialize)]
pub struct DetectLabelsRequest {
    /// Image payload
    #[serde(rename = "Image")]
    image: ImagePayload,

    /// Maximum labels to return
    #[serde(rename = "MaxLabels")]
    max_labels: u32,

    /// Minimum confidence threshold
    #[serde(rename = "MinConfidence")]
    min_confidence: f32,
}

/// Image payload carrying base64 bytes
#[derive(Debug, Serialize)]
struct ImagePayload {
    /// Base64-encoded image bytes
    #[serde(rename = "Bytes")]
    bytes: String,
}

/// DetectLabels response body
#[derive(Debug, Deserialize)]
pub struct DetectLabelsResponse {
    /// Detected labels
    #[serde(rename = "Labels", default)]
    pub labels: Vec<Label>,
}

/// A single detected label
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    /// Label name
    #[serde(rename = "Name")]
    pub name: String,

    /// Detection confidence in percent
    #[serde(rename = "Confidence", default)]
    pub confidence: f32,
}

/// Join the names of labels meeting the confidence threshold, comma-space
/// separated, in response order.
pub fn join_label_names(labels: &[Label]) -> String {
    labels
        .iter()
        .filter(|label| label.confidence >= MIN_CONFIDENCE)
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Rekognition {
    /// Create a new Rekognition client from configuration
    pub fn new(config: &RekognitionConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            access_key_id: config.access_key_id.clone(),
            secret_access_key: config.secret_access_key.clone(),
            region: config.region.clone(),
        }
    }

    /// Detect labels in a base64-encoded image and return the joined names.
    pub async fn detect_labels(&self, image_base64: &str) -> Result<String, ProviderError> {
        if self.access_key_id.is_empty() || self.secret_access_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "AWS credentials are not configured".to_string(),
            ));
        }

        let request = DetectLabelsRequest {
            image: ImagePayload {
                bytes: strip_base64_prefix(image_base64).to_string(),
            },
            max_labels: MAX_LABELS,
            min_confidence: MIN_CONFIDENCE,
        };
        let body = serde_json::to_string(&request)
            .map_err(|e| ProviderError::RequestFailed(format!("Rekognition body: {e}")))?;

        let host = format!("{}.{}.amazonaws.com", SERVICE, self.region);
        let url = format!("https://{host}/");
        let now = Utc::now();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();
        let date = now.format("%Y%m%d").to_string();

        let authorization = self.sign(&host, &amz_date, &date, &body);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE)
            .header("X-Amz-Target", TARGET)
            .header("X-Amz-Date", &amz_date)
            .header("Authorization", authorization)
            .body(body)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Rekognition request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Rekognition API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let detect_response = response
            .json::<DetectLabelsResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Rekognition response: {e}")))?;

        Ok(join_label_names(&detect_response.labels))
    }

    /// Build the SigV4 Authorization header for a DetectLabels call.
    fn sign(&self, host: &str, amz_date: &str, date: &str, body: &str) -> String {
        let payload_hash = hex::encode(Sha256::digest(body.as_bytes()));

        let canonical_headers = format!(
            "content-type:{CONTENT_TYPE}\nhost:{host}\nx-amz-date:{amz_date}\nx-amz-target:{TARGET}\n"
        );
        let signed_headers = "content-type;host;x-amz-date;x-amz-target";
        let canonical_request =
            format!("POST\n/\n\n{canonical_headers}\n{signed_headers}\n{payload_hash}");

        let scope = format!("{}/{}/{}/aws4_request", date, self.region, SERVICE);
        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n{}\n{}\n{}",
            amz_date,
            scope,
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let mut key = hmac_sha256(
            format!("AWS4{}", self.secret_access_key).as_bytes(),
            date.as_bytes(),
        );
        for part in [self.region.as_str(), SERVICE, "aws4_request"] {
            key = hmac_sha256(&key, part.as_bytes());
        }
        let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()));

        format!(
            "AWS4-HMAC-SHA256 Credential={}/{}, SignedHeaders={}, Signature={}",
            self.access_key_id, scope, signed_headers, signature
        )
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::sign(&key, data).as_ref().to_vec()
}
