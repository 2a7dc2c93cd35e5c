/*!
 * Field value extraction from images.
 *
 * The vision backend is asked to return a JSON array of field/value pairs.
 * Model output is often fenced in a markdown code block, so the fence is
 * stripped before parsing; anything that still fails to parse is reported as
 * an unprocessable AI response.
 */

use log::error;
use serde::{Deserialize, Serialize};

use crate::errors::{GatewayError, ProviderError};
use crate::file_utils::FileSource;
use crate::providers::VisionModel;
use crate::services::ItemList;

/// A field extraction request
#[derive(Debug)]
pub struct ExtractFieldsRequest {
    /// The image to analyze
    pub image: FileSource,
    /// Names of the fields to extract
    pub fields: ItemList,
}

/// One extracted field/value pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    /// The field name
    pub field: String,
    /// The extracted value
    pub value: String,
}

/// A field extraction response
#[derive(Debug, Serialize, PartialEq)]
pub struct ExtractFieldsResponse {
    /// The extracted field/value pairs
    pub response: Vec<FieldValue>,
}

/// Build the extraction prompt for a list of field names.
pub fn extraction_prompt(fields: &[String]) -> String {
    format!(
        "Please analyze this image and extract the value of the following fields: {}. Return the results as a JSON array of objects, where each object has a 'field' and a 'value' property.",
        fields.join(", ")
    )
}

/// Strip a surrounding markdown code fence, if present.
pub fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Parse the model's output into field/value pairs.
pub fn parse_field_values(response: &str) -> Result<Vec<FieldValue>, ProviderError> {
    serde_json::from_str(strip_code_fence(response)).map_err(|e| {
        error!("Failed to parse field extraction response: {}", e);
        ProviderError::ParseError(format!("field extraction output: {e}"))
    })
}

/// Handle a field extraction request.
pub async fn handle(
    model: &dyn VisionModel,
    request: ExtractFieldsRequest,
) -> Result<ExtractFieldsResponse, GatewayError> {
    let fields = request.fields.into_vec();
    if fields.is_empty() {
        return Err(GatewayError::Validation("Invalid request"));
    }

    let image_base64 = request.image.resolve_base64()?;
    let prompt = extraction_prompt(&fields);
    let raw = model.describe_image(&prompt, &image_base64).await?;
    let values = parse_field_values(&raw)?;

    Ok(ExtractFieldsResponse { response: values })
}
