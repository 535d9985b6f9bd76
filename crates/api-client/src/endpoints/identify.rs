//! Identification endpoint
//!
//! Maps to the service's `/analyze` route, which forwards the submitted
//! photo to the hosted vision model and validates the model's structured
//! answer before returning it.

use crate::client::IdentifyClient;
use crate::error::ApiResult;
use plantdex_core::{NOT_AVAILABLE, PlantRecord};
use serde::{Deserialize, Serialize};

/// Identification API interface
#[derive(Clone)]
pub struct IdentifyApi {
    client: IdentifyClient,
}

impl IdentifyApi {
    /// Create a new identification API interface
    pub(crate) fn new(client: IdentifyClient) -> Self {
        Self { client }
    }

    /// Analyze a photo, supplied as a base64 data URL
    ///
    /// POST /analyze
    pub async fn analyze(&self, image_data_url: &str) -> ApiResult<AnalysisResponse> {
        let request = AnalysisRequest {
            image_url: image_data_url.to_string(),
        };
        self.client.post("analyze", &request).await
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Analyze request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Photo as a base64 data URL
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

/// Whether the model saw a plant in the photo
///
/// The service answers in German, matching its prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantPresence {
    /// A plant is visible in the photo
    #[serde(rename = "ja")]
    Present,
    /// No plant could be identified
    #[serde(rename = "nein")]
    Absent,
}

/// Structured analysis returned by the vision model
///
/// Every string field is always present on the wire; the service fills
/// fields it has no data for with its "no data" sentinel.
/// [`AnalysisResponse::into_record`] translates those into `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Whether a plant was found in the photo
    #[serde(rename = "plantInImage")]
    pub plant_in_image: PlantPresence,
    /// Scientific or common plant name
    #[serde(rename = "plantName")]
    pub plant_name: String,
    /// Short description of the plant
    pub description: String,
    /// When the plant needs watering
    #[serde(rename = "wateringNeeds")]
    pub watering_needs: String,
    /// Recommended watering frequency per week
    #[serde(rename = "wateringFrequency")]
    pub watering_frequency: String,
    /// Ideal soil for the plant
    #[serde(rename = "soilType")]
    pub soil_type: String,
    /// URL of the plant's Wikipedia page
    #[serde(rename = "wikipediaUrl")]
    pub wikipedia_url: String,
}

impl AnalysisResponse {
    /// Convert the wire response into a domain record.
    ///
    /// Sentinel and empty fields become `None`. The caller supplies the
    /// thumbnail data URL that gets stored alongside the analysis.
    #[must_use]
    pub fn into_record(self, image_data_url: String) -> PlantRecord {
        PlantRecord {
            plant_in_image: self.plant_in_image == PlantPresence::Present,
            plant_name: self.plant_name,
            description: optional(self.description),
            watering_needs: optional(self.watering_needs),
            watering_frequency: optional(self.watering_frequency),
            soil_type: optional(self.soil_type),
            wikipedia_url: optional(self.wikipedia_url),
            image_data_url,
        }
    }
}

/// Map the service's "no data" sentinel (and empty strings) to `None`
fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() || value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}
