//! The identified-plant record shared across the workspace.

use plantdex_search::Rankable;
use serde::{Deserialize, Serialize};

/// Sentinel the identification service uses for fields it has no data
/// for. The service answers in German; the literal is part of its wire
/// contract. It never appears in the domain model, which carries
/// `Option` instead.
pub const NOT_AVAILABLE: &str = "Keine Angabe";

/// One identified plant in the collection.
///
/// Serialized in camelCase for parity with the collection files written
/// by earlier app versions. Optional fields are omitted entirely when
/// the service had nothing to say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// Whether the analyzed photo actually contained a plant.
    pub plant_in_image: bool,
    /// Scientific or common name, or a service-provided fallback.
    pub plant_name: String,
    /// Short description, when the service provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the plant needs watering, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watering_needs: Option<String>,
    /// Watering frequency per week, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watering_frequency: Option<String>,
    /// Ideal soil, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_type: Option<String>,
    /// Link to the plant's Wikipedia page, when one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia_url: Option<String>,
    /// JPEG thumbnail of the scanned photo, as a base64 data URL.
    pub image_data_url: String,
}

impl Rankable for PlantRecord {
    fn name(&self) -> &str {
        &self.plant_name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PlantRecord {
        PlantRecord {
            plant_in_image: true,
            plant_name: "Monstera deliciosa".to_string(),
            description: Some("Fensterblatt aus Mexiko".to_string()),
            watering_needs: None,
            watering_frequency: Some("1x pro Woche".to_string()),
            soil_type: None,
            wikipedia_url: None,
            image_data_url: "data:image/jpeg;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(json.contains("\"plantInImage\":true"));
        assert!(json.contains("\"plantName\""));
        assert!(json.contains("\"imageDataUrl\""));
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(!json.contains("wateringNeeds"));
        assert!(!json.contains("soilType"));
        assert!(json.contains("wateringFrequency"));
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = r#"{
            "plantInImage": false,
            "plantName": "Unbekannte Pflanze",
            "imageDataUrl": "data:image/jpeg;base64,BBBB"
        }"#;
        let parsed: PlantRecord = serde_json::from_str(json).unwrap();
        assert!(!parsed.plant_in_image);
        assert_eq!(parsed.plant_name, "Unbekannte Pflanze");
        assert_eq!(parsed.description, None);
        assert_eq!(parsed.wikipedia_url, None);
    }

    #[test]
    fn test_roundtrip() {
        let original = record();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: PlantRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_ranks_by_name_and_description() {
        let r = record();
        assert_eq!(r.name(), "Monstera deliciosa");
        assert_eq!(r.description(), Some("Fensterblatt aus Mexiko"));
    }
}
