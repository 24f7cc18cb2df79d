use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attributes of a single field plot submitted for a recommendation.
///
/// Soil readings and the previous crop are optional. An absent reading is
/// `None`, which is not the same as a reading of zero: estimators skip their
/// pH adjustments entirely for `None` but treat `Some(0.0)` as an extremely
/// acidic soil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAttributes {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(alias = "area")]
    pub area_ha: f64,
    #[serde(default)]
    pub soil_ph: Option<f64>,
    #[serde(default)]
    pub soil_n: Option<f64>,
    #[serde(default)]
    pub soil_p: Option<f64>,
    #[serde(default)]
    pub soil_k: Option<f64>,
    #[serde(default)]
    pub last_crop: Option<String>,
    #[serde(default)]
    pub irrigation_available: bool,
    /// Free-form grower preferences, carried through untouched.
    #[serde(default)]
    pub preferences: BTreeMap<String, serde_json::Value>,
}

impl FieldAttributes {
    pub fn new(latitude: f64, longitude: f64, area_ha: f64) -> Self {
        Self {
            latitude,
            longitude,
            area_ha,
            soil_ph: None,
            soil_n: None,
            soil_p: None,
            soil_k: None,
            last_crop: None,
            irrigation_available: false,
            preferences: BTreeMap::new(),
        }
    }

    /// Parse a request body in the JSON wire format.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_soil_ph(mut self, ph: f64) -> Self {
        self.soil_ph = Some(ph);
        self
    }

    pub fn with_npk(mut self, n: Option<f64>, p: Option<f64>, k: Option<f64>) -> Self {
        self.soil_n = n;
        self.soil_p = p;
        self.soil_k = k;
        self
    }

    pub fn with_last_crop(mut self, crop: impl Into<String>) -> Self {
        self.last_crop = Some(crop.into());
        self
    }

    pub fn with_irrigation(mut self, available: bool) -> Self {
        self.irrigation_available = available;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_request() {
        let json = r#"{
            "latitude": 20.0,
            "longitude": 78.0,
            "area": 2.0,
            "soil_ph": 6.5,
            "soil_n": 70.0,
            "soil_p": 25.0,
            "soil_k": 45.0,
            "last_crop": "maize",
            "irrigation_available": true,
            "preferences": {"organic": true}
        }"#;

        let field: FieldAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(field.area_ha, 2.0);
        assert_eq!(field.soil_ph, Some(6.5));
        assert_eq!(field.last_crop.as_deref(), Some("maize"));
        assert!(field.irrigation_available);
        assert_eq!(
            field.preferences.get("organic"),
            Some(&serde_json::Value::Bool(true))
        );
    }

    #[test]
    fn deserialize_minimal_request() {
        let json = r#"{"latitude": 10.0, "longitude": 70.0, "area_ha": 1.5}"#;

        let field = FieldAttributes::from_json(json).unwrap();
        assert_eq!(field.soil_ph, None);
        assert_eq!(field.soil_n, None);
        assert_eq!(field.last_crop, None);
        assert!(!field.irrigation_available);
        assert!(field.preferences.is_empty());
    }

    #[test]
    fn null_and_zero_readings_are_distinct() {
        let null_ph: FieldAttributes = serde_json::from_str(
            r#"{"latitude": 0.0, "longitude": 0.0, "area": 1.0, "soil_ph": null}"#,
        )
        .unwrap();
        let zero_ph: FieldAttributes = serde_json::from_str(
            r#"{"latitude": 0.0, "longitude": 0.0, "area": 1.0, "soil_ph": 0.0}"#,
        )
        .unwrap();

        assert_eq!(null_ph.soil_ph, None);
        assert_eq!(zero_ph.soil_ph, Some(0.0));
    }

    #[test]
    fn missing_coordinates_rejected() {
        assert!(matches!(
            FieldAttributes::from_json(r#"{"area": 1.0}"#),
            Err(crate::error::CropAdvisorError::Json(_))
        ));
    }
}
