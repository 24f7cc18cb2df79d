use crate::models::FieldAttributes;
use serde::Serialize;

pub const DEFAULT_SOIL_PH: f64 = 7.0;
pub const DEFAULT_SOIL_N: f64 = 50.0;
pub const DEFAULT_SOIL_P: f64 = 30.0;
pub const DEFAULT_SOIL_K: f64 = 40.0;

pub const FEATURE_COUNT: usize = 8;

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "latitude",
    "longitude",
    "area_ha",
    "soil_ph",
    "soil_n",
    "soil_p",
    "soil_k",
    "irrigation",
];

/// Fixed-order numeric encoding of a field, as consumed by the crop classifier:
/// `[lat, lon, area, ph, N, P, K, irrigation]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Absent soil readings are replaced with typical values. Ranges are not
    /// validated.
    pub fn from_field(field: &FieldAttributes) -> Self {
        Self([
            field.latitude,
            field.longitude,
            field.area_ha,
            field.soil_ph.unwrap_or(DEFAULT_SOIL_PH),
            field.soil_n.unwrap_or(DEFAULT_SOIL_N),
            field.soil_p.unwrap_or(DEFAULT_SOIL_P),
            field.soil_k.unwrap_or(DEFAULT_SOIL_K),
            if field.irrigation_available { 1.0 } else { 0.0 },
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.0[idx])
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl From<&FieldAttributes> for FeatureVector {
    fn from(field: &FieldAttributes) -> Self {
        Self::from_field(field)
    }
}
