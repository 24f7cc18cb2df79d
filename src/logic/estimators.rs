//! Agronomic estimators.
//!
//! Each estimator is a total function of the crop, the field and the shared
//! reference data, so yield, profit and sustainability policy can be tuned
//! independently of ranking and explanation.

use super::calculations::{is_extreme_ph, is_optimal_ph, round2};
use crate::models::{canonical_crop_id, FieldAttributes, ReferenceData};

/// Yield bonus for soil pH within the optimal band
pub const OPTIMAL_PH_YIELD_FACTOR: f64 = 1.10;
/// Yield penalty for strongly acidic or alkaline soil
pub const EXTREME_PH_YIELD_FACTOR: f64 = 0.80;
/// Yield bonus when irrigation is available
pub const IRRIGATION_YIELD_FACTOR: f64 = 1.15;

pub const SUSTAINABILITY_BASE: f64 = 0.5;
pub const WATER_EFFICIENCY_BONUS: f64 = 0.20;
pub const CROP_ROTATION_BONUS: f64 = 0.15;
pub const SOIL_HEALTH_BONUS: f64 = 0.15;

/// Expected yield in tonnes per hectare.
///
/// Starts from the crop's baseline yield and applies the pH and irrigation
/// multipliers. A missing pH reading leaves the baseline untouched.
pub fn estimate_yield(reference: &ReferenceData, crop: &str, field: &FieldAttributes) -> f64 {
    let mut expected = reference.economics.lookup(crop).base_yield_t_per_ha;

    if let Some(ph) = field.soil_ph {
        if is_optimal_ph(ph) {
            expected *= OPTIMAL_PH_YIELD_FACTOR;
        } else if is_extreme_ph(ph) {
            expected *= EXTREME_PH_YIELD_FACTOR;
        }
    }

    if field.irrigation_available {
        expected *= IRRIGATION_YIELD_FACTOR;
    }

    round2(expected)
}

/// Expected profit per hectare: revenue at market price minus input cost.
/// Negative when the crop is expected to run at a loss.
pub fn estimate_profit(reference: &ReferenceData, crop: &str, expected_yield: f64) -> f64 {
    let entry = reference.economics.lookup(crop);
    let revenue = expected_yield * entry.price_per_ton;
    round2(revenue - entry.cost_per_ha)
}

/// Sustainability score in [0.5, 1.0].
///
/// Rewards water-efficient crops, rotation away from the previous crop, and
/// healthy soil pH.
pub fn calculate_sustainability(
    reference: &ReferenceData,
    crop: &str,
    field: &FieldAttributes,
) -> f64 {
    let mut score = SUSTAINABILITY_BASE;

    if reference.is_water_efficient(crop) {
        score += WATER_EFFICIENCY_BONUS;
    }

    if let Some(last_crop) = field.last_crop.as_deref() {
        if canonical_crop_id(last_crop) != canonical_crop_id(crop) {
            score += CROP_ROTATION_BONUS;
        }
    }

    if field.soil_ph.is_some_and(is_optimal_ph) {
        score += SOIL_HEALTH_BONUS;
    }

    score.min(1.0)
}
