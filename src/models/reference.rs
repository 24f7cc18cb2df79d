use super::economics::{canonical_crop_id, CropEconomics};
use std::collections::BTreeSet;

/// Upper bound on the length of any recommendation set
pub const MAX_RECOMMENDATIONS: usize = 3;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_FALLBACK_COUNT: usize = 3;
pub const DEFAULT_FALLBACK_SCORE: f64 = 0.7;
pub const DEFAULT_FALLBACK_CROPS: [&str; 5] = ["wheat", "rice", "maize", "cotton", "potato"];
pub const DEFAULT_WATER_EFFICIENT_CROPS: [&str; 3] = ["wheat", "maize", "cotton"];

/// Process-wide reference data shared by every recommendation request.
///
/// Built once at startup (usually from [`crate::config::Config`]) and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub economics: CropEconomics,
    water_efficient: BTreeSet<String>,
    fallback_crops: Vec<String>,
    pub fallback_count: usize,
    pub fallback_score: f64,
    pub top_k: usize,
}

impl ReferenceData {
    pub fn new(
        economics: CropEconomics,
        water_efficient: impl IntoIterator<Item = impl AsRef<str>>,
        fallback_crops: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            economics,
            water_efficient: water_efficient
                .into_iter()
                .map(|c| canonical_crop_id(c.as_ref()))
                .collect(),
            fallback_crops: fallback_crops
                .into_iter()
                .map(|c| canonical_crop_id(c.as_ref()))
                .collect(),
            fallback_count: DEFAULT_FALLBACK_COUNT,
            fallback_score: DEFAULT_FALLBACK_SCORE,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn is_water_efficient(&self, crop: &str) -> bool {
        self.water_efficient.contains(&canonical_crop_id(crop))
    }

    pub fn water_efficient_crops(&self) -> impl Iterator<Item = &str> {
        self.water_efficient.iter().map(String::as_str)
    }

    /// The full ordered fallback list, before slicing.
    pub fn fallback_crops(&self) -> &[String] {
        &self.fallback_crops
    }

    /// Crops scored in fallback mode: the leading `fallback_count` entries,
    /// never more than [`MAX_RECOMMENDATIONS`].
    pub fn fallback_candidates(&self) -> &[String] {
        let end = self
            .fallback_count
            .min(MAX_RECOMMENDATIONS)
            .min(self.fallback_crops.len());
        &self.fallback_crops[..end]
    }

    /// Number of classifier-ranked crops to keep, capped at
    /// [`MAX_RECOMMENDATIONS`].
    pub fn effective_top_k(&self) -> usize {
        self.top_k.min(MAX_RECOMMENDATIONS)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::new(
            CropEconomics::builtin(),
            DEFAULT_WATER_EFFICIENT_CROPS,
            DEFAULT_FALLBACK_CROPS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fallback_candidates_are_first_three() {
        let reference = ReferenceData::default();
        assert_eq!(reference.fallback_crops().len(), 5);
        assert_eq!(reference.fallback_candidates(), ["wheat", "rice", "maize"]);
    }

    #[test]
    fn fallback_count_larger_than_list_is_clamped() {
        let mut reference = ReferenceData::new(CropEconomics::builtin(), ["wheat"], ["rice"]);
        reference.fallback_count = 10;
        assert_eq!(reference.fallback_candidates(), ["rice"]);
    }

    #[test]
    fn oversized_counts_are_capped() {
        let mut reference = ReferenceData::default();
        reference.fallback_count = 5;
        reference.top_k = 10;
        assert_eq!(reference.fallback_candidates(), ["wheat", "rice", "maize"]);
        assert_eq!(reference.effective_top_k(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn water_efficient_membership_is_case_insensitive() {
        let reference = ReferenceData::default();
        assert!(reference.is_water_efficient("wheat"));
        assert!(reference.is_water_efficient("Maize"));
        assert!(reference.is_water_efficient("COTTON"));
        assert!(!reference.is_water_efficient("rice"));
        assert!(!reference.is_water_efficient("sugarcane"));
    }

    #[test]
    fn crop_lists_are_canonicalized() {
        let reference = ReferenceData::new(CropEconomics::builtin(), [" Barley "], ["Wheat"]);
        assert!(reference.is_water_efficient("barley"));
        assert_eq!(reference.fallback_crops(), ["wheat"]);
    }
}
