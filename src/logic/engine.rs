use super::classifier::{ClassifierAdapter, CropClassifier};
use super::estimators::{calculate_sustainability, estimate_profit, estimate_yield};
use super::explanation::generate_explanation;
use super::features::FeatureVector;
use crate::error::CropAdvisorError;
use crate::models::{
    FieldAttributes, Recommendation, RecommendationMode, RecommendationSet, ReferenceData,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineStatus {
    pub classifier_loaded: bool,
    pub known_crops: usize,
}

/// Turns field attributes into ranked crop recommendations.
///
/// With a classifier loaded, crops are ranked by predicted probability. If
/// there is no classifier, or inference fails, the request is answered from
/// the fixed fallback candidates instead. The engine holds no mutable state
/// and can be shared across threads.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    reference: Arc<ReferenceData>,
    adapter: ClassifierAdapter,
}

impl RecommendationEngine {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        let adapter = ClassifierAdapter::new(None, reference.effective_top_k());
        Self { reference, adapter }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn CropClassifier>) -> Self {
        self.adapter = ClassifierAdapter::new(Some(classifier), self.reference.effective_top_k());
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            classifier_loaded: self.adapter.is_available(),
            known_crops: self.reference.economics.len(),
        }
    }

    pub fn recommend(&self, field: &FieldAttributes) -> RecommendationSet {
        let features = FeatureVector::from_field(field);

        match self.adapter.rank(&features) {
            Ok(ranked) => {
                let recommendations = ranked
                    .iter()
                    .map(|r| self.build_recommendation(&r.crop, field, r.probability))
                    .collect();
                RecommendationSet::new(RecommendationMode::Model, recommendations)
            }
            Err(CropAdvisorError::ClassifierUnavailable) => {
                tracing::debug!("No crop classifier loaded - using rule-based recommendations");
                self.rule_based_recommendations(field)
            }
            Err(e) => {
                tracing::warn!("Error in prediction: {} - falling back to rules", e);
                self.rule_based_recommendations(field)
            }
        }
    }

    /// Score the fixed fallback candidates with the placeholder suitability.
    pub fn rule_based_recommendations(&self, field: &FieldAttributes) -> RecommendationSet {
        let score = self.reference.fallback_score;
        let recommendations = self
            .reference
            .fallback_candidates()
            .iter()
            .map(|crop| self.build_recommendation(crop, field, score))
            .collect();

        RecommendationSet::new(RecommendationMode::Fallback, recommendations)
    }

    fn build_recommendation(
        &self,
        crop: &str,
        field: &FieldAttributes,
        suitability_score: f64,
    ) -> Recommendation {
        let expected_yield = estimate_yield(&self.reference, crop, field);

        Recommendation {
            crop: crop.to_string(),
            suitability_score,
            expected_yield,
            expected_profit: estimate_profit(&self.reference, crop, expected_yield),
            sustainability_score: calculate_sustainability(&self.reference, crop, field),
            explanation: generate_explanation(crop, field, suitability_score),
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(Arc::new(ReferenceData::default()))
    }
}
