use super::features::FeatureVector;
use crate::error::{CropAdvisorError, Result};
use crate::models::{canonical_crop_id, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Probability assigned to one crop class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub crop: String,
    pub probability: f64,
}

impl ClassProbability {
    pub fn new(crop: impl Into<String>, probability: f64) -> Self {
        Self {
            crop: crop.into(),
            probability,
        }
    }
}

/// Trait for trained probabilistic crop classifiers.
///
/// Implementations return one entry per class in their native class order.
/// That order decides ties and may change whenever the model is retrained.
pub trait CropClassifier: Send + Sync {
    fn predict_probabilities(&self, features: &FeatureVector) -> Result<Vec<ClassProbability>>;
}

impl<F> CropClassifier for F
where
    F: Fn(&FeatureVector) -> Result<Vec<ClassProbability>> + Send + Sync,
{
    fn predict_probabilities(&self, features: &FeatureVector) -> Result<Vec<ClassProbability>> {
        self(features)
    }
}

/// Wraps an optional classifier and turns its output into a top-K ranking.
#[derive(Clone)]
pub struct ClassifierAdapter {
    classifier: Option<Arc<dyn CropClassifier>>,
    top_k: usize,
}

impl ClassifierAdapter {
    pub fn new(classifier: Option<Arc<dyn CropClassifier>>, top_k: usize) -> Self {
        Self { classifier, top_k }
    }

    pub fn unavailable() -> Self {
        Self::new(None, DEFAULT_TOP_K)
    }

    pub fn is_available(&self) -> bool {
        self.classifier.is_some()
    }

    /// Rank crops for a feature vector, best first.
    ///
    /// Fails with `ClassifierUnavailable` when no classifier is loaded and
    /// with `InferenceFailure` when the input or the classifier output is
    /// unusable. Returned crop ids are canonical (trimmed, lower-case).
    pub fn rank(&self, features: &FeatureVector) -> Result<Vec<ClassProbability>> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or(CropAdvisorError::ClassifierUnavailable)?;

        if !features.is_finite() {
            return Err(CropAdvisorError::InferenceFailure(format!(
                "non-finite feature vector {:?}",
                features.as_slice()
            )));
        }

        let mut predictions = classifier
            .predict_probabilities(features)
            .map_err(|e| match e {
                failure @ CropAdvisorError::InferenceFailure(_) => failure,
                other => CropAdvisorError::InferenceFailure(other.to_string()),
            })?;

        if predictions.is_empty() {
            return Err(CropAdvisorError::InferenceFailure(
                "classifier returned no classes".into(),
            ));
        }

        if let Some(bad) = predictions
            .iter()
            .find(|p| !(p.probability.is_finite() && (0.0..=1.0).contains(&p.probability)))
        {
            return Err(CropAdvisorError::InferenceFailure(format!(
                "invalid probability {} for class '{}'",
                bad.probability, bad.crop
            )));
        }

        // sort_by is stable, so equal probabilities keep native class order
        predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        predictions.truncate(self.top_k);

        Ok(predictions
            .into_iter()
            .map(|p| ClassProbability::new(canonical_crop_id(&p.crop), p.probability))
            .collect())
    }
}

impl std::fmt::Debug for ClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierAdapter")
            .field("classifier", &self.classifier.as_ref().map(|_| "[loaded]"))
            .field("top_k", &self.top_k)
            .finish()
    }
}
