use serde::{Deserialize, Serialize};

/// Which path produced a recommendation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    /// Ranked by the trained crop classifier
    Model,
    /// Rule-based candidates with a placeholder score
    Fallback,
}

impl RecommendationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationMode::Model => "model",
            RecommendationMode::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for RecommendationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop: String,
    pub suitability_score: f64,
    pub expected_yield: f64,
    pub expected_profit: f64,
    pub sustainability_score: f64,
    pub explanation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub mode: RecommendationMode,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationSet {
    pub fn new(mode: RecommendationMode, recommendations: Vec<Recommendation>) -> Self {
        Self {
            mode,
            recommendations,
        }
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn crops(&self) -> Vec<&str> {
        self.recommendations.iter().map(|r| r.crop.as_str()).collect()
    }

    pub fn get(&self, crop: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.crop == crop)
    }

    pub fn is_fallback(&self) -> bool {
        self.mode == RecommendationMode::Fallback
    }
}
