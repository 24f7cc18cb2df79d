//! Crop recommendation engine.
//!
//! Turns field attributes (location, soil chemistry, irrigation, crop history)
//! into ranked crop suggestions with yield, profit and sustainability
//! estimates. A trained classifier ranks crops when one is supplied; otherwise
//! a fixed rule-based candidate set is scored.

pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use config::Config;
pub use error::{CropAdvisorError, Result};
pub use logic::{ClassProbability, CropClassifier, FeatureVector, RecommendationEngine};
pub use models::{FieldAttributes, Recommendation, RecommendationMode, RecommendationSet};
