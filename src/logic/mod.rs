pub mod calculations;
pub mod classifier;
pub mod engine;
pub mod estimators;
pub mod explanation;
pub mod features;

pub use classifier::{ClassProbability, ClassifierAdapter, CropClassifier};
pub use engine::{EngineStatus, RecommendationEngine};
pub use estimators::{calculate_sustainability, estimate_profit, estimate_yield};
pub use explanation::generate_explanation;
pub use features::FeatureVector;
