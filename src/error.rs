use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropAdvisorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Crop classifier not loaded")]
    ClassifierUnavailable,

    #[error("Crop classifier inference failed: {0}")]
    InferenceFailure(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, CropAdvisorError>;
