use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandlensError {
    #[error("Missing API key: {env_var} environment variable is not set")]
    MissingApiKey { env_var: String },

    #[error("No video number provided")]
    MissingVideoNo,

    #[error("Unexpected API response: {reason}")]
    ApiResponse { reason: String },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, BrandlensError>;
