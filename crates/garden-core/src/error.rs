use thiserror::Error;

#[derive(Debug, Error)]
pub enum GardenError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid hour {0}: must be 0-23")]
    InvalidHour(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GardenError>;
