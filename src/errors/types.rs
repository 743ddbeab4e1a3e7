use thiserror::Error;

#[derive(Debug, Error)]
pub enum VelofixError {
    /// Catalog or config mismatch. Indicates a deployment bug, not bad user input.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Engine or session used out of order by the caller.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
