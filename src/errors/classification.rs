use super::types::VelofixError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Whether the user can correct their input and try again.
    pub recoverable: bool,
}

impl VelofixError {
    /// Classify this error to determine its type and whether the caller can recover from it.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Caller misuse: fix the input and retry
            VelofixError::InvalidState(_) => ErrorClassification {
                error_type: "InvalidStateError",
                recoverable: true,
            },
            VelofixError::Validation(_) => ErrorClassification {
                error_type: "ValidationError",
                recoverable: true,
            },

            // Hard failures
            VelofixError::Configuration(_) => ErrorClassification {
                error_type: "ConfigurationError",
                recoverable: false,
            },
            VelofixError::Io(_) => ErrorClassification {
                error_type: "IoError",
                recoverable: false,
            },
            VelofixError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                recoverable: false,
            },
            VelofixError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                recoverable: false,
            },
            VelofixError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                recoverable: false,
            },
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            VelofixError::Configuration(_) => 2,
            VelofixError::InvalidState(_) => 3,
            VelofixError::Validation(_) => 4,
            _ => 1,
        }
    }
}
