use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Insufficient joints: need {required}, found {found}")]
    InsufficientJoints { required: usize, found: usize },

    #[error("Malformed keypoint at index {index}: expected at least 2 values, found {len}")]
    MalformedKeypoint { index: usize, len: usize },

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Invalid body side: {0}")]
    InvalidSide(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// Whether the caller can still produce a (zero) score for this input
    pub fn is_recoverable(&self) -> bool {
        match self {
            ScoreError::InsufficientJoints { .. } => true,
            ScoreError::MalformedKeypoint { .. } => false,
            ScoreError::UnsupportedSchema { .. } => false,
            ScoreError::InvalidSide(_) => false,
            ScoreError::Json(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_joints_is_recoverable() {
        let err = ScoreError::InsufficientJoints { required: 16, found: 4 };
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "Insufficient joints: need 16, found 4");
    }

    #[test]
    fn test_schema_error_not_recoverable() {
        let err = ScoreError::UnsupportedSchema { found: 2, expected: 1 };
        assert!(!err.is_recoverable());
    }
}
