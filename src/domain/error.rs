use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error represents a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Student not found");
        assert_eq!(error.to_string(), "Not found: Student not found");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_internal_error() {
        let error = DomainError::internal("repository lock poisoned");
        assert_eq!(
            error.to_string(),
            "Internal error: repository lock poisoned"
        );
        assert!(!error.is_not_found());
    }
}
