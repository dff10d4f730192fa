use thiserror::Error;

/// Everything that can go wrong talking to the Foodgram API.
///
/// `Clone + PartialEq` so a failure can be kept in page state and compared in
/// tests.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    #[error("authentication required")]
    Unauthorized,
    #[error("permission denied")]
    Forbidden,
    #[error("not found")]
    NotFound,
    /// The backend refused the request and explained why.
    #[error("{}", .0.join(", "))]
    Rejected(Vec<String>),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Convenience for a single-message rejection.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(vec![message.into()])
    }

    /// Whether the stored token is no longer accepted.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_joins_messages() {
        let err = ApiError::Rejected(vec![
            "This password is too short.".to_string(),
            "This password is too common.".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "This password is too short., This password is too common."
        );
        assert!(!err.is_auth());
        assert!(ApiError::Unauthorized.is_auth());
    }
}
