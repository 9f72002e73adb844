use shared::error::ApiError;
use thiserror::Error;

use crate::validation::ValidationReport;

/// Failures surfaced by the form controllers.
///
/// Local failures (`InvalidField`, `NotEditing`, `ValidationFailed`, ...) are
/// advisory and never reach the identity service. Remote failures preserve
/// all buffered user input so the caller can correct and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("invalid edit to field `{0}`")]
    InvalidField(String),
    #[error("no edit in progress")]
    NotEditing,
    #[error("another request is already in flight")]
    OperationInProgress,
    #[error("registration already completed")]
    AlreadySubmitted,
    #[error("draft failed local validation")]
    ValidationFailed(ValidationReport),
    #[error("rejected by identity service: {0}")]
    RemoteRejected(ApiError),
    #[error("identity service unreachable: {0}")]
    RemoteUnavailable(String),
}

impl From<ApiError> for FormError {
    fn from(err: ApiError) -> Self {
        if err.code.is_transport() {
            FormError::RemoteUnavailable(err.message)
        } else {
            FormError::RemoteRejected(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn transport_codes_map_to_unavailable() {
        let err = FormError::from(ApiError::new(ErrorCode::Unavailable, "down"));
        assert!(matches!(err, FormError::RemoteUnavailable(_)));

        let err = FormError::from(ApiError::new(ErrorCode::Internal, "boom"));
        assert!(matches!(err, FormError::RemoteUnavailable(_)));
    }

    #[test]
    fn domain_codes_map_to_rejected() {
        let err = FormError::from(ApiError::new(ErrorCode::Conflict, "email already registered"));
        assert!(matches!(err, FormError::RemoteRejected(_)));

        let err = FormError::from(ApiError::new(ErrorCode::Validation, "bad email"));
        assert!(matches!(err, FormError::RemoteRejected(_)));
    }
}
