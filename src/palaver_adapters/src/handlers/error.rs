use palaver_application::{
    LoginError, LogoutError, MessageBoardError, ProfileError, RegisterError,
};
use palaver_core::{AuthResponseBuilder, AuthResponseHelpers};
use thiserror::Error;

use crate::auth_validation::SessionAuthError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Every failure a handler can report, with its HTTP status.
///
/// The `Display` text is what clients see; details of internal failures are
/// logged where the conversion happens and never reach the body.
#[derive(Debug, Error, PartialEq)]
pub enum HandlerError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid username/password")]
    NotAcceptable,
    #[error("User already exists")]
    Conflict,
    #[error("Internal server error")]
    Internal,
}

impl HandlerError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Unauthorized | Self::InvalidCredentials => 401,
            Self::NotFound(_) => 404,
            Self::NotAcceptable => 406,
            Self::Conflict => 409,
            Self::Internal => 500,
        }
    }

    pub fn into_response<B: AuthResponseBuilder>(self, builder: B) -> B::Response {
        builder.error_json(self.status_code(), &self.to_string())
    }

    fn internal(error: impl std::fmt::Display) -> Self {
        tracing::error!(error = %error, "request failed");
        Self::Internal
    }
}

impl From<RegisterError> for HandlerError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::InvalidCredentials(_) => Self::NotAcceptable,
            RegisterError::UserAlreadyExists => Self::Conflict,
            e @ (RegisterError::UserStoreError(_) | RegisterError::PasswordHasherError(_)) => {
                Self::internal(e)
            }
        }
    }
}

impl From<LoginError> for HandlerError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => Self::InvalidCredentials,
            e => Self::internal(e),
        }
    }
}

impl From<LogoutError> for HandlerError {
    fn from(error: LogoutError) -> Self {
        Self::internal(error)
    }
}

impl From<ProfileError> for HandlerError {
    fn from(error: ProfileError) -> Self {
        match error {
            ProfileError::InvalidUserId => Self::BadRequest("Invalid user id".to_string()),
            ProfileError::UserNotFound => Self::NotFound("User not found".to_string()),
            e => Self::internal(e),
        }
    }
}

impl From<MessageBoardError> for HandlerError {
    fn from(error: MessageBoardError) -> Self {
        match error {
            MessageBoardError::InvalidInput(e) => Self::BadRequest(e.to_string()),
            MessageBoardError::MessageNotFound => Self::NotFound("Message not found".to_string()),
            e => Self::internal(e),
        }
    }
}

impl From<SessionAuthError> for HandlerError {
    fn from(error: SessionAuthError) -> Self {
        match error {
            SessionAuthError::UnexpectedError(e) => {
                tracing::error!(error = %e, "session lookup failed");
            }
            e => tracing::debug!(reason = %e, "rejected unauthenticated request"),
        }
        Self::Unauthorized
    }
}

#[cfg(test)]
mod tests {
    use palaver_core::{MessageError, PasswordHasherError, UserError, UserStoreError};

    use super::*;

    #[test]
    fn register_errors_map_to_documented_statuses() {
        assert_eq!(
            HandlerError::from(RegisterError::InvalidCredentials(UserError::InvalidUsername))
                .status_code(),
            406
        );
        assert_eq!(
            HandlerError::from(RegisterError::UserAlreadyExists).status_code(),
            409
        );
        assert_eq!(
            HandlerError::from(RegisterError::PasswordHasherError(
                PasswordHasherError::HashingFailed("boom".to_string())
            )),
            HandlerError::Internal
        );
    }

    #[test]
    fn internal_details_stay_out_of_the_message() {
        let error = HandlerError::from(LoginError::UserStoreError(
            UserStoreError::UnexpectedError("connection refused to 10.0.0.5".to_string()),
        ));
        assert_eq!(error.status_code(), 500);
        assert_eq!(error.to_string(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn every_session_failure_is_a_plain_unauthorized() {
        for error in [
            SessionAuthError::MissingSessionToken,
            SessionAuthError::MissingCsrfToken,
            SessionAuthError::SessionNotFound,
            SessionAuthError::UnexpectedError("timeout".to_string()),
        ] {
            let mapped = HandlerError::from(error);
            assert_eq!(mapped.status_code(), 401);
            assert_eq!(mapped.to_string(), UNAUTHORIZED_MESSAGE);
        }
    }

    #[test]
    fn message_board_validation_is_a_bad_request() {
        let error = HandlerError::from(MessageBoardError::InvalidInput(MessageError::EmptyText));
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.to_string(), "Message text must not be empty");
    }
}
