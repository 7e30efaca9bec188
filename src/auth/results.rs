//! Authentication result types
//!
//! Defines the outcome returned by an authentication service.

use crate::error::AuthError;

/// Outcome of a single authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub success: bool,
    pub error_message: Option<String>,
}

impl AuthenticationResult {
    /// Builds a result from the raw success flag and optional message.
    pub fn new(success: bool, error_message: Option<String>) -> Self {
        Self {
            success,
            error_message,
        }
    }

    /// A successful attempt.
    pub fn succeeded() -> Self {
        Self::new(true, None)
    }

    /// A rejected attempt carrying a message for the user.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(false, Some(message.into()))
    }

    /// Converts the outcome into a `Result`, keeping the rejection message.
    ///
    /// An error message on a successful result is ignored.
    pub fn into_result(self) -> Result<(), AuthError> {
        if self.success {
            Ok(())
        } else {
            Err(AuthError::Rejected(self.error_message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_converts_to_ok() {
        assert!(AuthenticationResult::succeeded().into_result().is_ok());

        let stray_message = AuthenticationResult::new(true, Some("ignored".to_string()));
        assert!(stray_message.into_result().is_ok());
    }

    #[test]
    fn test_failure_keeps_message() {
        let result = AuthenticationResult::failed("Login failed.");
        assert!(!result.success);

        match result.into_result() {
            Err(AuthError::Rejected(Some(message))) => assert_eq!(message, "Login failed."),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_failure_without_message() {
        let result = AuthenticationResult::new(false, None);
        assert!(matches!(result.into_result(), Err(AuthError::Rejected(None))));
    }
}
