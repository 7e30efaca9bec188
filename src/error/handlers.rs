//! Error handlers
//!
//! Maps errors to the text shown in the login view.

use crate::config::LoginFormConfig;
use crate::error::types::AuthError;

/// Convert an authentication error to the message for the view
pub fn error_to_message<'a>(err: &'a AuthError, config: &'a LoginFormConfig) -> &'a str {
    match err {
        AuthError::Rejected(Some(message)) if !message.is_empty() => message,
        AuthError::Rejected(_) => &config.default_error_message,
    }
}
