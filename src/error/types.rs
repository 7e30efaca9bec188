//! Error types
//!
//! Defines the errors raised by authentication and configuration loading.

use std::fmt;

/// Authentication errors
#[derive(Debug)]
pub enum AuthError {
    /// The service refused the credentials, optionally saying why.
    Rejected(Option<String>),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Rejected(Some(reason)) => write!(f, "Authentication rejected: {}", reason),
            AuthError::Rejected(None) => write!(f, "Authentication rejected"),
        }
    }
}

impl std::error::Error for AuthError {}

/// General login form error that encompasses all error types
#[derive(Debug)]
pub enum LoginFormError {
    Auth(AuthError),
    Config(config::ConfigError),
}

impl fmt::Display for LoginFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginFormError::Auth(e) => write!(f, "{}", e),
            LoginFormError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for LoginFormError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoginFormError::Auth(e) => Some(e),
            LoginFormError::Config(e) => Some(e),
        }
    }
}

impl From<AuthError> for LoginFormError {
    fn from(error: AuthError) -> Self {
        LoginFormError::Auth(error)
    }
}

impl From<config::ConfigError> for LoginFormError {
    fn from(error: config::ConfigError) -> Self {
        LoginFormError::Config(error)
    }
}
