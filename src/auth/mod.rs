//! Authentication seam
//!
//! The login form never checks credentials itself. It hands the lookup and
//! password to an [`AuthenticationService`] supplied by the caller.

pub mod results;

pub use results::AuthenticationResult;

#[cfg(test)]
use mockall::automock;

/// Checks a lookup/password pair on behalf of the login form.
#[cfg_attr(test, automock)]
pub trait AuthenticationService {
    fn authenticate(&self, lookup: &str, password: &str) -> AuthenticationResult;
}
