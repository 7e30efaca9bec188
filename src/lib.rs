//! Login form
//!
//! Model/view/presenter split for a login dialog. The presenter gates the
//! login button on field contents and delegates credential checks to an
//! external authentication service.

pub mod auth;
pub mod config;
pub mod error;
pub mod login;

pub use self::auth::{AuthenticationResult, AuthenticationService};
pub use self::config::LoginFormConfig;
pub use self::error::{AuthError, LoginFormError};
pub use self::login::{LoginListener, LoginModel, LoginPresenter, LoginView};
