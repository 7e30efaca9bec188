//! Login form
//!
//! Model, view contract and presenter for the login dialog.

pub mod model;
pub mod presenter;
pub mod view;

pub use model::LoginModel;
pub use presenter::LoginPresenter;
pub use view::{LoginListener, LoginView};
