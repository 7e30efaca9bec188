//! View contract
//!
//! The login view is implemented by the UI layer. It renders the form and
//! forwards user input to a registered [`LoginListener`].

use std::rc::Weak;

#[cfg(test)]
use mockall::automock;

/// Receives user input from the login view.
pub trait LoginListener {
    fn lookup_changed(&self, text: &str);
    fn password_changed(&self, text: &str);
    fn login_button_clicked(&self);
}

/// Operations the presenter drives on the login view.
#[cfg_attr(test, automock)]
pub trait LoginView {
    fn enable_login(&self);
    fn disable_login(&self);
    /// Closes the dialog after a successful login.
    fn close(&self);
    fn show_error(&self, message: &str);
    /// Stores the listener that input events are forwarded to.
    ///
    /// The handle is weak: a view must not keep its presenter alive.
    fn register_login_listener(&self, listener: Weak<dyn LoginListener>);
}
