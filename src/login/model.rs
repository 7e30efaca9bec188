//! Module `model`
//!
//! Defines the `LoginModel` struct holding the state of one login form session.

/// State of the login form.
///
/// Shared between the form's owner and the presenter; dropped when the view closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginModel {
    lookup: String,
    password: String,
    login_button_active: bool,
}

impl LoginModel {
    pub fn new() -> Self {
        Self::default()
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the user name or e-mail entered in the lookup field.
    pub fn lookup(&self) -> &str {
        &self.lookup
    }

    /// Returns the entered password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns whether the login button is currently enabled.
    pub fn login_button_active(&self) -> bool {
        self.login_button_active
    }

    // --------------------
    // Setter methods
    // --------------------

    pub fn set_lookup(&mut self, lookup: impl Into<String>) {
        self.lookup = lookup.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_login_button_active(&mut self, active: bool) {
        self.login_button_active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_model_is_empty() {
        let model = LoginModel::new();
        assert_eq!(model.lookup(), "");
        assert_eq!(model.password(), "");
        assert!(!model.login_button_active());
    }

    #[test]
    fn test_setters() {
        let mut model = LoginModel::new();
        model.set_lookup("Amanda");
        model.set_password(String::from("secret123"));
        model.set_login_button_active(true);

        assert_eq!(model.lookup(), "Amanda");
        assert_eq!(model.password(), "secret123");
        assert!(model.login_button_active());
    }
}
