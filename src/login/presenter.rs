//! Login presenter
//!
//! Reacts to field changes and the login action, keeps the [`LoginModel`] in
//! sync and drives the [`LoginView`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::auth::AuthenticationService;
use crate::config::LoginFormConfig;
use crate::error::handlers::error_to_message;
use crate::login::model::LoginModel;
use crate::login::view::{LoginListener, LoginView};

/// Connects the login model, view and authentication service.
pub struct LoginPresenter {
    model: Rc<RefCell<LoginModel>>,
    view: Rc<dyn LoginView>,
    auth: Rc<dyn AuthenticationService>,
    config: LoginFormConfig,
}

impl LoginPresenter {
    /// Creates a presenter with the default configuration.
    ///
    /// See [`LoginPresenter::with_config`].
    pub fn new(
        model: Rc<RefCell<LoginModel>>,
        view: Rc<dyn LoginView>,
        auth: Rc<dyn AuthenticationService>,
    ) -> Rc<Self> {
        Self::with_config(model, view, auth, LoginFormConfig::default())
    }

    /// Creates a presenter, registers it as the view's listener and syncs
    /// the login button with the current model.
    pub fn with_config(
        model: Rc<RefCell<LoginModel>>,
        view: Rc<dyn LoginView>,
        auth: Rc<dyn AuthenticationService>,
        config: LoginFormConfig,
    ) -> Rc<Self> {
        let presenter = Rc::new(Self {
            model,
            view,
            auth,
            config,
        });

        let listener: Weak<Self> = Rc::downgrade(&presenter);
        presenter.view.register_login_listener(listener);
        presenter.update_login_button();

        presenter
    }

    pub fn lookup_changed(&self, text: &str) {
        debug!("Lookup changed ({} chars)", text.chars().count());
        self.model.borrow_mut().set_lookup(text);
        self.update_login_button();
    }

    pub fn password_changed(&self, text: &str) {
        debug!("Password changed");
        self.model.borrow_mut().set_password(text);
        self.update_login_button();
    }

    /// Authenticates the current lookup and password.
    ///
    /// Closes the view on success, otherwise shows the rejection message.
    pub fn login_button_clicked(&self) {
        let (lookup, password) = {
            let model = self.model.borrow();
            (model.lookup().to_string(), model.password().to_string())
        };

        match self.auth.authenticate(&lookup, &password).into_result() {
            Ok(()) => {
                info!("Login successful for '{}'", lookup);
                self.view.close();
            }
            Err(err) => {
                warn!("Login failed for '{}': {}", lookup, err);
                self.view.show_error(error_to_message(&err, &self.config));
            }
        }
    }

    fn update_login_button(&self) {
        let active = {
            let mut model = self.model.borrow_mut();
            let active =
                self.config.is_filled(model.lookup()) && self.config.is_filled(model.password());
            model.set_login_button_active(active);
            active
        };

        debug!("Login button {}", if active { "enabled" } else { "disabled" });
        if active {
            self.view.enable_login();
        } else {
            self.view.disable_login();
        }
    }
}

impl LoginListener for LoginPresenter {
    fn lookup_changed(&self, text: &str) {
        LoginPresenter::lookup_changed(self, text);
    }

    fn password_changed(&self, text: &str) {
        LoginPresenter::password_changed(self, text);
    }

    fn login_button_clicked(&self) {
        LoginPresenter::login_button_clicked(self);
    }
}
