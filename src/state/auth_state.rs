// ============================================================================
// AUTH STATE - Logged-in flag and the login form contents
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Credentials;

/// Operator session and login form
#[derive(Clone, Default)]
pub struct AuthState {
    pub is_logged_in: Rc<RefCell<bool>>,
    pub credentials: Rc<RefCell<Credentials>>,
}

impl AuthState {
    /// Logged out, empty login form
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session flag
    pub fn set_logged_in(&self, logged_in: bool) {
        *self.is_logged_in.borrow_mut() = logged_in;
    }

    /// Current session flag
    pub fn get_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    /// What is typed in the login form
    pub fn get_credentials(&self) -> Credentials {
        self.credentials.borrow().clone()
    }

    /// Bind the username field
    pub fn set_username(&self, username: String) {
        self.credentials.borrow_mut().username = username;
    }

    /// Bind the password field
    pub fn set_password(&self, password: String) {
        self.credentials.borrow_mut().password = password;
    }

    /// Empty both login fields
    pub fn clear_credentials(&self) {
        *self.credentials.borrow_mut() = Credentials::default();
    }

    /// Drop the session and the typed credentials
    pub fn logout(&self) {
        self.set_logged_in(false);
        self.clear_credentials();
    }
}
