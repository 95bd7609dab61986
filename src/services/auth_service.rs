// ============================================================================
// AUTH SERVICE - Credential check behind a swappable capability
// ============================================================================

use crate::models::Credentials;
use crate::utils::constants::{ADMIN_PASSWORD, ADMIN_USERNAME};

pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool;
}

/// Accepts exactly one username/password pair. A placeholder, not a
/// security boundary: the pair ships inside the bundle.
#[derive(Clone, Debug)]
pub struct FixedCredentialAuthenticator {
    username: String,
    password: String,
}

impl FixedCredentialAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn admin() -> Self {
        Self::new(ADMIN_USERNAME, ADMIN_PASSWORD)
    }
}

impl Default for FixedCredentialAuthenticator {
    fn default() -> Self {
        Self::admin()
    }
}

impl Authenticator for FixedCredentialAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool {
        credentials.username == self.username && credentials.password == self.password
    }
}
