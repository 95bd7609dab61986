// ============================================================================
// SESSION VIEWMODEL - Login / logout / restore at boot
// ============================================================================
// Two states, LoggedOut and LoggedIn. The durable flag is trusted as-is at
// boot; nothing is validated remotely.
// ============================================================================

use std::rc::Rc;

use crate::models::Credentials;
use crate::services::{AuthError, Authenticator};
use crate::state::AppState;
use crate::utils::constants::{AUTH_FLAG_KEY, MSG_LOGIN_FAILED, MSG_LOGIN_SUCCESS, MSG_LOGOUT};
use crate::utils::storage::FlagStore;
use crate::utils::timers::Scheduler;
use crate::viewmodels::RecordsViewModel;

pub struct SessionViewModel {
    state: AppState,
    authenticator: Rc<dyn Authenticator>,
    flags: Rc<dyn FlagStore>,
    scheduler: Rc<dyn Scheduler>,
    records: Rc<RecordsViewModel>,
    login_status_clear_ms: u32,
    status_clear_ms: u32,
}

impl SessionViewModel {
    pub fn new(
        state: AppState,
        authenticator: Rc<dyn Authenticator>,
        flags: Rc<dyn FlagStore>,
        scheduler: Rc<dyn Scheduler>,
        records: Rc<RecordsViewModel>,
        login_status_clear_ms: u32,
        status_clear_ms: u32,
    ) -> Self {
        Self {
            state,
            authenticator,
            flags,
            scheduler,
            records,
            login_status_clear_ms,
            status_clear_ms,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.auth.get_logged_in()
    }

    pub fn set_username(&self, username: String) {
        self.state.auth.set_username(username);
        self.state.notify_changes();
    }

    pub fn set_password(&self, password: String) {
        self.state.auth.set_password(password);
        self.state.notify_changes();
    }

    /// Login button / Enter in either field: uses the typed credentials
    pub async fn submit_login(&self) -> Result<(), AuthError> {
        let Credentials { username, password } = self.state.auth.get_credentials();
        self.login(&username, &password).await
    }

    /// On success the initial fetch runs before this returns; a failed
    /// fetch shows up as an error status but does not undo the login.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.state.status.clear_error();

        let attempt = Credentials::new(username, password);
        if !self.authenticator.authenticate(&attempt) {
            log::warn!("❌ Login rejected for user {:?}", username);
            self.state.show_error(MSG_LOGIN_FAILED);
            self.state.notify_changes();
            return Err(AuthError::InvalidCredentials);
        }

        log::info!("🔐 Login successful for {}", username);
        if let Err(e) = self.flags.write_flag(AUTH_FLAG_KEY) {
            log::error!("❌ Could not persist login flag: {}", e);
        }
        self.state.auth.set_logged_in(true);
        self.state.auth.clear_credentials();
        self.state.flash_success(
            self.scheduler.as_ref(),
            MSG_LOGIN_SUCCESS,
            self.login_status_clear_ms,
        );
        self.state.notify_changes();

        if let Err(e) = self.records.fetch_all().await {
            log::warn!("⚠️ Initial fetch after login failed: {}", e);
        }
        Ok(())
    }

    /// Boot-time check of the durable flag. Returns whether a session was restored.
    pub async fn restore_session(&self) -> bool {
        let logged_in = match self.flags.read_flag(AUTH_FLAG_KEY) {
            Ok(flag) => flag,
            Err(e) => {
                log::error!("❌ Could not read login flag: {}", e);
                false
            }
        };

        if !logged_in {
            log::info!("🔒 No stored session");
            return false;
        }

        log::info!("💾 Stored session found, restoring dashboard");
        self.state.auth.set_logged_in(true);
        self.state.notify_changes();
        if let Err(e) = self.records.fetch_all().await {
            log::warn!("⚠️ Fetch after restoring session failed: {}", e);
        }
        true
    }

    /// Idempotent. In-flight calls are not cancelled; see the records viewmodel.
    pub fn logout(&self) {
        log::info!("👋 Logout");
        if let Err(e) = self.flags.clear_flag(AUTH_FLAG_KEY) {
            log::error!("❌ Could not clear login flag: {}", e);
        }
        self.state.auth.logout();
        self.state.records.clear_records();
        self.state.records.reset_form();
        self.state.records.set_form_open(false);
        self.state
            .flash_success(self.scheduler.as_ref(), MSG_LOGOUT, self.status_clear_ms);
        self.state.notify_changes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, RollNumber, StatusKind, StatusMessage};
    use crate::services::{FixedCredentialAuthenticator, InMemoryRecordStore, RecordTransport, RemoteCall};
    use crate::utils::storage::MemoryFlagStore;
    use crate::utils::timers::ManualScheduler;
    use futures::executor::block_on;

    struct Fixture {
        session: SessionViewModel,
        state: AppState,
        flags: MemoryFlagStore,
        store: InMemoryRecordStore,
        scheduler: ManualScheduler,
    }

    fn fixture(flags: MemoryFlagStore) -> Fixture {
        let store = InMemoryRecordStore::default().with_records(vec![
            Record::new(RollNumber(1), "Ravi", "ravi@x.com", "MECH"),
        ]);
        let scheduler = ManualScheduler::new();
        let state = AppState::new(store.base_url());
        let records = Rc::new(RecordsViewModel::new(
            state.clone(),
            Rc::new(store.clone()),
            Rc::new(|_: &str| true),
            Rc::new(scheduler.clone()),
            3000,
        ));
        let session = SessionViewModel::new(
            state.clone(),
            Rc::new(FixedCredentialAuthenticator::admin()),
            Rc::new(flags.clone()),
            Rc::new(scheduler.clone()),
            records,
            2000,
            3000,
        );
        Fixture { session, state, flags, store, scheduler }
    }

    #[test]
    fn admin_login_persists_flag_and_fetches() {
        let f = fixture(MemoryFlagStore::new());
        f.session.set_username("admin".into());
        f.session.set_password("admin".into());

        block_on(f.session.submit_login()).expect("login");

        assert!(f.session.is_authenticated());
        assert_eq!(f.flags.raw(AUTH_FLAG_KEY).as_deref(), Some("true"));
        assert!(f.state.auth.get_credentials().is_empty());
        assert_eq!(f.store.calls(), vec![RemoteCall::List]);
        assert_eq!(f.state.records.len(), 1);
        assert_eq!(f.state.status.get(), Some(StatusMessage::success(MSG_LOGIN_SUCCESS)));
        assert_eq!(f.scheduler.delays(), vec![2000]);
    }

    #[test]
    fn wrong_credentials_keep_attempt_and_show_error() {
        let f = fixture(MemoryFlagStore::new());
        f.session.set_username("admin".into());
        f.session.set_password("letmein".into());

        let error = block_on(f.session.submit_login()).expect_err("rejected");

        assert_eq!(error, AuthError::InvalidCredentials);
        assert!(!f.session.is_authenticated());
        assert_eq!(f.flags.raw(AUTH_FLAG_KEY), None);
        assert_eq!(f.state.auth.get_credentials(), Credentials::new("admin", "letmein"));
        assert_eq!(f.state.status.get(), Some(StatusMessage::error(MSG_LOGIN_FAILED)));
        assert_eq!(f.store.call_count(), 0);
    }

    #[test]
    fn login_survives_failed_initial_fetch() {
        let f = fixture(MemoryFlagStore::new());
        f.store.set_unreachable(true);

        block_on(f.session.login("admin", "admin")).expect("login");

        assert!(f.session.is_authenticated());
        assert!(f.state.records.is_empty());
        assert_eq!(f.state.status.get().map(|s| s.kind), Some(StatusKind::Error));
    }

    #[test]
    fn restore_trusts_flag_without_remote_validation() {
        let flags = MemoryFlagStore::new();
        flags.set_raw(AUTH_FLAG_KEY, "true");
        let f = fixture(flags);

        assert!(block_on(f.session.restore_session()));
        assert!(f.session.is_authenticated());
        assert_eq!(f.store.calls(), vec![RemoteCall::List]);
    }

    #[test]
    fn restore_keeps_session_when_fetch_fails() {
        let flags = MemoryFlagStore::new();
        flags.set_raw(AUTH_FLAG_KEY, "true");
        let f = fixture(flags);
        f.store.set_unreachable(true);

        assert!(block_on(f.session.restore_session()));
        assert!(f.session.is_authenticated());
        assert!(f.state.records.is_empty());
        let status = f.state.status.get().expect("error shown");
        assert!(status.is_error());
        assert!(status.text.contains("Cannot connect"));
    }

    #[test]
    fn restore_without_flag_stays_logged_out() {
        let f = fixture(MemoryFlagStore::new());
        assert!(!block_on(f.session.restore_session()));
        assert!(!f.session.is_authenticated());
        assert_eq!(f.store.call_count(), 0);
    }

    #[test]
    fn logout_clears_everything_and_is_idempotent() {
        let f = fixture(MemoryFlagStore::new());
        block_on(f.session.login("admin", "admin")).expect("login");
        f.session.set_username("typed again".into());
        f.state.records.set_form_open(true);

        f.session.logout();
        let once = f.state.snapshot();
        f.session.logout();
        let twice = f.state.snapshot();

        assert_eq!(once, twice);
        assert!(!once.is_authenticated);
        assert!(once.records.is_empty());
        assert!(once.login_username.is_empty());
        assert!(!once.form_open);
        assert_eq!(once.status, Some(StatusMessage::success(MSG_LOGOUT)));
        assert_eq!(f.flags.raw(AUTH_FLAG_KEY), None);
    }
}
