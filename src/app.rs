// ============================================================================
// APP - Composition root: one state object, two viewmodels, injected services
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{Authenticator, Confirmer, RecordTransport};
use crate::state::{AppState, ConsoleSnapshot, SubscriptionId};
use crate::utils::storage::FlagStore;
use crate::utils::timers::Scheduler;
use crate::viewmodels::{RecordsViewModel, SessionViewModel};

/// Platform capabilities the console depends on
pub struct ConsoleServices {
    pub transport: Rc<dyn RecordTransport>,
    pub flags: Rc<dyn FlagStore>,
    pub authenticator: Rc<dyn Authenticator>,
    pub confirmer: Rc<dyn Confirmer>,
    pub scheduler: Rc<dyn Scheduler>,
}

#[cfg(target_arch = "wasm32")]
impl ConsoleServices {
    /// gloo-net + localStorage + window.confirm + gloo-timers
    pub fn browser(config: &AppConfig) -> Self {
        use crate::services::{ApiClient, BrowserConfirmer, FixedCredentialAuthenticator};
        use crate::utils::storage::BrowserFlagStore;
        use crate::utils::timers::BrowserScheduler;

        Self {
            transport: Rc::new(ApiClient::new(config.api_base_url())),
            flags: Rc::new(BrowserFlagStore),
            authenticator: Rc::new(FixedCredentialAuthenticator::admin()),
            confirmer: Rc::new(BrowserConfirmer),
            scheduler: Rc::new(BrowserScheduler),
        }
    }
}

pub struct App {
    state: AppState,
    session: SessionViewModel,
    records: Rc<RecordsViewModel>,
}

impl App {
    pub fn new(config: &AppConfig, services: ConsoleServices) -> Self {
        // Status messages name the address the transport actually talks to
        let state = AppState::new(services.transport.base_url());

        let records = Rc::new(RecordsViewModel::new(
            state.clone(),
            services.transport,
            services.confirmer,
            services.scheduler.clone(),
            config.status_clear_ms,
        ));
        let session = SessionViewModel::new(
            state.clone(),
            services.authenticator,
            services.flags,
            services.scheduler,
            records.clone(),
            config.login_status_clear_ms,
            config.status_clear_ms,
        );

        log::info!("🎓 Student console ready (API: {})", state.api_base_url());
        Self {
            state,
            session,
            records,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &SessionViewModel {
        &self.session
    }

    pub fn records(&self) -> &RecordsViewModel {
        &self.records
    }

    pub fn snapshot(&self) -> ConsoleSnapshot {
        self.state.snapshot()
    }

    pub fn subscribe_to_changes<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.state.subscribe_to_changes(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }
}
