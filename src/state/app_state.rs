// ============================================================================
// APP STATE - Everything the console owns, passed around by handle
// ============================================================================

use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{DraftForm, Record, RollNumber, StatusMessage};
use crate::state::{AuthState, ChangeNotifier, RecordsState, StatusState, SubscriptionId};
use crate::utils::timers::Scheduler;

/// Read-only projection handed to the host page for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConsoleSnapshot {
    pub is_authenticated: bool,
    pub login_username: String,
    pub api_base_url: String,
    pub records: Vec<Record>,
    pub total_records: usize,
    pub draft: DraftForm,
    pub form_open: bool,
    pub editing_id: Option<RollNumber>,
    pub loading: bool,
    pub status: Option<StatusMessage>,
    pub last_synced_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub records: RecordsState,
    pub status: StatusState,
    api_base_url: Rc<str>,
    notifier: ChangeNotifier,
}

impl AppState {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            auth: AuthState::new(),
            records: RecordsState::new(),
            status: StatusState::new(),
            api_base_url: Rc::from(api_base_url),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn subscribe_to_changes<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn notify_changes(&self) {
        self.notifier.notify();
    }

    pub fn show_error(&self, text: impl Into<String>) {
        self.status.set(StatusMessage::error(text));
    }

    /// Shows a success banner and schedules its removal. A newer status
    /// written before the delay elapses is left alone.
    pub fn flash_success(&self, scheduler: &dyn Scheduler, text: impl Into<String>, delay_ms: u32) {
        let generation = self.status.set(StatusMessage::success(text));
        let state = self.clone();
        scheduler.schedule(
            delay_ms,
            Box::new(move || {
                if state.status.clear_if_current(generation) {
                    state.notify_changes();
                }
            }),
        );
    }

    pub fn snapshot(&self) -> ConsoleSnapshot {
        let records = self.records.get_records();
        ConsoleSnapshot {
            is_authenticated: self.auth.get_logged_in(),
            login_username: self.auth.get_credentials().username,
            api_base_url: self.api_base_url.to_string(),
            total_records: records.len(),
            records,
            draft: self.records.get_draft(),
            form_open: self.records.is_form_open(),
            editing_id: self.records.get_editing().map(|r| r.id),
            loading: self.records.get_loading(),
            status: self.status.get(),
            last_synced_at: self.records.get_last_synced_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusKind;
    use crate::utils::timers::ManualScheduler;
    use std::cell::Cell;

    #[test]
    fn flash_success_clears_after_timer_and_notifies() {
        let state = AppState::new("http://localhost:8080/student");
        let scheduler = ManualScheduler::new();
        let renders = Rc::new(Cell::new(0));
        let r = renders.clone();
        state.subscribe_to_changes(move || r.set(r.get() + 1));

        state.flash_success(&scheduler, "saved", 3000);
        assert_eq!(state.status.get().map(|s| s.kind), Some(StatusKind::Success));
        assert_eq!(scheduler.delays(), vec![3000]);

        scheduler.run_pending();
        assert_eq!(state.status.get(), None);
        assert_eq!(renders.get(), 1);
    }

    #[test]
    fn earlier_timer_leaves_later_message_in_place() {
        let state = AppState::new("http://localhost:8080/student");
        let scheduler = ManualScheduler::new();

        state.flash_success(&scheduler, "logged in", 2000);
        state.show_error("cannot connect");
        scheduler.run_pending();

        assert_eq!(state.status.get(), Some(StatusMessage::error("cannot connect")));
    }

    #[test]
    fn snapshot_serializes_for_host_page() {
        let state = AppState::new("http://localhost:8080/student");
        state.auth.set_username("adm".to_string());
        state.auth.set_password("secret".to_string());
        state.records.replace_records(
            vec![Record::new(RollNumber(1), "Asha", "asha@x.com", "CSE")],
            Utc::now(),
        );

        let snapshot = state.snapshot();
        assert_eq!(snapshot.total_records, 1);
        assert_eq!(snapshot.editing_id, None);

        let json = serde_json::to_value(&snapshot).expect("encode");
        assert_eq!(json["login_username"], "adm");
        assert_eq!(json["records"][0]["roln"], 1);
        assert!(!json.to_string().contains("secret"));
    }
}
