// ============================================================================
// RECORDS VIEWMODEL - Record list sync against the remote store
// ============================================================================
// Every mutation: validate draft -> remote call -> on success reset the form
// and re-fetch the whole list; on failure surface a classified error and
// leave the list alone. The list is never patched locally.
// ============================================================================

use std::rc::Rc;

use chrono::Utc;

use crate::models::{DraftForm, Record, RecordPayload, RollNumber};
use crate::services::{Confirmer, RecordTransport, SyncAction, SyncError, TransportError};
use crate::state::AppState;
use crate::utils::constants::{
    MSG_CONFIRM_DELETE, MSG_CREATED, MSG_DELETED, MSG_MISSING_FIELDS, MSG_UPDATED,
};
use crate::utils::timers::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// Operator answered "no" at the confirmation gate; nothing was sent
    Declined,
}

pub struct RecordsViewModel {
    state: AppState,
    transport: Rc<dyn RecordTransport>,
    confirmer: Rc<dyn Confirmer>,
    scheduler: Rc<dyn Scheduler>,
    status_clear_ms: u32,
}

impl RecordsViewModel {
    pub fn new(
        state: AppState,
        transport: Rc<dyn RecordTransport>,
        confirmer: Rc<dyn Confirmer>,
        scheduler: Rc<dyn Scheduler>,
        status_clear_ms: u32,
    ) -> Self {
        Self {
            state,
            transport,
            confirmer,
            scheduler,
            status_clear_ms,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// GET the full collection and overwrite the local list with it
    pub async fn fetch_all(&self) -> Result<Vec<Record>, SyncError> {
        self.begin_remote_call();
        log::info!("📋 Fetching students from {}", self.transport.base_url());

        let result = self.transport.list_records().await;
        self.state.records.set_loading(false);

        match result {
            Ok(records) => {
                if !Record::ids_are_unique(&records) {
                    log::warn!("⚠️ Store returned duplicate roll numbers; mirroring as received");
                }
                log::info!("✅ Students fetched: {}", records.len());
                self.state.records.replace_records(records.clone(), Utc::now());
                self.state.notify_changes();
                Ok(records)
            }
            Err(e) => Err(self.fail(SyncAction::Fetch, e)),
        }
    }

    pub async fn create(&self, draft: DraftForm) -> Result<(), SyncError> {
        let payload = self.validate(&draft)?;

        self.begin_remote_call();
        log::info!("➕ Creating student: {}", payload.name);

        let result = self.transport.create_record(&payload).await;
        self.state.records.set_loading(false);

        match result {
            Ok(()) => {
                log::info!("✅ Student created");
                self.finish_mutation(MSG_CREATED).await;
                Ok(())
            }
            Err(e) => Err(self.fail(SyncAction::Create, e)),
        }
    }

    pub async fn update(&self, id: RollNumber, draft: DraftForm) -> Result<(), SyncError> {
        let payload = self.validate(&draft)?;

        self.begin_remote_call();
        log::info!("✏️ Updating student {}", id);

        let result = self.transport.update_record(id, &payload).await;
        self.state.records.set_loading(false);

        match result {
            Ok(()) => {
                log::info!("✅ Student {} updated", id);
                self.finish_mutation(MSG_UPDATED).await;
                Ok(())
            }
            Err(e) => Err(self.fail(SyncAction::Update, e)),
        }
    }

    pub async fn remove(&self, id: RollNumber) -> Result<RemoveOutcome, SyncError> {
        if !self.confirmer.confirm(MSG_CONFIRM_DELETE) {
            log::info!("↩️ Delete of student {} cancelled", id);
            return Ok(RemoveOutcome::Declined);
        }

        self.begin_remote_call();
        log::info!("🗑️ Deleting student {}", id);

        let result = self.transport.delete_record(id).await;
        self.state.records.set_loading(false);

        match result {
            Ok(()) => {
                log::info!("✅ Student {} deleted", id);
                self.state
                    .flash_success(self.scheduler.as_ref(), MSG_DELETED, self.status_clear_ms);
                self.state.notify_changes();
                self.refresh_after_mutation().await;
                Ok(RemoveOutcome::Removed)
            }
            Err(e) => Err(self.fail(SyncAction::Delete, e)),
        }
    }

    /// Form submit: update when an edit reference is set, create otherwise
    pub async fn submit(&self) -> Result<(), SyncError> {
        let draft = self.state.records.get_draft();
        match self.state.records.get_editing() {
            Some(record) => self.update(record.id, draft).await,
            None => self.create(draft).await,
        }
    }

    pub fn begin_edit(&self, record: &Record) {
        log::debug!("✏️ Editing student {}", record.id);
        self.state.records.set_draft(DraftForm::from_record(record));
        self.state.records.set_editing(Some(record.clone()));
        self.state.records.set_form_open(true);
        self.state.status.clear_error();
        self.state.notify_changes();
    }

    /// Looks the record up in the current list; false if it is not there
    pub fn begin_edit_by_id(&self, id: RollNumber) -> bool {
        let records = self.state.records.get_records();
        match Record::find(&records, id) {
            Some(record) => {
                self.begin_edit(record);
                true
            }
            None => {
                log::warn!("⚠️ Student {} not in the current list", id);
                false
            }
        }
    }

    pub fn cancel_edit(&self) {
        self.state.records.reset_form();
        self.state.records.set_form_open(false);
        self.state.status.clear_error();
        self.state.notify_changes();
    }

    /// The "Add New Student" / "Cancel" button
    pub fn toggle_form(&self) {
        if self.state.records.is_form_open() {
            self.cancel_edit();
        } else {
            self.state.records.set_form_open(true);
            self.state.notify_changes();
        }
    }

    pub fn set_name(&self, name: String) {
        self.state.records.update_draft(|d| d.name = name);
        self.state.notify_changes();
    }

    pub fn set_email(&self, email: String) {
        self.state.records.update_draft(|d| d.email = email);
        self.state.notify_changes();
    }

    pub fn set_branch(&self, branch: String) {
        self.state.records.update_draft(|d| d.branch = branch);
        self.state.notify_changes();
    }

    fn validate(&self, draft: &DraftForm) -> Result<RecordPayload, SyncError> {
        draft.to_payload().ok_or_else(|| {
            log::warn!("⚠️ Draft rejected: missing fields");
            self.state.show_error(MSG_MISSING_FIELDS);
            self.state.notify_changes();
            SyncError::Validation(MSG_MISSING_FIELDS.to_string())
        })
    }

    // Advisory only: callers that ignore the flag can still overlap calls
    fn begin_remote_call(&self) {
        self.state.records.set_loading(true);
        self.state.status.clear_error();
        self.state.notify_changes();
    }

    async fn finish_mutation(&self, message: &str) {
        self.state
            .flash_success(self.scheduler.as_ref(), message, self.status_clear_ms);
        self.state.records.reset_form();
        self.state.records.set_form_open(false);
        self.state.notify_changes();
        self.refresh_after_mutation().await;
    }

    // A failed re-fetch is already on screen as an error status; the
    // mutation itself still succeeded.
    async fn refresh_after_mutation(&self) {
        if let Err(e) = self.fetch_all().await {
            log::warn!("⚠️ Re-fetch after mutation failed: {}", e);
        }
    }

    fn fail(&self, action: SyncAction, error: TransportError) -> SyncError {
        log::error!("❌ {} failed: {}", action, error);
        let error = SyncError::classify(action, error, self.transport.base_url());
        self.state.show_error(error.to_string());
        self.state.notify_changes();
        error
    }
}
