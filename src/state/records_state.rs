// ============================================================================
// RECORDS STATE - Record list mirror, draft form, edit reference, loading
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::models::{DraftForm, Record};

/// Local mirror of the remote list plus form state
#[derive(Clone, Default)]
pub struct RecordsState {
    records: Rc<RefCell<Vec<Record>>>,
    last_synced_at: Rc<RefCell<Option<DateTime<Utc>>>>,
    draft: Rc<RefCell<DraftForm>>,
    editing: Rc<RefCell<Option<Record>>>,
    form_open: Rc<RefCell<bool>>,
    loading: Rc<RefCell<bool>>,
}

impl RecordsState {
    /// Empty list, closed form, not loading
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the last fetched list
    pub fn get_records(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    /// Number of records in the list
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// The only way the list changes: wholesale overwrite with a fetch result
    pub fn replace_records(&self, records: Vec<Record>, fetched_at: DateTime<Utc>) {
        *self.records.borrow_mut() = records;
        *self.last_synced_at.borrow_mut() = Some(fetched_at);
    }

    /// Forget the list and its sync time (logout)
    pub fn clear_records(&self) {
        self.records.borrow_mut().clear();
        *self.last_synced_at.borrow_mut() = None;
    }

    /// When the list was last fetched
    pub fn get_last_synced_at(&self) -> Option<DateTime<Utc>> {
        *self.last_synced_at.borrow()
    }

    /// Current form contents
    pub fn get_draft(&self) -> DraftForm {
        self.draft.borrow().clone()
    }

    /// Replace the form contents
    pub fn set_draft(&self, draft: DraftForm) {
        *self.draft.borrow_mut() = draft;
    }

    /// Edit the form contents in place
    pub fn update_draft<F>(&self, updater: F)
    where
        F: FnOnce(&mut DraftForm),
    {
        updater(&mut self.draft.borrow_mut());
    }

    /// Record being edited, if any
    pub fn get_editing(&self) -> Option<Record> {
        self.editing.borrow().clone()
    }

    /// Set or drop the edit reference
    pub fn set_editing(&self, record: Option<Record>) {
        *self.editing.borrow_mut() = record;
    }

    /// Whether the add/edit form is shown
    pub fn is_form_open(&self) -> bool {
        *self.form_open.borrow()
    }

    /// Show or hide the add/edit form
    pub fn set_form_open(&self, open: bool) {
        *self.form_open.borrow_mut() = open;
    }

    /// Empties the draft and drops the edit reference; leaves the form as is
    pub fn reset_form(&self) {
        self.set_draft(DraftForm::default());
        self.set_editing(None);
    }

    /// Advisory busy flag
    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Set the busy flag around a remote call
    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RollNumber;

    #[test]
    fn reset_form_keeps_list_and_open_flag() {
        let state = RecordsState::new();
        let ravi = Record::new(RollNumber(1), "Ravi", "ravi@x.com", "MECH");
        state.replace_records(vec![ravi.clone()], Utc::now());
        state.set_draft(DraftForm::from_record(&ravi));
        state.set_editing(Some(ravi));
        state.set_form_open(true);

        state.reset_form();

        assert!(state.get_draft().is_empty());
        assert_eq!(state.get_editing(), None);
        assert!(state.is_form_open());
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn clear_records_forgets_sync_time() {
        let state = RecordsState::new();
        state.replace_records(Vec::new(), Utc::now());
        assert!(state.get_last_synced_at().is_some());

        state.clear_records();
        assert!(state.is_empty());
        assert_eq!(state.get_last_synced_at(), None);
    }
}
