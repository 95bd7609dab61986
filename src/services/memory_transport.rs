// ============================================================================
// MEMORY TRANSPORT - In-process record store with the HTTP store's semantics
// ============================================================================
// Assigns ids, records every call and can be told to fail. Clones share
// state, so a test can keep a handle while the console owns another.
// ============================================================================

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::models::{Record, RecordPayload, RollNumber};
use crate::services::api_client::RecordTransport;
use crate::services::error::TransportError;
use crate::utils::constants::DEFAULT_API_BASE_URL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteCall {
    List,
    Create(RecordPayload),
    Update(RollNumber, RecordPayload),
    Delete(RollNumber),
}

#[derive(Default)]
struct StoreInner {
    records: Vec<Record>,
    next_id: i64,
    calls: Vec<RemoteCall>,
    unreachable: bool,
    scripted_failures: VecDeque<TransportError>,
    list_failures: VecDeque<TransportError>,
}

#[derive(Clone)]
pub struct InMemoryRecordStore {
    base_url: String,
    inner: Rc<RefCell<StoreInner>>,
}

impl InMemoryRecordStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            inner: Rc::new(RefCell::new(StoreInner {
                next_id: 1,
                ..StoreInner::default()
            })),
        }
    }

    pub fn with_records(self, records: Vec<Record>) -> Self {
        {
            let mut inner = self.inner.borrow_mut();
            let max_id = records.iter().map(|r| r.id.0).max().unwrap_or(0);
            inner.next_id = inner.next_id.max(max_id + 1);
            inner.records = records;
        }
        self
    }

    /// Current server-side contents
    pub fn records(&self) -> Vec<Record> {
        self.inner.borrow().records.clone()
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.inner.borrow().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.borrow().calls.len()
    }

    /// Mutates the store behind the console's back, like another operator
    pub fn insert_directly(&self, payload: RecordPayload) -> RollNumber {
        self.insert(payload)
    }

    pub fn remove_directly(&self, id: RollNumber) {
        self.inner.borrow_mut().records.retain(|r| r.id != id);
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.inner.borrow_mut().unreachable = unreachable;
    }

    /// The next call (of any kind) fails with `error`
    pub fn fail_next(&self, error: TransportError) {
        self.inner.borrow_mut().scripted_failures.push_back(error);
    }

    /// The next GET / fails with `error`; other calls are unaffected
    pub fn fail_next_list(&self, error: TransportError) {
        self.inner.borrow_mut().list_failures.push_back(error);
    }

    fn insert(&self, payload: RecordPayload) -> RollNumber {
        let mut inner = self.inner.borrow_mut();
        let id = RollNumber(inner.next_id);
        inner.next_id += 1;
        inner.records.push(Record {
            id,
            name: payload.name,
            email: payload.email,
            branch: payload.branch,
        });
        id
    }

    fn begin(&self, call: RemoteCall) -> Result<(), TransportError> {
        let call_is_list = call == RemoteCall::List;
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(call);
        if inner.unreachable {
            return Err(TransportError::Network("TypeError: Failed to fetch".to_string()));
        }
        if call_is_list {
            if let Some(error) = inner.list_failures.pop_front() {
                return Err(error);
            }
        }
        match inner.scripted_failures.pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[async_trait(?Send)]
impl RecordTransport for InMemoryRecordStore {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_records(&self) -> Result<Vec<Record>, TransportError> {
        self.begin(RemoteCall::List)?;
        Ok(self.records())
    }

    async fn create_record(&self, payload: &RecordPayload) -> Result<(), TransportError> {
        self.begin(RemoteCall::Create(payload.clone()))?;
        self.insert(payload.clone());
        Ok(())
    }

    // Unknown ids succeed without effect, as the backend answers 200 + null
    async fn update_record(&self, id: RollNumber, payload: &RecordPayload) -> Result<(), TransportError> {
        self.begin(RemoteCall::Update(id, payload.clone()))?;
        let mut inner = self.inner.borrow_mut();
        if let Some(record) = inner.records.iter_mut().find(|r| r.id == id) {
            record.name = payload.name.clone();
            record.email = payload.email.clone();
            record.branch = payload.branch.clone();
        }
        Ok(())
    }

    async fn delete_record(&self, id: RollNumber) -> Result<(), TransportError> {
        self.begin(RemoteCall::Delete(id))?;
        self.inner.borrow_mut().records.retain(|r| r.id != id);
        Ok(())
    }
}
