// ============================================================================
// WEB - wasm-bindgen surface for the host page
// ============================================================================
// The page renders from `snapshot()` and forwards input events here. Async
// operations are spawned; their outcome lands in the snapshot.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::{App, ConsoleServices};
use crate::config::CONFIG;
use crate::models::RollNumber;
use crate::state::SubscriptionId;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Student console - Rust + WASM");
    Ok(())
}

#[wasm_bindgen]
pub struct ConsoleHandle {
    app: Rc<App>,
}

#[wasm_bindgen]
impl ConsoleHandle {
    /// Builds the console and restores a stored session, if any
    #[wasm_bindgen(constructor)]
    pub fn new() -> ConsoleHandle {
        let app = Rc::new(App::new(&CONFIG, ConsoleServices::browser(&CONFIG)));

        let boot = app.clone();
        spawn_local(async move {
            boot.session().restore_session().await;
        });

        ConsoleHandle { app }
    }

    /// JSON-encoded ConsoleSnapshot
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serde_json::to_string(&self.app.snapshot())
            .map(|json| JsValue::from_str(&json))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `callback()` runs after every state change. Returns the id for `off_change`.
    pub fn on_change(&self, callback: js_sys::Function) -> u32 {
        let id = self.app.subscribe_to_changes(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::error!("❌ Change listener threw: {:?}", e);
            }
        });
        id.0
    }

    pub fn off_change(&self, id: u32) -> bool {
        self.app.unsubscribe(SubscriptionId(id))
    }

    pub fn set_username(&self, value: String) {
        self.app.session().set_username(value);
    }

    pub fn set_password(&self, value: String) {
        self.app.session().set_password(value);
    }

    pub fn login(&self) {
        let app = self.app.clone();
        spawn_local(async move {
            let _ = app.session().submit_login().await;
        });
    }

    pub fn logout(&self) {
        self.app.session().logout();
    }

    pub fn refresh(&self) {
        let app = self.app.clone();
        spawn_local(async move {
            let _ = app.records().fetch_all().await;
        });
    }

    pub fn set_name(&self, value: String) {
        self.app.records().set_name(value);
    }

    pub fn set_email(&self, value: String) {
        self.app.records().set_email(value);
    }

    pub fn set_branch(&self, value: String) {
        self.app.records().set_branch(value);
    }

    pub fn submit(&self) {
        let app = self.app.clone();
        spawn_local(async move {
            let _ = app.records().submit().await;
        });
    }

    pub fn begin_edit(&self, id: i32) -> bool {
        self.app.records().begin_edit_by_id(RollNumber::from(id))
    }

    pub fn cancel_edit(&self) {
        self.app.records().cancel_edit();
    }

    pub fn toggle_form(&self) {
        self.app.records().toggle_form();
    }

    pub fn remove(&self, id: i32) {
        let app = self.app.clone();
        spawn_local(async move {
            let _ = app.records().remove(RollNumber::from(id)).await;
        });
    }
}

impl Default for ConsoleHandle {
    fn default() -> Self {
        Self::new()
    }
}
