// ============================================================================
// STUDENT CONSOLE - Admin console core (Rust + WASM)
// ============================================================================
// - Models: records, draft form, credentials, status banner
// - Services: remote store transport, credential check, confirm gate
// - State: Rc<RefCell> slices composed into AppState
// - ViewModels: session (login/logout/restore) and record sync
// - Web: wasm-bindgen handle for the host page (wasm32 only)
// ============================================================================

pub mod app;
pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{App, ConsoleServices};
pub use config::{AppConfig, CONFIG};
pub use state::ConsoleSnapshot;
