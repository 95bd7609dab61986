// ============================================================================
// STATE MODULE - Rc<RefCell> state slices plus change notifications
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod reactivity;
pub mod records_state;
pub mod status_state;

pub use app_state::*;
pub use auth_state::*;
pub use reactivity::*;
pub use records_state::*;
pub use status_state::*;
