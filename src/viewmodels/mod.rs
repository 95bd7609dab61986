pub mod records_viewmodel;
pub mod session_viewmodel;

pub use records_viewmodel::{RecordsViewModel, RemoveOutcome};
pub use session_viewmodel::SessionViewModel;
