pub mod form;
pub mod record;
pub mod status;

pub use form::{Credentials, DraftForm};
pub use record::{Record, RecordPayload, RollNumber};
pub use status::{StatusKind, StatusMessage};
