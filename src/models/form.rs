use serde::{Deserialize, Serialize};

use crate::models::record::{Record, RecordPayload};

/// Login form contents; never persisted
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Editable copy of a record's mutable fields
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct DraftForm {
    pub name: String,
    pub email: String,
    pub branch: String,
}

impl DraftForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            branch: branch.into(),
        }
    }

    pub fn from_record(record: &Record) -> Self {
        Self::new(&record.name, &record.email, &record.branch)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.branch.is_empty()
    }

    /// Every field must be non-empty. Whitespace counts as content.
    pub fn to_payload(&self) -> Option<RecordPayload> {
        if self.name.is_empty() || self.email.is_empty() || self.branch.is_empty() {
            return None;
        }
        Some(RecordPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            branch: self.branch.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::RollNumber;

    #[test]
    fn payload_requires_all_three_fields() {
        assert!(DraftForm::new("", "a@x.com", "CSE").to_payload().is_none());
        assert!(DraftForm::new("Asha", "", "CSE").to_payload().is_none());
        assert!(DraftForm::new("Asha", "a@x.com", "").to_payload().is_none());
        assert!(DraftForm::default().to_payload().is_none());

        let payload = DraftForm::new("Asha", "a@x.com", "CSE").to_payload().expect("complete");
        assert_eq!(payload.branch, "CSE");
    }

    #[test]
    fn from_record_copies_mutable_fields() {
        let record = Record::new(RollNumber(9), "Asha", "asha@x.com", "CSE");
        let draft = DraftForm::from_record(&record);
        assert_eq!(draft, DraftForm::new("Asha", "asha@x.com", "CSE"));
        assert!(!draft.is_empty());
    }

    #[test]
    fn credentials_debug_hides_password() {
        let rendered = format!("{:?}", Credentials::new("admin", "hunter2"));
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
