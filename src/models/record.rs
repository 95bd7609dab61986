use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identity key assigned by the remote store ("roll number")
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollNumber(pub i64);

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RollNumber {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Record {
    #[serde(rename = "roln")]
    pub id: RollNumber,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub branch: String,
}

impl Record {
    pub fn new(
        id: RollNumber,
        name: impl Into<String>,
        email: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            branch: branch.into(),
        }
    }

    /// Mutable fields only; the id never travels in a request body
    pub fn payload(&self) -> RecordPayload {
        RecordPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            branch: self.branch.clone(),
        }
    }

    pub fn find(records: &[Record], id: RollNumber) -> Option<&Record> {
        records.iter().find(|r| r.id == id)
    }

    pub fn ids_are_unique(records: &[Record]) -> bool {
        let mut seen = HashSet::with_capacity(records.len());
        records.iter().all(|r| seen.insert(r.id))
    }
}

/// Body of POST / and PUT /{id}
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct RecordPayload {
    pub name: String,
    pub email: String,
    pub branch: String,
}

// The backend entity has nullable columns
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_list_with_roln_key_and_nulls() {
        let json = r#"[
            {"roln": 1, "name": "Ravi", "email": "ravi@x.com", "branch": "MECH"},
            {"roln": 7, "name": null, "email": "n@x.com"}
        ]"#;
        let records: Vec<Record> = serde_json::from_str(json).expect("decode");
        assert_eq!(records[0], Record::new(RollNumber(1), "Ravi", "ravi@x.com", "MECH"));
        assert_eq!(records[1].id, RollNumber(7));
        assert_eq!(records[1].name, "");
        assert_eq!(records[1].branch, "");
    }

    #[test]
    fn payload_never_carries_the_id() {
        let record = Record::new(RollNumber(3), "Asha", "asha@x.com", "CSE");
        let body = serde_json::to_value(record.payload()).expect("encode");
        assert_eq!(
            body,
            serde_json::json!({"name": "Asha", "email": "asha@x.com", "branch": "CSE"})
        );
    }

    #[test]
    fn detects_duplicate_ids() {
        let a = Record::new(RollNumber(1), "A", "a@x.com", "CSE");
        let b = Record::new(RollNumber(2), "B", "b@x.com", "ECE");
        assert!(Record::ids_are_unique(&[a.clone(), b.clone()]));
        assert!(!Record::ids_are_unique(&[a.clone(), b, a]));
        assert!(Record::ids_are_unique(&[]));
    }
}
