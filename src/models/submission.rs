use chrono::{NaiveDateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Format of `submittedAt`: UTC, microsecond precision, no offset suffix.
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Inbound form body. Members may hold any JSON value; presence and
/// truthiness are enforced by validation, not by decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

/// A form whose required fields are all present and truthy.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub submission_id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(with = "submitted_at")]
    pub submitted_at: NaiveDateTime,
}

impl Submission {
    /// Stamp a validated form with a fresh id and the current UTC time.
    pub fn new(form: ValidatedForm) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            name: form.name,
            email: form.email,
            message: form.message,
            submitted_at: Utc::now().naive_utc().trunc_subsecs(6),
        }
    }

    pub fn submitted_at_iso(&self) -> String {
        self.submitted_at.format(SUBMITTED_AT_FORMAT).to_string()
    }
}

mod submitted_at {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::SUBMITTED_AT_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(SUBMITTED_AT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, SUBMITTED_AT_FORMAT).map_err(serde::de::Error::custom)
    }
}
