//! JSON bodies exchanged on the HTTP routes.
//!
//! Request fields that are absent or `null` decode to their defaults (empty
//! strings), so only malformed JSON or mistyped fields are rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Log;

// -- Accounts --

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub email_address: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub date_of_birth: String,
}

/// Body of `/login` and `/showDiaryOfMonth`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretCodeRequest {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub secret_code: String,
}

// -- Logs --

/// The caller-supplied part of a new log. Server-stamped fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewLog {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddEntryRequest {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub secret_code: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub log: NewLog,
    /// Day to file the log under; the server's today when absent.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub secret_code: String,
    /// Replaces the stored log with the same id, verbatim.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub log: Log,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteEntryRequest {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub secret_code: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub id: String,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowEntryRequest {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub secret_code: String,
    /// Matched against stored dates; anything unparsable matches nothing.
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShowEntryResponse {
    pub logs: Vec<Log>,
}

// -- Ops --

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub users: usize,
}
