use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single titled note inside a day's diary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Log {
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub content: String,
    #[serde(rename = "createAt", deserialize_with = "crate::de::null_as_default")]
    pub created_at: String,
}

/// All logs a user wrote on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "log")]
    pub logs: Vec<Log>,
}

impl DiaryEntry {
    pub fn new(id: String, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            logs: Vec::new(),
        }
    }

    pub fn log_position(&self, log_id: &str) -> Option<usize> {
        self.logs.iter().position(|log| log.id == log_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub secret_code: String,
    pub name: String,
    pub email_address: String,
    pub date_of_birth: String,
    /// At most one entry per date. Serialized as a date-ordered array.
    #[serde(with = "entries_by_date")]
    pub diary_entries: BTreeMap<NaiveDate, DiaryEntry>,
}

impl User {
    pub fn entry(&self, date: NaiveDate) -> Option<&DiaryEntry> {
        self.diary_entries.get(&date)
    }

    pub fn entry_mut(&mut self, date: NaiveDate) -> Option<&mut DiaryEntry> {
        self.diary_entries.get_mut(&date)
    }

    /// Entries dated within the given calendar month, oldest first.
    pub fn entries_in_month(&self, year: i32, month: u32) -> Vec<DiaryEntry> {
        self.diary_entries
            .values()
            .filter(|entry| entry.date.year() == year && entry.date.month() == month)
            .cloned()
            .collect()
    }
}

mod entries_by_date {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DiaryEntry;

    pub fn serialize<S>(
        entries: &BTreeMap<NaiveDate, DiaryEntry>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(entries.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<NaiveDate, DiaryEntry>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A repeated date keeps the last entry.
        let entries = Vec::<DiaryEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|entry| (entry.date, entry)).collect())
    }
}
