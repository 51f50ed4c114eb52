use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use diary_types::TIMESTAMP_FORMAT;
use diary_types::models::{DiaryEntry, Log};

use crate::{DiaryStore, Result, StoreError};

impl DiaryStore {
    /// Append a log to the user's entry for `date`, creating the entry on first use.
    pub async fn add_log(
        &self,
        secret_code: &str,
        date: NaiveDate,
        title: String,
        content: String,
        created_at: NaiveDateTime,
    ) -> Result<Log> {
        let ids = &self.ids;
        self.with_user(secret_code, move |user| {
            let entry = user
                .diary_entries
                .entry(date)
                .or_insert_with(|| DiaryEntry::new(ids.next_id(), date));

            let log = Log {
                id: ids.next_id(),
                title,
                content,
                created_at: created_at.format(TIMESTAMP_FORMAT).to_string(),
            };
            entry.logs.push(log.clone());

            debug!("Added log {} to entry {} ({})", log.id, entry.id, date);
            Ok(log)
        })
        .await
    }

    /// Replace the log with `log.id` in the entry for `date`. Nothing is re-stamped.
    pub async fn update_log(&self, secret_code: &str, date: NaiveDate, log: Log) -> Result<()> {
        self.with_user(secret_code, move |user| {
            let entry = user.entry_mut(date).ok_or(StoreError::LogNotFound)?;
            let pos = entry.log_position(&log.id).ok_or(StoreError::LogNotFound)?;

            debug!("Updated log {} in entry {} ({})", log.id, entry.id, date);
            entry.logs[pos] = log;
            Ok(())
        })
        .await
    }

    /// Remove a log from the entry for `date`, keeping the others in order.
    pub async fn delete_log(&self, secret_code: &str, date: NaiveDate, log_id: &str) -> Result<Log> {
        self.with_user(secret_code, |user| {
            let entry = user.entry_mut(date).ok_or(StoreError::LogNotFound)?;
            let pos = entry.log_position(log_id).ok_or(StoreError::LogNotFound)?;

            let removed = entry.logs.remove(pos);
            debug!("Deleted log {} from entry {} ({})", removed.id, entry.id, date);
            Ok(removed)
        })
        .await
    }

    /// Logs filed under `date`; empty when the user has no entry for that day.
    pub async fn logs_on(&self, secret_code: &str, date: Option<NaiveDate>) -> Result<Vec<Log>> {
        self.with_user(secret_code, |user| {
            Ok(date
                .and_then(|d| user.entry(d))
                .map(|entry| entry.logs.clone())
                .unwrap_or_default())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn at(d: u32) -> NaiveDateTime {
        day(d).and_hms_opt(8, 30, 0).unwrap()
    }

    async fn store_with_user() -> (DiaryStore, String) {
        let store = DiaryStore::new();
        let user = store
            .register("A".into(), "a@example.com".into(), "2000-01-01".into())
            .await
            .unwrap();
        (store, user.secret_code)
    }

    async fn add(store: &DiaryStore, code: &str, d: u32, title: &str) -> Log {
        store
            .add_log(code, day(d), title.into(), "c".into(), at(d))
            .await
            .unwrap()
    }

    fn titles(logs: &[Log]) -> Vec<&str> {
        logs.iter().map(|l| l.title.as_str()).collect()
    }

    #[tokio::test]
    async fn added_log_is_shown_only_on_its_date() {
        let (store, code) = store_with_user().await;
        let log = add(&store, &code, 3, "t").await;

        assert_eq!(log.created_at, "2024-06-03 08:30:00");
        assert_eq!(store.logs_on(&code, Some(day(3))).await.unwrap(), vec![log]);
        assert!(store.logs_on(&code, Some(day(4))).await.unwrap().is_empty());
        assert!(store.logs_on(&code, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn one_entry_per_date() {
        let (store, code) = store_with_user().await;
        add(&store, &code, 3, "a").await;
        add(&store, &code, 3, "b").await;
        add(&store, &code, 5, "c").await;

        let user = store.get_user(&code).await.unwrap();
        assert_eq!(user.diary_entries.len(), 2);
        assert_eq!(titles(&user.entry(day(3)).unwrap().logs), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let (store, code) = store_with_user().await;
        add(&store, &code, 3, "a").await;
        let mut b = add(&store, &code, 3, "b").await;
        add(&store, &code, 3, "c").await;

        b.title = "B".into();
        b.content = "new".into();
        b.created_at = "caller value".into();
        store.update_log(&code, day(3), b.clone()).await.unwrap();

        let logs = store.logs_on(&code, Some(day(3))).await.unwrap();
        assert_eq!(titles(&logs), vec!["a", "B", "c"]);
        assert_eq!(logs[1], b);
    }

    #[tokio::test]
    async fn update_unknown_log_leaves_store_unchanged() {
        let (store, code) = store_with_user().await;
        add(&store, &code, 3, "a").await;
        let before = store.get_user(&code).await.unwrap();

        let ghost = Log {
            id: "nope".into(),
            title: "x".into(),
            ..Log::default()
        };
        let err = store.update_log(&code, day(3), ghost.clone()).await.unwrap_err();
        assert_eq!(err, StoreError::LogNotFound);

        // no entry for that date at all
        let err = store.update_log(&code, day(9), ghost).await.unwrap_err();
        assert_eq!(err, StoreError::LogNotFound);

        assert_eq!(store.get_user(&code).await.unwrap(), before);
    }

    #[tokio::test]
    async fn update_only_targets_the_given_date() {
        let (store, code) = store_with_user().await;
        let mut log = add(&store, &code, 3, "a").await;
        log.title = "moved?".into();

        let err = store.update_log(&code, day(4), log).await.unwrap_err();
        assert_eq!(err, StoreError::LogNotFound);
        assert_eq!(titles(&store.logs_on(&code, Some(day(3))).await.unwrap()), vec!["a"]);
    }

    #[tokio::test]
    async fn delete_preserves_order_and_is_not_repeatable() {
        let (store, code) = store_with_user().await;
        add(&store, &code, 3, "a").await;
        let b = add(&store, &code, 3, "b").await;
        add(&store, &code, 3, "c").await;

        let removed = store.delete_log(&code, day(3), &b.id).await.unwrap();
        assert_eq!(removed, b);
        assert_eq!(titles(&store.logs_on(&code, Some(day(3))).await.unwrap()), vec!["a", "c"]);

        let err = store.delete_log(&code, day(3), &b.id).await.unwrap_err();
        assert_eq!(err, StoreError::LogNotFound);
    }

    #[tokio::test]
    async fn log_operations_require_known_user() {
        let (store, _) = store_with_user().await;

        let err = store
            .add_log("missing", day(3), "t".into(), "c".into(), at(3))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::UserNotFound);
        assert_eq!(
            store.logs_on("missing", Some(day(3))).await.unwrap_err(),
            StoreError::UserNotFound
        );
        assert_eq!(
            store.delete_log("missing", day(3), "1").await.unwrap_err(),
            StoreError::UserNotFound
        );
    }

    #[tokio::test]
    async fn month_query_excludes_other_months() {
        let (store, code) = store_with_user().await;
        add(&store, &code, 3, "june").await;
        store
            .add_log(
                &code,
                NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
                "may".into(),
                "c".into(),
                at(3),
            )
            .await
            .unwrap();
        store
            .add_log(
                &code,
                NaiveDate::from_ymd_opt(2023, 6, 10).unwrap(),
                "last year".into(),
                "c".into(),
                at(3),
            )
            .await
            .unwrap();

        let june = store.entries_in_month(&code, 2024, 6).await.unwrap();
        assert_eq!(june.len(), 1);
        assert_eq!(titles(&june[0].logs), vec!["june"]);
    }

    #[tokio::test]
    async fn concurrent_adds_keep_every_log() {
        let (store, code) = store_with_user().await;
        let store = Arc::new(store);

        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                let code = code.clone();
                tokio::spawn(async move {
                    store
                        .add_log(&code, day(3), format!("log {i}"), "c".into(), at(3))
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let user = store.get_user(&code).await.unwrap();
        assert_eq!(user.diary_entries.len(), 1);

        let logs = &user.entry(day(3)).unwrap().logs;
        assert_eq!(logs.len(), 32);
        let mut ids: Vec<&str> = logs.iter().map(|l| l.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
    }
}
