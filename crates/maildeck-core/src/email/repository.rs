//! Email repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use super::model::{Email, EmailId, EmailPatch, NewEmail};
use crate::Result;
use crate::store::{decode_timestamp, encode_timestamp};
use crate::user::UserId;

/// Repository for email records.
#[derive(Debug, Clone)]
pub struct EmailRepository {
    pool: SqlitePool,
}

const SELECT_FIELDS: &str = r"
    SELECT id, user_id, sender, sender_email, recipients, subject,
           body, preview, timestamp, is_read, labels, thread_id
    FROM emails
";

impl EmailRepository {
    /// Create a repository over the given pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get an email by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row is
    /// malformed.
    pub async fn get(&self, id: EmailId) -> Result<Option<Email>> {
        let row = sqlx::query(&format!("{SELECT_FIELDS} WHERE id = ?"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_email(&r)).transpose()
    }

    /// List a user's emails, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row is
    /// malformed.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Email>> {
        let rows = sqlx::query(&format!(
            "{SELECT_FIELDS} WHERE user_id = ? ORDER BY timestamp DESC, id DESC"
        ))
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_email).collect()
    }

    /// The emails of one conversation, oldest first.
    ///
    /// Ties on timestamp keep insertion order (ascending id). An unknown or
    /// empty thread identifier yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row is
    /// malformed.
    pub async fn get_thread(&self, thread_id: &str) -> Result<Vec<Email>> {
        if thread_id.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query(&format!(
            "{SELECT_FIELDS} WHERE thread_id = ? ORDER BY timestamp ASC, id ASC"
        ))
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_email).collect()
    }

    /// Create an email, assigning the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(&self, new: &NewEmail) -> Result<Email> {
        let result = sqlx::query(
            r"
            INSERT INTO emails (user_id, sender, sender_email, recipients,
                                subject, body, preview, timestamp, is_read,
                                labels, thread_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(new.user_id.0)
        .bind(&new.sender)
        .bind(&new.sender_email)
        .bind(serde_json::to_string(&new.recipients)?)
        .bind(&new.subject)
        .bind(&new.body)
        .bind(&new.preview)
        .bind(encode_timestamp(&new.timestamp))
        .bind(new.is_read)
        .bind(serde_json::to_string(&new.labels)?)
        .bind(&new.thread_id)
        .execute(&self.pool)
        .await?;

        Ok(Email {
            id: EmailId::new(result.last_insert_rowid()),
            user_id: new.user_id,
            sender: new.sender.clone(),
            sender_email: new.sender_email.clone(),
            recipients: new.recipients.clone(),
            subject: new.subject.clone(),
            body: new.body.clone(),
            preview: new.preview.clone(),
            timestamp: new.timestamp,
            is_read: new.is_read,
            labels: new.labels.clone(),
            thread_id: new.thread_id.clone(),
        })
    }

    /// Apply a partial update, returning the updated email.
    ///
    /// Returns `None` when the id does not exist. Fields absent from the
    /// patch are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update(&self, id: EmailId, patch: &EmailPatch) -> Result<Option<Email>> {
        let labels = patch
            .labels
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        sqlx::query(
            r"
            UPDATE emails
            SET is_read = COALESCE(?, is_read),
                labels = COALESCE(?, labels)
            WHERE id = ?
            ",
        )
        .bind(patch.is_read)
        .bind(labels)
        .bind(id.0)
        .execute(&self.pool)
        .await?;

        self.get(id).await
    }

    /// Mark an email read, returning the updated record.
    ///
    /// Idempotent; returns `None` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn mark_read(&self, id: EmailId) -> Result<Option<Email>> {
        self.update(id, &EmailPatch::read()).await
    }

    /// Delete an email, reporting whether it existed.
    ///
    /// Unused by the demo UI flow, but part of the store contract.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete(&self, id: EmailId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM emails WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Convert a database row to an `Email`.
fn row_to_email(row: &SqliteRow) -> Result<Email> {
    Ok(Email {
        id: EmailId::new(row.get("id")),
        user_id: UserId::new(row.get("user_id")),
        sender: row.get("sender"),
        sender_email: row.get("sender_email"),
        recipients: serde_json::from_str(row.get("recipients"))?,
        subject: row.get("subject"),
        body: row.get("body"),
        preview: row.get("preview"),
        timestamp: decode_timestamp(row.get("timestamp"))?,
        is_read: row.get("is_read"),
        labels: serde_json::from_str(row.get("labels"))?,
        thread_id: row.get("thread_id"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Store;
    use chrono::{Duration, Utc};

    fn new_email(subject: &str, thread_id: Option<&str>, age_hours: i64) -> NewEmail {
        NewEmail {
            user_id: UserId::new(1),
            sender: "Jane Smith".into(),
            sender_email: "jane.smith@example.com".into(),
            recipients: vec!["demo@example.com".into()],
            subject: subject.into(),
            body: format!("Body of {subject}"),
            preview: format!("Preview of {subject}"),
            timestamp: Utc::now() - Duration::hours(age_hours),
            is_read: false,
            labels: vec!["Work".into()],
            thread_id: thread_id.map(Into::into),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = Store::in_memory().await.unwrap();
        let emails = store.emails();

        let first = emails.create(&new_email("One", None, 2)).await.unwrap();
        let second = emails.create(&new_email("Two", None, 1)).await.unwrap();

        assert_eq!(first.id, EmailId::new(1));
        assert_eq!(second.id, EmailId::new(2));
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_delete() {
        let store = Store::in_memory().await.unwrap();
        let emails = store.emails();

        let first = emails.create(&new_email("One", None, 2)).await.unwrap();
        assert!(emails.delete(first.id).await.unwrap());

        let second = emails.create(&new_email("Two", None, 1)).await.unwrap();
        assert!(second.id.0 > first.id.0);
    }

    #[tokio::test]
    async fn test_round_trips_list_fields() {
        let store = Store::in_memory().await.unwrap();
        let emails = store.emails();

        let mut new = new_email("Hello", Some("thread-a"), 1);
        new.recipients = vec!["a@example.com".into(), "b@example.com".into()];
        new.labels = vec!["Work".into(), "Important".into()];

        let created = emails.create(&new).await.unwrap();
        let fetched = emails.get(created.id).await.unwrap().unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_for_user_is_newest_first() {
        let store = Store::in_memory().await.unwrap();
        let emails = store.emails();

        emails.create(&new_email("Oldest", None, 48)).await.unwrap();
        emails.create(&new_email("Newest", None, 1)).await.unwrap();
        emails.create(&new_email("Middle", None, 24)).await.unwrap();

        let listed = emails.list_for_user(UserId::new(1)).await.unwrap();
        let subjects: Vec<&str> = listed.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, ["Newest", "Middle", "Oldest"]);
    }

    #[tokio::test]
    async fn test_thread_is_oldest_first_with_stable_ties() {
        let store = Store::in_memory().await.unwrap();
        let emails = store.emails();

        let shared = Utc::now() - Duration::hours(3);
        let mut a = new_email("First at tie", Some("thread-a"), 0);
        a.timestamp = shared;
        let mut b = new_email("Second at tie", Some("thread-a"), 0);
        b.timestamp = shared;
        let mut earlier = new_email("Earlier", Some("thread-a"), 0);
        earlier.timestamp = shared - Duration::hours(1);

        emails.create(&a).await.unwrap();
        emails.create(&b).await.unwrap();
        emails.create(&earlier).await.unwrap();
        emails
            .create(&new_email("Other thread", Some("thread-b"), 1))
            .await
            .unwrap();

        let thread = emails.get_thread("thread-a").await.unwrap();
        let subjects: Vec<&str> = thread.iter().map(|e| e.subject.as_str()).collect();
        assert_eq!(subjects, ["Earlier", "First at tie", "Second at tie"]);

        // Same store state, same result.
        let again = emails.get_thread("thread-a").await.unwrap();
        assert_eq!(thread, again);
    }

    #[tokio::test]
    async fn test_unknown_thread_is_empty_not_error() {
        let store = Store::in_memory().await.unwrap();
        assert!(store.emails().get_thread("does-not-exist").await.unwrap().is_empty());
        assert!(store.emails().get_thread("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mark_read_is_idempotent() {
        let store = Store::in_memory().await.unwrap();
        let emails = store.emails();

        let created = emails.create(&new_email("Unread", None, 1)).await.unwrap();
        assert!(!created.is_read);

        let first = emails.mark_read(created.id).await.unwrap().unwrap();
        let second = emails.mark_read(created.id).await.unwrap().unwrap();
        assert!(first.is_read);
        assert!(second.is_read);
    }

    #[tokio::test]
    async fn test_patch_leaves_absent_fields_untouched() {
        let store = Store::in_memory().await.unwrap();
        let emails = store.emails();

        let created = emails.create(&new_email("Patch me", None, 1)).await.unwrap();
        let updated = emails
            .update(created.id, &EmailPatch::read())
            .await
            .unwrap()
            .unwrap();

        assert!(updated.is_read);
        assert_eq!(updated.labels, created.labels);
        assert_eq!(updated.subject, created.subject);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store = Store::in_memory().await.unwrap();
        let missing = store
            .emails()
            .update(EmailId::new(99), &EmailPatch::read())
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
