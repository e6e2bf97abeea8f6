//! Reply repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use super::model::{NewReply, Reply, ReplyId, ReplyPatch};
use crate::Result;
use crate::email::EmailId;

/// Repository for reply records.
#[derive(Debug, Clone)]
pub struct ReplyRepository {
    pool: SqlitePool,
}

const SELECT_FIELDS: &str = r"
    SELECT id, email_id, content, subject, tone, length, is_draft
    FROM replies
";

impl ReplyRepository {
    /// Create a repository over the given pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the reply for an email, if one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_for_email(&self, email_id: EmailId) -> Result<Option<Reply>> {
        let row = sqlx::query(&format!("{SELECT_FIELDS} WHERE email_id = ?"))
            .bind(email_id.0)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| row_to_reply(&r)))
    }

    /// Create the reply for an email.
    ///
    /// The `email_id` column is unique, so a lost race against a duplicate
    /// create is resolved by returning the reply that won; the store never
    /// associates two replies with one email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(&self, new: &NewReply) -> Result<Reply> {
        sqlx::query(
            r"
            INSERT INTO replies (email_id, content, subject, tone, length, is_draft)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(email_id) DO NOTHING
            ",
        )
        .bind(new.email_id.0)
        .bind(&new.content)
        .bind(&new.subject)
        .bind(&new.tone)
        .bind(&new.length)
        .bind(new.is_draft)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(&format!("{SELECT_FIELDS} WHERE email_id = ?"))
            .bind(new.email_id.0)
            .fetch_one(&self.pool)
            .await?;

        Ok(row_to_reply(&row))
    }

    /// Apply a partial update, returning the updated reply.
    ///
    /// Returns `None` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update(&self, id: ReplyId, patch: &ReplyPatch) -> Result<Option<Reply>> {
        sqlx::query(
            r"
            UPDATE replies
            SET content = COALESCE(?, content),
                subject = COALESCE(?, subject),
                is_draft = COALESCE(?, is_draft)
            WHERE id = ?
            ",
        )
        .bind(&patch.content)
        .bind(&patch.subject)
        .bind(patch.is_draft)
        .bind(id.0)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(&format!("{SELECT_FIELDS} WHERE id = ?"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| row_to_reply(&r)))
    }
}

/// Convert a database row to a `Reply`.
fn row_to_reply(row: &SqliteRow) -> Reply {
    Reply {
        id: ReplyId::new(row.get("id")),
        email_id: EmailId::new(row.get("email_id")),
        content: row.get("content"),
        subject: row.get("subject"),
        tone: row.get("tone"),
        length: row.get("length"),
        is_draft: row.get("is_draft"),
    }
}
