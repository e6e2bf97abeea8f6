//! Document repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use super::model::{Document, DocumentId, DocumentPatch, NewDocument};
use crate::Result;
use crate::store::{decode_timestamp, encode_timestamp};
use crate::user::UserId;

/// Repository for document records.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: SqlitePool,
}

const SELECT_FIELDS: &str = r"
    SELECT id, user_id, name, type, description, date, content, tags
    FROM documents
";

impl DocumentRepository {
    /// Create a repository over the given pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a document by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row is
    /// malformed.
    pub async fn get(&self, id: DocumentId) -> Result<Option<Document>> {
        let row = sqlx::query(&format!("{SELECT_FIELDS} WHERE id = ?"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_document(&r)).transpose()
    }

    /// List a user's documents, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails or a stored row is
    /// malformed.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Document>> {
        let rows = sqlx::query(&format!(
            "{SELECT_FIELDS} WHERE user_id = ? ORDER BY date DESC, id DESC"
        ))
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_document).collect()
    }

    /// Create a document, assigning the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(&self, new: &NewDocument) -> Result<Document> {
        let result = sqlx::query(
            r"
            INSERT INTO documents (user_id, name, type, description, date, content, tags)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(new.user_id.0)
        .bind(&new.name)
        .bind(&new.kind)
        .bind(&new.description)
        .bind(encode_timestamp(&new.date))
        .bind(&new.content)
        .bind(serde_json::to_string(&new.tags)?)
        .execute(&self.pool)
        .await?;

        Ok(Document {
            id: DocumentId::new(result.last_insert_rowid()),
            user_id: new.user_id,
            name: new.name.clone(),
            kind: new.kind.clone(),
            description: new.description.clone(),
            date: new.date,
            content: new.content.clone(),
            tags: new.tags.clone(),
        })
    }

    /// Apply a partial update, returning the updated document.
    ///
    /// Returns `None` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update(&self, id: DocumentId, patch: &DocumentPatch) -> Result<Option<Document>> {
        let tags = patch.tags.as_ref().map(serde_json::to_string).transpose()?;

        sqlx::query(
            r"
            UPDATE documents
            SET name = COALESCE(?, name),
                description = COALESCE(?, description),
                tags = COALESCE(?, tags)
            WHERE id = ?
            ",
        )
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(tags)
        .bind(id.0)
        .execute(&self.pool)
        .await?;

        self.get(id).await
    }

    /// Delete a document, reporting whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete(&self, id: DocumentId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Convert a database row to a `Document`.
fn row_to_document(row: &SqliteRow) -> Result<Document> {
    Ok(Document {
        id: DocumentId::new(row.get("id")),
        user_id: UserId::new(row.get("user_id")),
        name: row.get("name"),
        kind: row.get("type"),
        description: row.get("description"),
        date: decode_timestamp(row.get("date"))?,
        content: row.get("content"),
        tags: serde_json::from_str(row.get("tags"))?,
    })
}
