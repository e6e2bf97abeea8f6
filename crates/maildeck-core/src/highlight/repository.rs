//! Highlight repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use super::model::{Highlight, HighlightId, HighlightPatch, NewHighlight};
use crate::Result;
use crate::document::DocumentId;

/// Repository for highlight records.
#[derive(Debug, Clone)]
pub struct HighlightRepository {
    pool: SqlitePool,
}

const SELECT_FIELDS: &str = r"
    SELECT id, document_id, title, content, page, priority, category
    FROM highlights
";

impl HighlightRepository {
    /// Create a repository over the given pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a highlight by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, id: HighlightId) -> Result<Option<Highlight>> {
        let row = sqlx::query(&format!("{SELECT_FIELDS} WHERE id = ?"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| row_to_highlight(&r)))
    }

    /// List a document's highlights in insertion order.
    ///
    /// An unknown document id yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_document(&self, document_id: DocumentId) -> Result<Vec<Highlight>> {
        let rows = sqlx::query(&format!(
            "{SELECT_FIELDS} WHERE document_id = ? ORDER BY id ASC"
        ))
        .bind(document_id.0)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(row_to_highlight).collect())
    }

    /// Create a highlight, assigning the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(&self, new: &NewHighlight) -> Result<Highlight> {
        let result = sqlx::query(
            r"
            INSERT INTO highlights (document_id, title, content, page, priority, category)
            VALUES (?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(new.document_id.0)
        .bind(&new.title)
        .bind(&new.content)
        .bind(new.page)
        .bind(&new.priority)
        .bind(&new.category)
        .execute(&self.pool)
        .await?;

        Ok(Highlight {
            id: HighlightId::new(result.last_insert_rowid()),
            document_id: new.document_id,
            title: new.title.clone(),
            content: new.content.clone(),
            page: new.page,
            priority: new.priority.clone(),
            category: new.category.clone(),
        })
    }

    /// Apply a partial update, returning the updated highlight.
    ///
    /// Returns `None` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn update(
        &self,
        id: HighlightId,
        patch: &HighlightPatch,
    ) -> Result<Option<Highlight>> {
        sqlx::query(
            r"
            UPDATE highlights
            SET title = COALESCE(?, title),
                content = COALESCE(?, content),
                priority = COALESCE(?, priority),
                category = COALESCE(?, category)
            WHERE id = ?
            ",
        )
        .bind(&patch.title)
        .bind(&patch.content)
        .bind(&patch.priority)
        .bind(&patch.category)
        .bind(id.0)
        .execute(&self.pool)
        .await?;

        self.get(id).await
    }

    /// Delete a highlight, reporting whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete(&self, id: HighlightId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM highlights WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Convert a database row to a `Highlight`.
fn row_to_highlight(row: &SqliteRow) -> Highlight {
    Highlight {
        id: HighlightId::new(row.get("id")),
        document_id: DocumentId::new(row.get("document_id")),
        title: row.get("title"),
        content: row.get("content"),
        page: row.get("page"),
        priority: row.get("priority"),
        category: row.get("category"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Store;

    fn new_highlight(title: &str, page: i64) -> NewHighlight {
        NewHighlight {
            document_id: DocumentId::new(1),
            title: title.into(),
            content: format!("Excerpt for {title}"),
            page: Some(page),
            priority: Some("High Priority".into()),
            category: Some("Decision".into()),
        }
    }

    #[tokio::test]
    async fn test_list_for_document_keeps_insertion_order() {
        let store = Store::in_memory().await.unwrap();
        let highlights = store.highlights();

        highlights.create(&new_highlight("First", 3)).await.unwrap();
        highlights.create(&new_highlight("Second", 1)).await.unwrap();
        highlights.create(&new_highlight("Third", 2)).await.unwrap();

        let listed = highlights.list_for_document(DocumentId::new(1)).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_unknown_document_lists_empty() {
        let store = Store::in_memory().await.unwrap();
        let listed = store
            .highlights()
            .list_for_document(DocumentId::new(42))
            .await
            .unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_patch_leaves_absent_fields_untouched() {
        let store = Store::in_memory().await.unwrap();
        let highlights = store.highlights();

        let created = highlights.create(&new_highlight("Key point", 1)).await.unwrap();
        let updated = highlights
            .update(
                created.id,
                &HighlightPatch {
                    priority: Some("Medium Priority".into()),
                    ..HighlightPatch::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.priority.as_deref(), Some("Medium Priority"));
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.page, created.page);
    }
}
