//! Demo entity store over an in-memory `SQLite` pool.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::document::DocumentRepository;
use crate::email::EmailRepository;
use crate::highlight::HighlightRepository;
use crate::reply::{ReplyRepository, ReplyService};
use crate::user::UserRepository;
use crate::{Result, seed};

/// The demo entity store.
///
/// Owns a single-connection in-memory `SQLite` pool shared by all entity
/// repositories. Nothing outlives the process: the backing database lives in
/// memory and is created fresh per store. The single connection also
/// serializes identifier assignment, so interleaved requests cannot observe
/// duplicate ids.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Create an empty in-memory store.
    ///
    /// Each call yields an isolated database, so tests can construct
    /// independent stores per case.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation
    /// fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.initialize().await?;
        Ok(store)
    }

    /// Create an in-memory store populated with the canned demo data set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection or seeding fails.
    pub async fn seeded() -> Result<Self> {
        let store = Self::in_memory().await?;
        seed::populate(&store).await?;
        Ok(store)
    }

    /// Initialize database schema.
    async fn initialize(&self) -> Result<()> {
        // AUTOINCREMENT keeps identifiers monotonic and never reused, even
        // after a row is deleted.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                email TEXT NOT NULL,
                avatar TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS emails (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                sender TEXT NOT NULL,
                sender_email TEXT NOT NULL,
                recipients TEXT NOT NULL DEFAULT '[]',
                subject TEXT NOT NULL,
                body TEXT NOT NULL,
                preview TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                is_read INTEGER NOT NULL DEFAULT 0,
                labels TEXT NOT NULL DEFAULT '[]',
                thread_id TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Index for thread lookups
        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_emails_thread_id
            ON emails(thread_id) WHERE thread_id IS NOT NULL
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                type TEXT NOT NULL,
                description TEXT,
                date TEXT NOT NULL,
                content TEXT,
                tags TEXT NOT NULL DEFAULT '[]'
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS highlights (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                document_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                page INTEGER,
                priority TEXT,
                category TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // UNIQUE(email_id) enforces the at-most-one-reply-per-email
        // invariant even when duplicate ensure-reply calls interleave.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS replies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email_id INTEGER NOT NULL UNIQUE,
                content TEXT NOT NULL,
                subject TEXT NOT NULL,
                tone TEXT,
                length TEXT,
                is_draft INTEGER NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Repository for user records.
    #[must_use]
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    /// Repository for email records.
    #[must_use]
    pub fn emails(&self) -> EmailRepository {
        EmailRepository::new(self.pool.clone())
    }

    /// Repository for document records.
    #[must_use]
    pub fn documents(&self) -> DocumentRepository {
        DocumentRepository::new(self.pool.clone())
    }

    /// Repository for highlight records.
    #[must_use]
    pub fn highlights(&self) -> HighlightRepository {
        HighlightRepository::new(self.pool.clone())
    }

    /// Repository for reply records.
    #[must_use]
    pub fn replies(&self) -> ReplyRepository {
        ReplyRepository::new(self.pool.clone())
    }

    /// Reply lifecycle service over this store.
    #[must_use]
    pub fn reply_service(&self) -> ReplyService {
        ReplyService::new(self.emails(), self.replies())
    }
}

/// Encode a timestamp for storage.
///
/// Fixed-width RFC 3339 so that lexicographic `ORDER BY` on the column is
/// chronological.
pub(crate) fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a stored timestamp.
pub(crate) fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}
