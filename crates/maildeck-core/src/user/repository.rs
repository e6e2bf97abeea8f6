//! User repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqliteRow};

use super::model::{NewUser, User, UserId};
use crate::Result;

/// Repository for user records.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a repository over the given pool.
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, id: UserId) -> Result<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, username, password, email, avatar
            FROM users WHERE id = ?
            ",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| row_to_user(&r)))
    }

    /// Get a user by login name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, username, password, email, avatar
            FROM users WHERE username = ?
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| row_to_user(&r)))
    }

    /// Create a user, assigning the next sequential id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(&self, new: &NewUser) -> Result<User> {
        let result = sqlx::query(
            r"
            INSERT INTO users (username, password, email, avatar)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(&new.username)
        .bind(&new.password)
        .bind(&new.email)
        .bind(&new.avatar)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id: UserId::new(result.last_insert_rowid()),
            username: new.username.clone(),
            password: new.password.clone(),
            email: new.email.clone(),
            avatar: new.avatar.clone(),
        })
    }
}

/// Convert a database row to a `User`.
fn row_to_user(row: &SqliteRow) -> User {
    User {
        id: UserId::new(row.get("id")),
        username: row.get("username"),
        password: row.get("password"),
        email: row.get("email"),
        avatar: row.get("avatar"),
    }
}
