//! User model and database operations
//!
//! # Schema
//!
//! The table is expected to exist already:
//!
//! ```sql
//! CREATE TABLE users (
//!     first_name TEXT NOT NULL,
//!     last_name  TEXT NOT NULL
//! );
//! ```
//!
//! Every query names its columns, so additional columns (a surrogate key,
//! timestamps) and a different column order are tolerated.
//!
//! # Example
//!
//! ```no_run
//! use pguser_shared::models::user::{CreateUser, User};
//! use pguser_shared::db::pool::{create_pool, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(DatabaseConfig::default())?;
//!
//! User::create(&pool, CreateUser::new("Alice", "Smith")).await?;
//!
//! let alice = User::find_by_first_name(&pool, "Alice").await?;
//! println!("Hello, {} {}!", alice.first_name, alice.last_name);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// A user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
}

/// Input for creating a new user
///
/// Neither field is validated; empty strings are stored as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
}

impl CreateUser {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl User {
    /// Lists every user in store order
    ///
    /// No `ORDER BY` is applied, so rows come back in whatever order
    /// PostgreSQL yields them (normally insertion order).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the query fails or any row cannot be
    /// decoded; no partial result is returned.
    pub async fn list(pool: &PgPool) -> StoreResult<Vec<Self>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT first_name, last_name
            FROM users
            "#,
        )
        .fetch_all(pool)
        .await?;

        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Finds the first user with the given first name
    ///
    /// First names are not unique. When several rows match, whichever one
    /// the store returns first wins.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if no row matches
    /// - `StoreError::Database` on connection, query, or decode failure
    pub async fn find_by_first_name(pool: &PgPool, first_name: &str) -> StoreResult<Self> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT first_name, last_name
            FROM users
            WHERE first_name = $1
            LIMIT 1
            "#,
        )
        .bind(first_name)
        .fetch_optional(pool)
        .await?;

        debug!(first_name, found = user.is_some(), "Looked up user by first name");
        user.ok_or(StoreError::NotFound)
    }

    /// Inserts a new user
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the insert fails
    pub async fn create(pool: &PgPool, data: CreateUser) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name)
            VALUES ($1, $2)
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .execute(pool)
        .await?;

        debug!(first_name = %data.first_name, last_name = %data.last_name, "Created user");
        Ok(())
    }
}
