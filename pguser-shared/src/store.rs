//! Record accessor seam
//!
//! The command dispatcher talks to a `UserStore` rather than to a pool
//! directly. `PgUserStore` is the production implementation; tests can
//! substitute an in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use pguser_shared::db::pool::{create_pool, DatabaseConfig};
//! use pguser_shared::store::{PgUserStore, UserStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PgUserStore::new(create_pool(DatabaseConfig::default())?);
//!
//! store.create("Alice", "Smith").await?;
//! let users = store.list().await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::user::{CreateUser, User};

/// Operations the command dispatcher needs from the store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users in store order
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// First user whose first name matches exactly
    async fn find_by_first_name(&self, first_name: &str) -> StoreResult<User>;

    /// Inserts a user with the given names
    async fn create(&self, first_name: &str, last_name: &str) -> StoreResult<()>;
}

/// `UserStore` backed by a PostgreSQL pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Consumes the store, handing back the pool so it can be closed
    pub fn into_pool(self) -> PgPool {
        self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> StoreResult<Vec<User>> {
        User::list(&self.pool).await
    }

    async fn find_by_first_name(&self, first_name: &str) -> StoreResult<User> {
        User::find_by_first_name(&self.pool, first_name).await
    }

    async fn create(&self, first_name: &str, last_name: &str) -> StoreResult<()> {
        User::create(&self.pool, CreateUser::new(first_name, last_name)).await
    }
}
