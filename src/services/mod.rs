pub mod database;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::StoreError;
use crate::models::user::{User, UserPayload};

pub use database::PgUserStore;
pub use memory::MemoryUserStore;

/// Persistence for the `users` resource.
///
/// Lookups that miss return `Ok(None)` / `Ok(false)`; `Err` is reserved for
/// the store itself failing.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError>;

    async fn create_user(&self, payload: UserPayload) -> Result<User, StoreError>;

    /// Overwrites name and email, returning the row as stored afterwards.
    async fn update_user(&self, id: i32, payload: UserPayload)
        -> Result<Option<User>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete_user(&self, id: i32) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;

    async fn close(&self) {}
}

/// Open the store named by `DATABASE_URL` and make sure the schema exists.
pub async fn connect(config: &Config) -> Result<Arc<dyn UserStore>, StoreError> {
    if config.uses_memory_store() {
        log::warn!("Using in-memory user store, data is lost on shutdown");
        return Ok(Arc::new(MemoryUserStore::new()));
    }

    let store = PgUserStore::connect(&config.database_url, config.max_connections).await?;
    Ok(Arc::new(store))
}
