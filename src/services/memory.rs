use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::user::{User, UserPayload};
use crate::services::UserStore;

#[derive(Default)]
struct MemoryTable {
    rows: Vec<User>,
    last_id: i32,
}

/// In-process store selected by `DATABASE_URL=memory://`.
///
/// Rows keep insertion order and ids are never reused, like a `SERIAL` column.
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<MemoryTable>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_table<T>(&self, f: impl FnOnce(&mut MemoryTable) -> T) -> Result<T, StoreError> {
        let mut table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut table))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.with_table(|table| table.rows.clone())
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        self.with_table(|table| table.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn create_user(&self, payload: UserPayload) -> Result<User, StoreError> {
        self.with_table(|table| {
            table.last_id += 1;
            let user = User::from_payload(table.last_id, payload);
            table.rows.push(user.clone());
            user
        })
    }

    async fn update_user(
        &self,
        id: i32,
        payload: UserPayload,
    ) -> Result<Option<User>, StoreError> {
        self.with_table(|table| {
            table.rows.iter_mut().find(|u| u.id == id).map(|user| {
                user.name = payload.name;
                user.email = payload.email;
                user.clone()
            })
        })
    }

    async fn delete_user(&self, id: i32) -> Result<bool, StoreError> {
        self.with_table(|table| {
            let before = table.rows.len();
            table.rows.retain(|u| u.id != id);
            table.rows.len() != before
        })
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.with_table(|_| ())
    }
}
