use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body accepted by create and update. An `id` sent by the client is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn from_payload(id: i32, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
        }
    }
}

/// Path ids arrive as strings; anything that is not an integer cannot name a row.
pub fn parse_user_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
