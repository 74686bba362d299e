//! User entity model and insert input.

use sqlx::FromRow;
use moodlens_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash; only `start_session` copies the id and
/// username out of it.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Input for creating a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}
