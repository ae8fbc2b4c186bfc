/// User record lookup
///
/// Handlers only ever read users by email. The store is injected as
/// `web::Data<dyn UserStore>` so tests can swap Postgres for memory.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::AppError;

/// A registered user as seen by the auth handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub email: String,
    /// bcrypt hash of the user's password
    pub password_hash: String,
    pub role: String,
}

impl UserRecord {
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            role: role.into(),
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by unique email. `Ok(None)` when no record exists.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;
}

/// Postgres-backed store reading the `users` table
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let row = sqlx::query_as::<_, (String, String, String)>(
            "SELECT email, password_hash, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(email, password_hash, role)| UserRecord {
            email,
            password_hash,
            role,
        }))
    }
}

/// In-process store, keyed by email
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record for `user.email`
    pub fn insert(&self, user: UserRecord) -> Result<(), AppError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| AppError::Internal(format!("User store lock poisoned: {}", e)))?;
        users.insert(user.email.clone(), user);
        Ok(())
    }

    pub fn remove(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| AppError::Internal(format!("User store lock poisoned: {}", e)))?;
        Ok(users.remove(email))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self
            .users
            .read()
            .map_err(|e| AppError::Internal(format!("User store lock poisoned: {}", e)))?;
        Ok(users.get(email).cloned())
    }
}
