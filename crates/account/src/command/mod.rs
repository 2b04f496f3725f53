mod signin;
mod signup;

pub use signin::*;
pub use signup::*;

use coursehub_shared::account::Role;
use sqlx::SqlitePool;

use crate::token::TokenIssuer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub name: Option<String>,
    pub role: Role,
}

/// Signup and signin against one SQLite pool, with tokens minted by `issuer`.
#[derive(Clone)]
pub struct Command {
    pub pool: SqlitePool,
    pub issuer: TokenIssuer,
}

impl Command {
    pub fn new(pool: SqlitePool, issuer: TokenIssuer) -> Self {
        Self { pool, issuer }
    }

    pub async fn find(
        &self,
        role: Role,
        username: &str,
    ) -> coursehub_shared::Result<Option<Account>> {
        let row = crate::repository::find_by_username(&self.pool, role, username).await?;

        Ok(row.map(|row| Account {
            username: row.username,
            name: row.name,
            role,
        }))
    }
}
