use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use coursehub_shared::{Error, account::Role};
use serde::Deserialize;
use validator::Validate;

use super::Account;
use crate::repository;

#[derive(Validate, Deserialize, Default)]
pub struct SignupInput {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    pub name: Option<String>,
}

impl super::Command {
    /// Empty credentials are rejected before the store is consulted, and an
    /// existing username before any write.
    pub async fn signup(
        &self,
        role: Role,
        input: SignupInput,
    ) -> coursehub_shared::Result<Account> {
        input.validate()?;

        let (Some(username), Some(password)) = (input.username, input.password) else {
            return Err(Error::InvalidInput);
        };

        if repository::find_by_username(&self.pool, role, &username)
            .await?
            .is_some()
        {
            return Err(Error::AlreadyExists);
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)?
            .to_string();

        match repository::create(
            &self.pool,
            role,
            username.to_owned(),
            password_hash,
            input.name.to_owned(),
        )
        .await
        {
            // lost a race against a concurrent signup for the same name
            Err(Error::DuplicateKey) => return Err(Error::AlreadyExists),
            result => result?,
        };

        tracing::debug!(username = %username, role = %role, "account created");

        Ok(Account {
            username,
            name: input.name,
            role,
        })
    }
}
