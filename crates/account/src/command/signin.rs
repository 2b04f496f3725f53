use coursehub_shared::{Error, account::Role};
use serde::Deserialize;

use crate::{repository, token::Claims};

#[derive(Deserialize, Default)]
pub struct SigninInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl super::Command {
    /// Returns a bearer token for `{username, role}`.
    pub async fn signin(
        &self,
        role: Role,
        input: SigninInput,
    ) -> coursehub_shared::Result<String> {
        let (Some(username), Some(password)) = (input.username, input.password) else {
            return Err(Error::InvalidCredentials);
        };

        let Some(account) =
            repository::find_by_credentials(&self.pool, role, &username, &password).await?
        else {
            return Err(Error::InvalidCredentials);
        };

        self.issuer.issue(Claims::new(account.username, role))
    }
}
