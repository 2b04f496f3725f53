use clap::ValueEnum;
use coursehub::Config;
use coursehub_account::{SignupInput, TokenIssuer};
use coursehub_shared::{Error, account::Role as AccountRole};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Admin,
    User,
}

impl From<Role> for AccountRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => AccountRole::Admin,
            Role::User => AccountRole::User,
        }
    }
}

/// Bootstraps an account without going through HTTP; an existing username
/// is reported and left untouched.
pub async fn create(
    config: &Config,
    role: Role,
    username: String,
    password: String,
    name: Option<String>,
) -> anyhow::Result<()> {
    let role = AccountRole::from(role);
    let pool = coursehub::db::create_pool(&config.database.url, 1).await?;
    coursehub::db::migrate(&pool).await?;

    let command = coursehub_account::Command::new(
        pool.clone(),
        TokenIssuer::new(&config.jwt.secret, config.jwt.expiration_secs),
    );

    let result = command
        .signup(
            role,
            SignupInput {
                username: Some(username.to_owned()),
                password: Some(password),
                name,
            },
        )
        .await;

    pool.close().await;

    match result {
        Ok(_) => tracing::info!(role = %role, username = %username, "{}", role.created_message()),
        Err(Error::AlreadyExists) => {
            tracing::warn!(role = %role, username = %username, "{}", role.already_exists_message())
        }
        Err(e) => return Err(anyhow::anyhow!("failed to create {role} {username}: {e}")),
    }

    Ok(())
}
