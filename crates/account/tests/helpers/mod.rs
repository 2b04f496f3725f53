#![allow(dead_code)]

use std::{path::PathBuf, str::FromStr};

use coursehub_account::{Command, TokenIssuer, TokenVerifier};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestState {
    pub pool: SqlitePool,
    pub command: Command,
    pub verifier: TokenVerifier,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    coursehub_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(TestState {
        command: Command::new(pool.clone(), TokenIssuer::new(SECRET, None)),
        verifier: TokenVerifier::new(SECRET),
        pool,
    })
}

pub fn signup_input(
    username: &str,
    password: &str,
    name: Option<&str>,
) -> coursehub_account::SignupInput {
    coursehub_account::SignupInput {
        username: Some(username.to_owned()),
        password: Some(password.to_owned()),
        name: name.map(str::to_owned),
    }
}

pub fn signin_input(username: &str, password: &str) -> coursehub_account::SigninInput {
    coursehub_account::SigninInput {
        username: Some(username.to_owned()),
        password: Some(password.to_owned()),
    }
}
