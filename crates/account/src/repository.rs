use argon2::{Argon2, PasswordHash, PasswordVerifier};
use coursehub_db::table::{Account, Admin, User};
use coursehub_shared::account::Role;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

#[derive(FromRow)]
pub struct AccountRow {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
}

pub(crate) async fn find_by_username(
    pool: &SqlitePool,
    role: Role,
    username: &str,
) -> coursehub_shared::Result<Option<AccountRow>> {
    let mut statement = Query::select()
        .columns([Account::Username, Account::Password, Account::Name])
        .and_where(Expr::col(Account::Username).eq(username))
        .limit(1)
        .to_owned();

    match role {
        Role::Admin => statement.from(Admin::Table),
        Role::User => statement.from(User::Table),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, AccountRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Absent when the username is unknown or the password does not match the
/// stored hash.
pub(crate) async fn find_by_credentials(
    pool: &SqlitePool,
    role: Role,
    username: &str,
    password: &str,
) -> coursehub_shared::Result<Option<AccountRow>> {
    let Some(row) = find_by_username(pool, role, username).await? else {
        return Ok(None);
    };

    let parsed_hash = PasswordHash::new(&row.password)?;
    if Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Ok(None);
    }

    Ok(Some(row))
}

/// Fails with `DuplicateKey` when the username is already taken.
pub(crate) async fn create(
    pool: &SqlitePool,
    role: Role,
    username: String,
    password_hash: String,
    name: Option<String>,
) -> coursehub_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let mut statement = Query::insert();

    match role {
        Role::Admin => statement.into_table(Admin::Table),
        Role::User => statement.into_table(User::Table),
    };

    statement
        .columns([
            Account::Username,
            Account::Password,
            Account::Name,
            Account::CreatedAt,
        ])
        .values_panic([
            username.into(),
            password_hash.into(),
            name.into(),
            now.into(),
        ]);

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
