use coursehub_shared::{Error, account::Role};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_signin_token_decodes_to_account_username() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    for (role, username) in [(Role::Admin, "alice"), (Role::User, "bob")] {
        state
            .command
            .signup(role, helpers::signup_input(username, "p1", None))
            .await?;

        let token = state
            .command
            .signin(role, helpers::signin_input(username, "p1"))
            .await?;

        let claims = state.verifier.verify(&token)?;
        assert_eq!(claims.username, username);
        assert_eq!(claims.role, Some(role));
    }

    Ok(())
}

#[tokio::test]
async fn test_signin_with_wrong_password_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    state
        .command
        .signup(Role::Admin, helpers::signup_input("alice", "p1", None))
        .await?;

    let result = state
        .command
        .signin(Role::Admin, helpers::signin_input("alice", "p2"))
        .await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));

    let result = state
        .command
        .signin(Role::Admin, helpers::signin_input("nobody", "p1"))
        .await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));

    let result = state
        .command
        .signin(Role::Admin, coursehub_account::SigninInput::default())
        .await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));

    Ok(())
}

#[tokio::test]
async fn test_signin_looks_only_at_its_own_role() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    state
        .command
        .signup(Role::Admin, helpers::signup_input("alice", "p1", None))
        .await?;

    let result = state
        .command
        .signin(Role::User, helpers::signin_input("alice", "p1"))
        .await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));

    Ok(())
}
