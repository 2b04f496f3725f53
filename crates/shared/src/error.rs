#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input")]
    InvalidInput,

    #[error("account already exists")]
    AlreadyExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing credential")]
    MissingCredential,

    #[error("malformed credential")]
    MalformedCredential,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("malformed token")]
    Malformed,

    #[error("token expired")]
    Expired,

    #[error("duplicate key")]
    DuplicateKey,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for every way a presented credential can fail to authenticate.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            Error::MissingCredential
                | Error::MalformedCredential
                | Error::InvalidSignature
                | Error::Malformed
                | Error::Expired
        )
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(_: validator::ValidationErrors) -> Self {
        Self::InvalidInput
    }
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        match value {
            sqlx::Error::Database(ref e) if e.is_unique_violation() => Self::DuplicateKey,
            value => Self::Unknown(value.into()),
        }
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Unknown(anyhow::anyhow!(value))
    }
}
