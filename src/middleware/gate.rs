//! Bearer-token gate for the admin and user route groups

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use coursehub_account::TokenVerifier;
use coursehub_shared::{Error, account::Role};
use tracing::{debug, warn};

use crate::config::GateMode;
use crate::error::AppError;

/// Identity of the caller, inserted into request extensions once the gate
/// lets the request through
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Requester {
    pub username: String,
    pub role: Option<Role>,
}

/// State for the gate middleware
#[derive(Clone)]
pub struct Gate {
    pub role: Role,
    pub mode: GateMode,
    pub verifier: TokenVerifier,
}

impl Gate {
    pub fn new(role: Role, mode: GateMode, verifier: TokenVerifier) -> Self {
        Self {
            role,
            mode,
            verifier,
        }
    }

    /// Every header map ends in either a `Requester` or one of the credential
    /// errors; nothing here panics.
    pub fn authorize(&self, headers: &HeaderMap) -> coursehub_shared::Result<Requester> {
        let value = headers
            .get(AUTHORIZATION)
            .ok_or(Error::MissingCredential)?
            .to_str()
            .map_err(|_| Error::MalformedCredential)?;

        // "<scheme> <token>"; only the second word is read, the scheme is not checked
        let token = value
            .split_whitespace()
            .nth(1)
            .ok_or(Error::MalformedCredential)?;

        let claims = self.verifier.verify(token)?;

        if claims.username.is_empty() {
            return Err(Error::Malformed);
        }

        if self.mode == GateMode::Strict && claims.role != Some(self.role) {
            return Err(Error::Forbidden);
        }

        Ok(Requester {
            username: claims.username,
            role: claims.role,
        })
    }
}

/// Runs the downstream handler only for requests carrying an acceptable
/// bearer token
pub async fn gate_middleware(
    State(gate): State<Gate>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let requester = gate.authorize(request.headers()).map_err(|error| {
        warn!(
            role = %gate.role,
            path = %request.uri().path(),
            error = %error,
            "Gate denied request"
        );
        AppError::auth(gate.role)(error).into_response()
    })?;

    debug!(
        role = %gate.role,
        username = %requester.username,
        "Gate allowed request"
    );

    request.extensions_mut().insert(requester);

    Ok(next.run(request).await)
}
