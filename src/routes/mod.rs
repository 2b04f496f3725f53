use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};
use coursehub_account::{TokenIssuer, TokenVerifier};
use coursehub_shared::account::Role;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::Gate;
use crate::notifications::Badge;

mod account;
mod admin;
mod health;
mod user;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Config,
    pub pool: SqlitePool,
    pub account_command: coursehub_account::Command,
    pub course_command: coursehub_course::Command,
    pub verifier: TokenVerifier,
    pub badge: Arc<Badge>,
}

impl AppState {
    /// Issuer and verifier share `config.jwt.secret`.
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        let issuer = TokenIssuer::new(&config.jwt.secret, config.jwt.expiration_secs);
        let verifier = TokenVerifier::new(&config.jwt.secret);

        Self {
            account_command: coursehub_account::Command::new(pool.clone(), issuer),
            course_command: coursehub_course::Command(pool.clone()),
            verifier,
            badge: Arc::new(Badge::default()),
            pool,
            config,
        }
    }

    pub fn gate(&self, role: Role) -> Gate {
        Gate::new(role, self.config.gate.mode, self.verifier.clone())
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .nest("/admin", admin::router(&app_state))
        .nest("/user", user::router(&app_state))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
