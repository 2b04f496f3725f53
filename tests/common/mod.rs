#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use coursehub::{
    AppState, Config,
    config::{
        DatabaseConfig, GateConfig, GateMode, JwtConfig, ObservabilityConfig, ServerConfig,
    },
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    // Keeps the database file alive for the duration of the test
    _dir: TempDir,
}

pub fn test_config(url: String, mode: GateMode) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
        },
        jwt: JwtConfig {
            secret: SECRET.to_string(),
            expiration_secs: None,
        },
        gate: GateConfig { mode },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn create_test_app(mode: GateMode) -> TestApp {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.child("coursehub.db").to_str().unwrap());

    let pool = coursehub::db::create_pool(&url, 5).await.unwrap();
    coursehub::db::migrate(&pool).await.unwrap();

    let router = coursehub::router(AppState::new(test_config(url, mode), pool.clone()));

    TestApp {
        router,
        pool,
        _dir: dir,
    }
}

impl TestApp {
    /// Sends one request and returns the status with the JSON body
    /// (`Value::Null` when the body is not JSON)
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);

        if let Some(authorization) = authorization {
            request = request.header("Authorization", authorization);
        }

        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// Signs up then signs in, returning a ready-to-use `Authorization` value
    pub async fn bearer(&self, role: &str, username: &str, password: &str) -> String {
        let credentials = serde_json::json!({
            "username": username,
            "password": password,
            "name": username,
        });

        let (status, _) = self
            .send("POST", &format!("/{role}/signup"), None, Some(credentials.clone()))
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = self
            .send("POST", &format!("/{role}/signin"), None, Some(credentials))
            .await;
        assert_eq!(status, StatusCode::OK);

        format!("Bearer {}", body["token"].as_str().unwrap())
    }
}
