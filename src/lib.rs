pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod notifications;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};
