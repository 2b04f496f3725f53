pub mod account;
pub mod migrate;
pub mod server;
