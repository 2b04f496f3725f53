mod command;
pub(crate) mod repository;
pub mod token;

pub use command::*;
pub use token::{Claims, TokenIssuer, TokenVerifier};
