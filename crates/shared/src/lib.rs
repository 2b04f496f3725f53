mod error;
pub mod account;

pub use error::*;
