mod command;
pub(crate) mod repository;

pub use command::*;
pub use repository::Course;
