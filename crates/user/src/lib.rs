mod command;
pub mod password;
mod repository;

pub use command::*;
pub use repository::UserRow;
