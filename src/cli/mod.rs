mod migrate;
mod server;
mod user;

pub use migrate::{migrate, reset};
pub use server::serve;
pub use user::{Role, create_user, set_role};
