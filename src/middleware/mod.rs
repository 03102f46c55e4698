pub mod auth;
pub mod cache;

pub use auth::{auth_gate, is_public};
pub use cache::cache_control_middleware;
