//! Common utilities shared across drawDB share crates.

pub mod dirs;
pub mod http_client;

pub use dirs::{AppDirs, get_app_dirs};
pub use http_client::{
    DEFAULT_TIMEOUT, POOL_IDLE_TIMEOUT, USER_AGENT, create_client_builder,
    create_client_with_timeout,
};
