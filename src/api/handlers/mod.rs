//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod files;
pub mod health;
pub mod links;

pub use auth::{check_me_handler, me_handler, sign_up_handler, token_handler};
pub use files::{download_handler, files_handler, upload_handler};
pub use health::{ping_db_handler, ping_handler};
pub use links::{
    batch_register_handler, delete_handler, register_handler, resolve_handler, status_handler,
};
