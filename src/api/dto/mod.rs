//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod auth;
pub mod files;
pub mod health;
pub mod links;
