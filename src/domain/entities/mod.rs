//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A shortened URL mapping
//! - [`CallLogEntry`] - A resolution call against a short code
//! - [`User`] - A registered API user
//! - [`FileRecord`] - Metadata for an uploaded file
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewShortLink`, `NewUser`, and `NewFileRecord` carry only the fields the
//! caller chooses; ids and timestamps are assigned by storage.

pub mod call_log;
pub mod file;
pub mod short_link;
pub mod user;

pub use call_log::CallLogEntry;
pub use file::{FileRecord, NewFileRecord};
pub use short_link::{NewShortLink, ShortLink};
pub use user::{NewUser, User};
