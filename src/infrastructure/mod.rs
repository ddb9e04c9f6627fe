//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and blob storage.
//!
//! # Modules
//!
//! - [`memory`] - In-memory implementations used by tests
//! - [`object_store`] - Blob storage for uploaded files
//! - [`persistence`] - PostgreSQL repository implementations

pub mod memory;
pub mod object_store;
pub mod persistence;
