//! In-memory infrastructure used by tests and local experiments.

mod object_store;
mod repositories;

pub use object_store::InMemoryObjectStore;
pub use repositories::{
    InMemoryCallLogRepository, InMemoryFileRepository, InMemoryHealthRepository,
    InMemoryLinkRepository, InMemoryTokenRepository, InMemoryUserRepository,
};
