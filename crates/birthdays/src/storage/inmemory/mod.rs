//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of `UserRepository`
//! that stores all users in a HashMap wrapped in `Arc<RwLock<_>>`. This is
//! useful for tests and for local runs where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use birthdays::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
