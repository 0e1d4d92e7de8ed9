//! Functional core for the birthdays service.
//!
//! Everything in this crate is pure: domain types, validation, the birthday
//! calculation, and the traits the shell implements for caching and durable
//! storage. No module here performs I/O.

pub mod cache;
pub mod storage;
pub mod users;
