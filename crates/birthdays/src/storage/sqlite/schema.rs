//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Users table, one row per username
CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    date_of_birth TEXT NOT NULL
);
"#;

pub const SELECT_USER_BY_USERNAME: &str = r#"
SELECT username, date_of_birth
FROM users
WHERE username = ?1
"#;

/// Last writer wins on `date_of_birth`.
pub const UPSERT_USER: &str = r#"
INSERT INTO users (username, date_of_birth)
VALUES (?1, ?2)
ON CONFLICT (username) DO UPDATE SET
    date_of_birth = excluded.date_of_birth
"#;
