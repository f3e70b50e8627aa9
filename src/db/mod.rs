//! Database layer for the todl application.
//!
//! A thin persistence layer built on SQLite. The layer owns the on-disk
//! representation exclusively: one `tasks` table keyed by title, created
//! idempotently on first use and synchronized against the in-memory
//! collection after every mutation.

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite database file in the
/// platform data directory, and the `StoreError` taxonomy shared by all
/// store operations.
pub mod db;

/// Task table operations.
///
/// Full-replace save, single-title delete and full-scan load against the
/// `tasks` table.
pub mod tasks;
