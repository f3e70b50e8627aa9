use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use thiserror::Error;

pub const DB_FILE_NAME: &str = "todl.db";

/// Failures raised by the persistence layer.
///
/// `Unavailable` covers everything that prevents the store from opening in
/// the first place (missing data directory, unreadable file, failed schema
/// statement) and is fatal at startup. `Write` covers statement failures
/// against an already-open store and is recoverable: the triggering
/// operation reports it without crashing the process.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task store unavailable: {0}")]
    Unavailable(String),
    #[error("task store operation failed: {0}")]
    Write(#[from] rusqlite::Error),
}

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db, StoreError> {
        let db_file_path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let conn = Connection::open(db_file_path).map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Db { conn })
    }
}
