use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "machmon.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the data directory and applies pending migrations.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
