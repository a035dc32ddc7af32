//! Versioned schema migrations for the record store.
//!
//! Each migration runs once, inside the transaction that applies all pending
//! versions, and is recorded in the `migrations` table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use machmon::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("machmon.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: one row per record, payload kept as json
        self.add_migration(1, "create_records", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS records (
                    kind TEXT NOT NULL,
                    record_id TEXT NOT NULL,
                    name TEXT NOT NULL,
                    payload TEXT NOT NULL,
                    PRIMARY KEY (kind, record_id)
                )",
                [],
            )?;
            Ok(())
        });

        // Version 2: import bookkeeping and name lookups
        self.add_migration(2, "add_import_metadata", |tx| {
            tx.execute("ALTER TABLE records ADD COLUMN imported_at TIMESTAMP", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_records_kind_name ON records(kind, name)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = (migration.up)(&tx) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
