use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::record::{RecordSet, ViewKind};
use crate::libs::source::{Catalog, RecordSource, SourceError};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection};
use std::path::Path;

const UPSERT_RECORD: &str = "INSERT INTO records (kind, record_id, name, payload, imported_at)
    VALUES (?1, ?2, ?3, ?4, CURRENT_TIMESTAMP)
    ON CONFLICT(kind, record_id) DO UPDATE SET
        name = excluded.name,
        payload = excluded.payload,
        imported_at = excluded.imported_at";
const SELECT_PAYLOADS_BY_KIND: &str = "SELECT payload FROM records WHERE kind = ?1 ORDER BY rowid";
const COUNT_BY_KIND: &str = "SELECT COUNT(*) FROM records WHERE kind = ?1";
const DELETE_BY_KIND: &str = "DELETE FROM records WHERE kind = ?1";

/// Records imported into the local database, one json payload per row.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts or replaces every record of the set. Returns the number of rows written.
    pub fn import(&mut self, set: &RecordSet) -> Result<usize> {
        let kind = set.kind();
        let rows = set.rows()?;
        let tx = self.conn.transaction()?;
        for (id, name, payload) in &rows {
            tx.execute(UPSERT_RECORD, params![kind.as_str(), id, name, payload])?;
        }
        tx.commit()?;
        msg_debug!(Message::RecordsImported(rows.len(), kind.noun().to_string()));
        Ok(rows.len())
    }

    pub fn import_catalog(&mut self, catalog: &Catalog) -> Result<usize> {
        let mut total = 0;
        for kind in ViewKind::ALL {
            total += self.import(&catalog.records(kind))?;
        }
        Ok(total)
    }

    /// Drops every stored record of one kind.
    pub fn clear(&mut self, kind: ViewKind) -> Result<usize> {
        Ok(self.conn.execute(DELETE_BY_KIND, params![kind.as_str()])?)
    }

    pub fn count(&self, kind: ViewKind) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_BY_KIND, params![kind.as_str()], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn fetch(&self, kind: ViewKind) -> Result<RecordSet> {
        let mut stmt = self.conn.prepare(SELECT_PAYLOADS_BY_KIND)?;
        let payloads = stmt
            .query_map(params![kind.as_str()], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RecordSet::from_payloads(kind, payloads.iter().map(String::as_str))?)
    }
}

impl RecordSource for SqliteStore {
    fn list_records(&self, kind: ViewKind) -> Result<RecordSet, SourceError> {
        Ok(self.fetch(kind)?)
    }
}
