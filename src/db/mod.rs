//! Database layer.
//!
//! A local SQLite file backs the `sqlite` record source. Records are imported
//! from a catalog with `machmon import` and stored as json payloads keyed by
//! view kind and identifier, so the schema does not follow the record types.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use machmon::db::records::SqliteStore;
//! use machmon::libs::source::SampleSource;
//!
//! let mut store = SqliteStore::new()?;
//! store.import_catalog(SampleSource::new()?.catalog())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup and migration bootstrap.
pub mod db;

/// Versioned schema changes.
pub mod migrations;

/// The imported record store.
pub mod records;
