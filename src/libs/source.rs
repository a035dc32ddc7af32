//! Record sources.
//!
//! List views never own their data: they ask a [`RecordSource`] for the
//! materialized records of one [`ViewKind`]. Three sources exist:
//!
//! - [`SampleSource`]: the demo dataset compiled into the binary.
//! - [`JsonSource`]: a catalog file in the same JSON layout.
//! - [`SqliteStore`](crate::db::records::SqliteStore): records imported into
//!   the local database with `machmon import`.
//!
//! ## Catalog layout
//!
//! ```json
//! {
//!   "machines": [ ... ],
//!   "issues": [ ... ],
//!   "questions": [ ... ],
//!   "downtime": [ ... ],
//!   "spareParts": [ ... ],
//!   "purchaseOrders": [ ... ]
//! }
//! ```
//!
//! Missing arrays are treated as empty collections.

use super::record::{
    DowntimeEntry, ForumQuestion, Issue, Machine, PurchaseOrder, Record, RecordSet, SparePart, ViewKind,
};
use crate::db::records::SqliteStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SAMPLE_CATALOG: &str = include_str!("../../data/sample.json");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: ViewKind, id: String },

    #[error("source returned {found} records where {expected} were requested")]
    KindMismatch { expected: ViewKind, found: ViewKind },

    #[error("the {0} source needs a catalog path")]
    PathRequired(SourceKind),

    #[error("record store failure: {0}")]
    Store(#[from] anyhow::Error),
}

/// Configurable source selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Sample,
    Json,
    Sqlite,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Sample => "sample",
            SourceKind::Json => "json",
            SourceKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supplies the unfiltered dataset of a view.
pub trait RecordSource {
    fn list_records(&self, kind: ViewKind) -> Result<RecordSet, SourceError>;
}

/// Typed convenience over [`RecordSource::list_records`].
pub fn load<R: Record>(source: &dyn RecordSource) -> Result<Vec<R>, SourceError> {
    let set = source.list_records(R::KIND)?;
    let found = set.kind();
    R::from_set(set).ok_or(SourceError::KindMismatch {
        expected: R::KIND,
        found,
    })
}

/// Every view's records in one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Catalog {
    pub machines: Vec<Machine>,
    pub issues: Vec<Issue>,
    pub questions: Vec<ForumQuestion>,
    pub downtime: Vec<DowntimeEntry>,
    pub spare_parts: Vec<SparePart>,
    pub purchase_orders: Vec<PurchaseOrder>,
}

impl Catalog {
    /// Parses a catalog and checks identifier uniqueness per collection.
    pub fn from_json(text: &str) -> Result<Self, SourceError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), SourceError> {
        fn unique<R: Record>(records: &[R]) -> Result<(), SourceError> {
            let mut seen = HashSet::new();
            for record in records {
                let id = record.id();
                if !seen.insert(id.clone()) {
                    return Err(SourceError::DuplicateId { kind: R::KIND, id });
                }
            }
            Ok(())
        }
        unique(&self.machines)?;
        unique(&self.issues)?;
        unique(&self.questions)?;
        unique(&self.downtime)?;
        unique(&self.spare_parts)?;
        unique(&self.purchase_orders)
    }

    pub fn records(&self, kind: ViewKind) -> RecordSet {
        match kind {
            ViewKind::Machines => RecordSet::Machines(self.machines.clone()),
            ViewKind::Issues => RecordSet::Issues(self.issues.clone()),
            ViewKind::Forum => RecordSet::Forum(self.questions.clone()),
            ViewKind::Downtime => RecordSet::Downtime(self.downtime.clone()),
            ViewKind::Parts => RecordSet::Parts(self.spare_parts.clone()),
            ViewKind::Orders => RecordSet::Orders(self.purchase_orders.clone()),
        }
    }

    /// Collects every view of another source into one catalog.
    pub fn collect(source: &dyn RecordSource) -> Result<Self, SourceError> {
        Ok(Catalog {
            machines: load(source)?,
            issues: load(source)?,
            questions: load(source)?,
            downtime: load(source)?,
            spare_parts: load(source)?,
            purchase_orders: load(source)?,
        })
    }
}

impl RecordSource for Catalog {
    fn list_records(&self, kind: ViewKind) -> Result<RecordSet, SourceError> {
        Ok(self.records(kind))
    }
}

/// The demo dataset embedded in the binary.
#[derive(Debug, Clone)]
pub struct SampleSource {
    catalog: Catalog,
}

impl SampleSource {
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self {
            catalog: Catalog::from_json(SAMPLE_CATALOG)?,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl RecordSource for SampleSource {
    fn list_records(&self, kind: ViewKind) -> Result<RecordSet, SourceError> {
        self.catalog.list_records(kind)
    }
}

/// A catalog file read on every request.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonSource {
    fn list_records(&self, kind: ViewKind) -> Result<RecordSet, SourceError> {
        Catalog::from_path(&self.path)?.list_records(kind)
    }
}

/// Opens the source selected by configuration or command-line flags.
pub fn open(kind: SourceKind, path: Option<PathBuf>) -> Result<Box<dyn RecordSource>, SourceError> {
    tracing::debug!(source = kind.as_str(), path = ?path, "opening record source");
    match kind {
        SourceKind::Sample => Ok(Box::new(SampleSource::new()?)),
        SourceKind::Json => {
            let path = path.ok_or(SourceError::PathRequired(kind))?;
            Ok(Box::new(JsonSource::new(path)))
        }
        SourceKind::Sqlite => Ok(Box::new(SqliteStore::new()?)),
    }
}
