//! Export of filtered listings to CSV, JSON and Excel.
//!
//! Each exported row is the record's own fields plus its classification
//! badge, so a spreadsheet shows the same severity as the terminal table.
//!
//! ## Formats
//!
//! - **CSV**: header row with `classification`, `color` and the union of
//!   field names over all rows, one line per record. Nested values (order
//!   items, forum author) are flattened to text.
//! - **JSON**: pretty-printed array of objects with `classification` and
//!   `color` keys next to the record fields.
//! - **Excel**: one worksheet named after the view with a bold header row.
//!
//! Without `--output` the file is named `machmon_<view>_<timestamp>.<ext>`
//! in the working directory.

use super::classify::{Classify, Rules};
use super::filter::Listing;
use super::messages::Message;
use super::record::{Record, ViewKind};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// One record prepared for export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub classification: String,
    pub color: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ExportRow {
    pub fn from_record<R: Record + Classify>(record: &R, rules: &Rules) -> Result<Self> {
        let class = record.classify(rules);
        let fields = match serde_json::to_value(record)? {
            Value::Object(fields) => fields,
            other => {
                let mut fields = Map::new();
                fields.insert("value".to_string(), other);
                fields
            }
        };
        Ok(Self {
            classification: class.label,
            color: class.color.as_str().to_string(),
            fields,
        })
    }

    fn cell(&self, column: &str) -> String {
        match column {
            "classification" => self.classification.clone(),
            "color" => self.color.clone(),
            _ => self.fields.get(column).map(flatten).unwrap_or_default(),
        }
    }
}

/// Header of a tabular export: the badge columns, then every field key that
/// occurs in any row. Optional fields absent from the first row still get a column.
fn header_columns(rows: &[ExportRow]) -> Vec<String> {
    let keys: BTreeSet<&String> = rows.iter().flat_map(|row| row.fields.keys()).collect();
    ["classification", "color"]
        .into_iter()
        .map(str::to_string)
        .chain(keys.into_iter().cloned())
        .collect()
}

fn flatten(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(flatten).collect::<Vec<_>>().join("; "),
        Value::Object(fields) => fields.values().map(flatten).collect::<Vec<_>>().join(" "),
        other => other.to_string(),
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, kind: ViewKind, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "machmon_{}_{}.{}",
                kind.as_str(),
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the visible records of a listing. Returns the number of rows.
    pub fn export<R: Record + Classify>(&self, listing: &Listing<'_, R>, rules: &Rules) -> Result<usize> {
        if listing.is_empty() {
            msg_bail_anyhow!(Message::ExportNothing(listing.kind().noun().to_string()));
        }

        let rows = listing
            .iter()
            .map(|record| ExportRow::from_record(record, rules))
            .collect::<Result<Vec<_>>>()?;

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_excel(listing.kind(), &rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(rows.len())
    }

    fn export_csv(&self, rows: &[ExportRow]) -> Result<()> {
        let columns = header_columns(rows);
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(&columns)?;

        for row in rows {
            wtr.write_record(columns.iter().map(|column| row.cell(column)))?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_excel(&self, kind: ViewKind, rows: &[ExportRow]) -> Result<()> {
        let columns = header_columns(rows);
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(kind.as_str())?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, name) in columns.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let line = i as u32 + 1;
            for (col, name) in columns.iter().enumerate() {
                match row.fields.get(name) {
                    Some(Value::Number(number)) => {
                        worksheet.write_number(line, col as u16, number.as_f64().unwrap_or_default())?;
                    }
                    _ => {
                        worksheet.write_string(line, col as u16, row.cell(name))?;
                    }
                }
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
