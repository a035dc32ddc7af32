use super::classify::{Classification, Classify, Rules};
use super::filter::{Listing, ViewSpec};
use super::formatter::{format_date, format_duration, format_minutes, format_money};
use super::messages::Message;
use super::record::{DowntimeEntry, ForumQuestion, Issue, Machine, PurchaseOrder, Record, SparePart};
use super::stats::{DowntimeStats, InventoryStats, IssueStats};
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

/// Column layout of a record kind in list tables.
pub trait TableRow: Record + Classify {
    fn headers() -> Vec<&'static str>;

    fn cells(&self, rules: &Rules) -> Vec<Cell>;
}

fn badge(class: &Classification) -> Cell {
    Cell::new(&class.label).style_spec(class.color.style_spec())
}

impl TableRow for Machine {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "CODE", "NAME", "TYPE", "LOCATION", "STATUS"]
    }

    fn cells(&self, rules: &Rules) -> Vec<Cell> {
        vec![
            Cell::new(&self.id.to_string()),
            Cell::new(&self.code),
            Cell::new(&self.name),
            Cell::new(self.machine_type.as_str()),
            Cell::new(&self.location),
            badge(&self.classify(rules)),
        ]
    }
}

impl TableRow for Issue {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "TITLE", "MACHINE", "TYPE", "ASSIGNEE", "CREATED", "PRIORITY", "STATUS"]
    }

    fn cells(&self, rules: &Rules) -> Vec<Cell> {
        vec![
            Cell::new(&self.id.to_string()),
            Cell::new(&self.title),
            Cell::new(&self.machine_id),
            Cell::new(self.issue_type.as_str()),
            Cell::new(&self.assignee),
            Cell::new(&format_date(&self.created_at)),
            badge(&self.classify(rules)),
            badge(&rules.issue_status.classify(self.status.as_str())),
        ]
    }
}

impl TableRow for ForumQuestion {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "TITLE", "AUTHOR", "CHANNEL", "VOTES", "ANSWERS", "VIEWS", "TAGS", "STATE"]
    }

    fn cells(&self, rules: &Rules) -> Vec<Cell> {
        vec![
            Cell::new(&self.id.to_string()),
            Cell::new(&self.title),
            Cell::new(&self.author.name),
            Cell::new(&self.channel),
            Cell::new(&self.votes.to_string()),
            Cell::new(&self.answers.to_string()),
            Cell::new(&self.views.to_string()),
            Cell::new(&self.tags.join(", ")),
            badge(&self.classify(rules)),
        ]
    }
}

impl TableRow for DowntimeEntry {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "MACHINE", "TYPE", "DOWNTIME", "INCIDENTS", "MTBF", "LAST INCIDENT", "SEVERITY"]
    }

    fn cells(&self, rules: &Rules) -> Vec<Cell> {
        vec![
            Cell::new(&self.id),
            Cell::new(&self.name),
            Cell::new(self.downtime_type.as_str()),
            Cell::new(&format_minutes(self.total_downtime)),
            Cell::new(&self.incidents.to_string()),
            Cell::new(&format_minutes(self.mtbf)),
            Cell::new(&format_date(&self.last_incident)),
            badge(&self.classify(rules)),
        ]
    }
}

impl TableRow for SparePart {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "SKU", "CATEGORY", "STOCK", "MIN", "PRICE", "STATUS", "LEVEL"]
    }

    fn cells(&self, rules: &Rules) -> Vec<Cell> {
        vec![
            Cell::new(&self.id.to_string()),
            Cell::new(&self.name),
            Cell::new(&self.sku),
            Cell::new(&self.category),
            Cell::new(&format!("{}/{}", self.current_stock, self.max_stock)),
            Cell::new(&self.min_threshold.to_string()),
            Cell::new(&format_money(self.unit_price)),
            badge(&rules.part_status.classify(self.status.as_str())),
            badge(&self.classify(rules)),
        ]
    }
}

impl TableRow for PurchaseOrder {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "DATE", "SUPPLIER", "ITEMS", "TOTAL", "EXPECTED", "STATUS"]
    }

    fn cells(&self, rules: &Rules) -> Vec<Cell> {
        vec![
            Cell::new(&self.id),
            Cell::new(&format_date(&self.date)),
            Cell::new(&self.supplier),
            Cell::new(&self.items.len().to_string()),
            Cell::new(&format_money(self.total_amount)),
            Cell::new(&format_date(&self.expected_delivery)),
            badge(&self.classify(rules)),
        ]
    }
}

pub struct View {}

impl View {
    /// Prints the visible records, or the empty-state line when none match.
    pub fn listing<R: TableRow>(listing: &Listing<'_, R>, total: usize, rules: &Rules) -> Result<()> {
        msg_print!(Message::ListingHeader(listing.kind().noun().to_string(), listing.len(), total), true);

        if let Some(empty) = listing.empty_state() {
            msg_print!(empty);
            return Ok(());
        }

        let mut table = Table::new();
        table.set_titles(Row::new(R::headers().into_iter().map(Cell::new).collect()));
        for record in listing.iter() {
            table.add_row(Row::new(record.cells(rules)));
        }
        table.printstd();

        Ok(())
    }

    /// Field-by-field table of one record.
    pub fn detail<R: Record + Classify>(record: &R, rules: &Rules) -> Result<()> {
        let mut table = Table::new();
        let class = record.classify(rules);
        table.add_row(Row::new(vec![Cell::new("classification"), badge(&class)]));

        if let serde_json::Value::Object(fields) = serde_json::to_value(record)? {
            for (key, value) in fields {
                table.add_row(row![key, detail_value(&value)]);
            }
        }
        table.printstd();

        Ok(())
    }

    /// Tag catalog of a view with the number of records each tag selects.
    pub fn tags(spec: &ViewSpec, counts: &[usize]) -> Result<()> {
        let mut table = Table::new();
        table.set_titles(row!["TAG", "LABEL", "CLAUSE", "RECORDS"]);
        for (tag, count) in spec.tags.iter().zip(counts) {
            table.add_row(row![tag.value, tag.label, tag.predicate, count]);
        }
        table.printstd();
        Ok(())
    }

    pub fn issue_stats(stats: &IssueStats) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Total", stats.total]);
        table.add_row(row!["Open", stats.open]);
        table.add_row(row!["In progress", stats.in_progress]);
        table.add_row(row!["Resolved", stats.resolved]);
        table.add_row(row!["Critical", stats.critical]);
        table.printstd();
        Ok(())
    }

    pub fn downtime_stats(stats: &DowntimeStats) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Machines", stats.machines]);
        table.add_row(row!["Critical", stats.critical]);
        table.add_row(row!["Major", stats.major]);
        table.add_row(row!["Minor", stats.minor]);
        table.add_row(row!["Total downtime", format_duration(&stats.total_downtime())]);
        table.add_row(row!["Incidents", stats.incidents]);
        table.add_row(row![
            "Mean MTBF",
            stats.mean_mtbf_duration().map(|mtbf| format_duration(&mtbf)).unwrap_or_else(|| "-".to_string())
        ]);
        table.printstd();
        Ok(())
    }

    pub fn inventory_stats(stats: &InventoryStats) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["Items", stats.items]);
        table.add_row(row!["Units in stock", stats.units]);
        table.add_row(row!["Below minimum", stats.below_minimum]);
        table.add_row(row!["Urgent", stats.urgent]);
        table.add_row(row!["Inventory value", format_money(stats.value)]);
        table.printstd();
        Ok(())
    }
}

fn detail_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::Array(items) => items.iter().map(detail_value).collect::<Vec<_>>().join(", "),
        serde_json::Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| format!("{}: {}", key, detail_value(value)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
