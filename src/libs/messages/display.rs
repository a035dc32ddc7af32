//! Text of every [`Message`].
//!
//! All wording is defined in this one `match`, so commands never format
//! user-facing strings themselves and a new variant cannot be shown without
//! deciding its text here.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === LISTING MESSAGES ===
            Message::NoMatches(noun) => format!("No {} found matching your criteria", noun),
            Message::ListingHeader(noun, visible, total) => format!("{} ({} of {})", capitalize(noun), visible, total),
            Message::ActiveQuery(query) => format!("Search: \"{}\"", query),
            Message::ActiveTags(tags, mode) => format!("Tags ({}): {}", mode, tags),
            Message::ActiveChannel(channel) => format!("Channel: {}", channel),
            Message::UnknownTag(tag, view) => {
                format!("Tag '{}' is not in the {} catalog, matching it against raw field values", tag, view)
            }
            Message::TagsHeader(view) => format!("Tags for {}:", view),
            Message::NoTagsForView(view) => format!("No tags defined for {}", view),

            // === SELECTION MESSAGES ===
            Message::RecordNotFound(view, id) => format!("No record with id '{}' in {}", id, view),
            Message::MachineIssuesHeader(code, open) => format!("Issues for {} ({} open)", code, open),
            Message::RecordSelected(name) => format!("Selected: {}", name),
            Message::SelectionReplaced(previous, current) => format!("Selection changed from {} to {}", previous, current),
            Message::BrowseHeader(view) => format!("Browsing {}", view),
            Message::PromptSearchQuery => "Search (empty for all)".to_string(),
            Message::PromptSelectTags => "Filter by tags".to_string(),
            Message::PromptSelectRecord => "Select a record to inspect".to_string(),
            Message::PromptBrowseAgain => "Refine the filter?".to_string(),
            Message::BrowseNothingToSelect => "Nothing to select".to_string(),

            // === STATS MESSAGES ===
            Message::StatsHeader(view) => format!("Summary of {}", view),

            // === SOURCE MESSAGES ===
            Message::SourceOpened(source) => format!("Reading records from the {} source", source),
            Message::SourceUnavailable(error) => format!("Record source unavailable: {}", error),

            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleData => "Data source settings".to_string(),
            Message::ConfigModuleThresholds => "Classification thresholds".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptSourceKind => "Record source".to_string(),
            Message::PromptCatalogPath => "Path to the catalog JSON file".to_string(),
            Message::PromptDowntimeCritical => "Downtime minutes from which a machine is CRITICAL".to_string(),
            Message::PromptDowntimeMajor => "Downtime minutes above which a machine is MAJOR".to_string(),
            Message::PromptStockUrgentFactor => "Fraction of the minimum stock that is URGENT".to_string(),
            Message::ThresholdsInvalid(critical, major) => format!(
                "Critical downtime limit ({}) must be greater than the major limit ({})",
                critical, major
            ),
            Message::StockFactorInvalid(factor) => {
                format!("Stock urgency factor ({}) must be between 0 and 1", factor)
            }

            // === IMPORT MESSAGES ===
            Message::RecordsImported(count, noun) => format!("Imported {} {}", count, noun),
            Message::ImportCompleted(count, path) => format!("Imported {} records into {}", count, path),
            Message::ImportSourceIsStore => "Cannot import from the sqlite store into itself".to_string(),
            Message::StoreCleared(count, noun) => format!("Removed {} stored {}", count, noun),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::ExportNothing(noun) => format!("No {} to export", noun),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
        };

        write!(f, "{}", text)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
