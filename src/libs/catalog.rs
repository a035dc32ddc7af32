//! Filter configuration of every list view.
//!
//! [`view_spec`] is the single place that decides which fields a view
//! searches and which tags its tag bar offers. Downtime severity tags are
//! derived from the same [`downtime_rule`] that colours the badges, so the
//! `critical` tag always selects exactly the CRITICAL rows.

use super::classify::{downtime_rule, CRITICAL, MAJOR, MINOR};
use super::config::ThresholdConfig;
use super::filter::{Predicate, TagDef, ViewSpec};
use super::record::ViewKind;

/// Forum channel that disables the channel restriction.
pub const ALL_CHANNELS: &str = "all";

pub fn view_spec(kind: ViewKind, thresholds: &ThresholdConfig) -> ViewSpec {
    match kind {
        ViewKind::Machines => ViewSpec::new(kind)
            .search(&["name", "code"])
            .tag_fields(&["status", "type"])
            .categorical_tags(
                "status",
                &[
                    ("operational", "Operational"),
                    ("maintenance", "Maintenance"),
                    ("error", "Error"),
                ],
            )
            .categorical_tags("type", &[("CNC", "CNC"), ("Drilling", "Drilling"), ("Assembly", "Assembly")]),

        ViewKind::Issues => ViewSpec::new(kind)
            .search(&["title", "machine_id"])
            .tag_fields(&["priority", "type"])
            .categorical_tags("priority", &[("high", "High Priority"), ("medium", "Medium Priority"), ("low", "Low Priority")])
            .categorical_tags(
                "type",
                &[
                    ("mechanical", "Mechanical"),
                    ("electrical", "Electrical"),
                    ("maintenance", "Maintenance"),
                ],
            ),

        ViewKind::Forum => ViewSpec::new(kind)
            .search(&["title", "content"])
            .tag_fields(&["tags"])
            .categorical_tags(
                "tags",
                &[
                    ("cnc", "CNC"),
                    ("maintenance", "Maintenance"),
                    ("safety", "Safety"),
                    ("training", "Training"),
                    ("best-practices", "Best Practices"),
                    ("troubleshooting", "Troubleshooting"),
                ],
            ),

        ViewKind::Downtime => {
            let severity = downtime_rule(thresholds);
            let mut spec = ViewSpec::new(kind).search(&["name"]).tag_fields(&["type"]);
            for (value, label) in [("critical", CRITICAL), ("major", MAJOR), ("minor", MINOR)] {
                if let Some(predicate) = severity.band_predicate("total_downtime", label) {
                    spec = spec.tag(TagDef::new(value, &format!("{} Downtime", capitalize(value)), predicate));
                }
            }
            spec.categorical_tags("type", &[("Preventive", "Preventive"), ("Breakdown", "Breakdown")])
        }

        ViewKind::Parts => ViewSpec::new(kind)
            .search(&["name", "sku"])
            .tag_fields(&["status", "category"])
            .categorical_tags("status", &[("normal", "Normal"), ("low", "Low Stock"), ("critical", "Critical")])
            .categorical_tags(
                "category",
                &[
                    ("Tooling", "Tooling"),
                    ("Mechanical", "Mechanical"),
                    ("Maintenance", "Maintenance"),
                    ("Electrical", "Electrical"),
                ],
            ),

        ViewKind::Orders => ViewSpec::new(kind)
            .search(&["id", "supplier"])
            .tag_fields(&["status"])
            .categorical_tags(
                "status",
                &[("pending", "Pending"), ("in-transit", "In Transit"), ("delivered", "Delivered")],
            ),
    }
}

/// Scope clause for a forum channel, `None` for [`ALL_CHANNELS`].
pub fn channel_scope(channel: &str) -> Option<Predicate> {
    let channel = channel.trim();
    if channel.is_empty() || channel.eq_ignore_ascii_case(ALL_CHANNELS) {
        None
    } else {
        Some(Predicate::equals("channel", channel))
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
