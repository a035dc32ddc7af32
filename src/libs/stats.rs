//! Summary counters shown above the list views.
//!
//! Every figure is derived from the records passed in, which are normally the
//! visible rows of a [`Listing`](super::filter::Listing), so the counters
//! follow the active filter.

use super::classify::{Classify, Rules, CRITICAL, MAJOR, MINOR};
use super::record::{DowntimeEntry, Issue, IssueStatus, Priority, SparePart};
use chrono::Duration;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssueStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub critical: usize,
}

impl IssueStats {
    pub fn from_records<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        issues.into_iter().fold(Self::default(), |mut stats, issue| {
            stats.total += 1;
            match issue.status {
                IssueStatus::Open => stats.open += 1,
                IssueStatus::InProgress => stats.in_progress += 1,
                IssueStatus::Resolved | IssueStatus::Closed => stats.resolved += 1,
                IssueStatus::Other(_) => {}
            }
            if issue.priority == Priority::Critical {
                stats.critical += 1;
            }
            stats
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DowntimeStats {
    pub machines: usize,
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
    pub total_minutes: u64,
    pub incidents: u64,
    /// Mean time between failures in minutes, `None` without entries.
    pub mean_mtbf: Option<f64>,
}

impl DowntimeStats {
    pub fn from_records<'a>(entries: impl IntoIterator<Item = &'a DowntimeEntry>, rules: &Rules) -> Self {
        let mut stats = Self {
            machines: 0,
            critical: 0,
            major: 0,
            minor: 0,
            total_minutes: 0,
            incidents: 0,
            mean_mtbf: None,
        };
        let mut mtbf_sum = 0.0;

        for entry in entries {
            stats.machines += 1;
            stats.total_minutes += u64::from(entry.total_downtime);
            stats.incidents += u64::from(entry.incidents);
            mtbf_sum += f64::from(entry.mtbf);
            match entry.classify(rules).label.as_str() {
                CRITICAL => stats.critical += 1,
                MAJOR => stats.major += 1,
                MINOR => stats.minor += 1,
                _ => {}
            }
        }

        if stats.machines > 0 {
            stats.mean_mtbf = Some(mtbf_sum / stats.machines as f64);
        }
        stats
    }

    pub fn total_downtime(&self) -> Duration {
        Duration::minutes(self.total_minutes as i64)
    }

    /// Mean MTBF rounded to whole minutes.
    pub fn mean_mtbf_duration(&self) -> Option<Duration> {
        self.mean_mtbf.map(|minutes| Duration::minutes(minutes.round() as i64))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryStats {
    pub items: usize,
    pub units: u64,
    /// Parts at or below their minimum threshold.
    pub below_minimum: usize,
    pub urgent: usize,
    pub value: f64,
}

impl InventoryStats {
    pub fn from_records<'a>(parts: impl IntoIterator<Item = &'a SparePart>, rules: &Rules) -> Self {
        parts.into_iter().fold(Self::default(), |mut stats, part| {
            stats.items += 1;
            stats.units += u64::from(part.current_stock);
            stats.value += f64::from(part.current_stock) * part.unit_price;
            match part.classify(rules).label.as_str() {
                "URGENT" => {
                    stats.urgent += 1;
                    stats.below_minimum += 1;
                }
                "LOW" => stats.below_minimum += 1,
                _ => {}
            }
            stats
        })
    }
}
