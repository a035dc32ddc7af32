//! Status and severity classification.
//!
//! Every rule is a total function onto a [`Classification`]: a display label
//! plus a [`ColorToken`]. Two shapes cover all views:
//!
//! - [`ThresholdRule`]: ordered numeric tiers, first matching tier wins,
//!   otherwise the fallback. Tiers partition the number line with no gaps.
//! - [`Palette`]: lookup of a categorical value, unknown values map to the
//!   palette's default colour.
//!
//! [`Rules`] instantiates both for the configured thresholds, and
//! [`Classify`] gives each record kind its primary badge.

use super::config::ThresholdConfig;
use super::filter::{Op, Predicate};
use super::record::{DowntimeEntry, ForumQuestion, Issue, Machine, PurchaseOrder, SparePart};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Abstract colour of a badge, mapped to terminal styles by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    DarkRed,
    Red,
    Yellow,
    Blue,
    Green,
    Gray,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::DarkRed => "dark_red",
            ColorToken::Red => "red",
            ColorToken::Yellow => "yellow",
            ColorToken::Blue => "blue",
            ColorToken::Green => "green",
            ColorToken::Gray => "gray",
        }
    }

    /// prettytable style spec for a cell in this colour.
    pub fn style_spec(&self) -> &'static str {
        match self {
            ColorToken::DarkRed => "bFr",
            ColorToken::Red => "FR",
            ColorToken::Yellow => "Fy",
            ColorToken::Blue => "Fb",
            ColorToken::Green => "Fg",
            ColorToken::Gray => "FD",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub color: ColorToken,
}

impl Classification {
    pub fn new(label: &str, color: ColorToken) -> Self {
        Self {
            label: label.to_string(),
            color,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Lower or upper limit of a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `value > limit`
    Above(f64),
    /// `value >= limit`
    AtLeast(f64),
    /// `value <= limit`
    AtMost(f64),
    /// `value < limit`
    Below(f64),
}

impl Bound {
    pub fn holds(&self, value: f64) -> bool {
        match *self {
            Bound::Above(limit) => value > limit,
            Bound::AtLeast(limit) => value >= limit,
            Bound::AtMost(limit) => value <= limit,
            Bound::Below(limit) => value < limit,
        }
    }

    pub fn predicate(&self, field: &str) -> Predicate {
        match *self {
            Bound::Above(limit) => Predicate::range(field, Op::Gt, limit),
            Bound::AtLeast(limit) => Predicate::range(field, Op::Ge, limit),
            Bound::AtMost(limit) => Predicate::range(field, Op::Le, limit),
            Bound::Below(limit) => Predicate::range(field, Op::Lt, limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    pub bound: Bound,
    pub class: Classification,
}

/// Ordered tiers over one numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRule {
    tiers: Vec<Tier>,
    fallback: Classification,
}

impl ThresholdRule {
    pub fn new(fallback_label: &str, fallback_color: ColorToken) -> Self {
        Self {
            tiers: Vec::new(),
            fallback: Classification::new(fallback_label, fallback_color),
        }
    }

    /// Appends a tier. Earlier tiers take precedence.
    pub fn tier(mut self, bound: Bound, label: &str, color: ColorToken) -> Self {
        self.tiers.push(Tier {
            bound,
            class: Classification::new(label, color),
        });
        self
    }

    pub fn classify(&self, value: f64) -> Classification {
        self.tiers
            .iter()
            .find(|tier| tier.bound.holds(value))
            .map(|tier| tier.class.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.tiers
            .iter()
            .map(|tier| tier.class.label.as_str())
            .chain(std::iter::once(self.fallback.label.as_str()))
    }

    /// Clause selecting exactly the values classified as `label`
    /// (case-insensitive), so tag filters and badges always agree.
    pub fn band_predicate(&self, field: &str, label: &str) -> Option<Predicate> {
        let earlier = |count: usize| -> Vec<Predicate> {
            self.tiers[..count]
                .iter()
                .map(|tier| tier.bound.predicate(field).negate())
                .collect()
        };

        if let Some(index) = self.tiers.iter().position(|tier| tier.class.label.eq_ignore_ascii_case(label)) {
            let mut clauses = earlier(index);
            clauses.push(self.tiers[index].bound.predicate(field));
            return Some(Predicate::All(clauses));
        }
        if self.fallback.label.eq_ignore_ascii_case(label) {
            return Some(Predicate::All(earlier(self.tiers.len())));
        }
        None
    }
}

/// Categorical value to colour lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<(&'static str, ColorToken)>,
    default: ColorToken,
}

impl Palette {
    pub fn new(entries: &[(&'static str, ColorToken)], default: ColorToken) -> Self {
        Self {
            entries: entries.to_vec(),
            default,
        }
    }

    pub fn color(&self, value: &str) -> ColorToken {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(value))
            .map(|(_, color)| *color)
            .unwrap_or(self.default)
    }

    /// Label is the value upper-cased with underscores as spaces.
    pub fn classify(&self, value: &str) -> Classification {
        Classification {
            label: value.replace('_', " ").to_uppercase(),
            color: self.color(value),
        }
    }
}

/// All classification rules, instantiated from configuration.
#[derive(Debug, Clone)]
pub struct Rules {
    pub downtime: ThresholdRule,
    pub stock_urgent_factor: f64,
    pub priority: Palette,
    pub issue_status: Palette,
    pub machine_status: Palette,
    pub part_status: Palette,
    pub order_status: Palette,
    pub forum_state: Palette,
}

impl Rules {
    pub fn new(thresholds: &ThresholdConfig) -> Self {
        Self {
            downtime: downtime_rule(thresholds),
            stock_urgent_factor: thresholds.stock_urgent_factor,
            priority: Palette::new(
                &[
                    ("critical", ColorToken::DarkRed),
                    ("high", ColorToken::Red),
                    ("medium", ColorToken::Yellow),
                    ("low", ColorToken::Blue),
                ],
                ColorToken::Gray,
            ),
            issue_status: Palette::new(
                &[
                    ("open", ColorToken::Red),
                    ("in_progress", ColorToken::Yellow),
                    ("resolved", ColorToken::Green),
                    ("closed", ColorToken::Gray),
                ],
                ColorToken::Gray,
            ),
            machine_status: Palette::new(
                &[
                    ("operational", ColorToken::Green),
                    ("maintenance", ColorToken::Yellow),
                    ("error", ColorToken::Red),
                ],
                ColorToken::Gray,
            ),
            part_status: Palette::new(
                &[
                    ("normal", ColorToken::Green),
                    ("low", ColorToken::Yellow),
                    ("critical", ColorToken::Red),
                ],
                ColorToken::Gray,
            ),
            // Orders that are neither delivered nor shipping are still pending.
            order_status: Palette::new(
                &[("delivered", ColorToken::Green), ("in-transit", ColorToken::Blue)],
                ColorToken::Yellow,
            ),
            forum_state: Palette::new(
                &[("solved", ColorToken::Green), ("unanswered", ColorToken::Gray)],
                ColorToken::Blue,
            ),
        }
    }

    pub fn downtime(&self, minutes: f64) -> Classification {
        self.downtime.classify(minutes)
    }

    pub fn stock_level(&self, current: f64, min: f64) -> Classification {
        stock_rule(min, self.stock_urgent_factor).classify(current)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(&ThresholdConfig::default())
    }
}

pub const CRITICAL: &str = "CRITICAL";
pub const MAJOR: &str = "MAJOR";
pub const MINOR: &str = "MINOR";

/// Downtime severity: CRITICAL from the critical limit up, MAJOR above the
/// major limit, MINOR otherwise.
pub fn downtime_rule(thresholds: &ThresholdConfig) -> ThresholdRule {
    ThresholdRule::new(MINOR, ColorToken::Blue)
        .tier(Bound::AtLeast(thresholds.downtime_critical_from), CRITICAL, ColorToken::Red)
        .tier(Bound::Above(thresholds.downtime_major_above), MAJOR, ColorToken::Yellow)
}

/// Stock urgency relative to the minimum threshold.
pub fn stock_rule(min: f64, urgent_factor: f64) -> ThresholdRule {
    ThresholdRule::new("OK", ColorToken::Green)
        .tier(Bound::AtMost(min * urgent_factor), "URGENT", ColorToken::Red)
        .tier(Bound::AtMost(min), "LOW", ColorToken::Yellow)
}

/// Primary badge of a record.
pub trait Classify {
    fn classify(&self, rules: &Rules) -> Classification;
}

impl Classify for Machine {
    fn classify(&self, rules: &Rules) -> Classification {
        rules.machine_status.classify(self.status.as_str())
    }
}

impl Classify for Issue {
    fn classify(&self, rules: &Rules) -> Classification {
        rules.priority.classify(self.priority.as_str())
    }
}

impl Classify for ForumQuestion {
    fn classify(&self, rules: &Rules) -> Classification {
        let state = if self.solved {
            "solved"
        } else if self.answers == 0 {
            "unanswered"
        } else {
            "open"
        };
        rules.forum_state.classify(state)
    }
}

impl Classify for DowntimeEntry {
    fn classify(&self, rules: &Rules) -> Classification {
        rules.downtime(self.total_downtime as f64)
    }
}

impl Classify for SparePart {
    fn classify(&self, rules: &Rules) -> Classification {
        rules.stock_level(self.current_stock as f64, self.min_threshold as f64)
    }
}

impl Classify for PurchaseOrder {
    fn classify(&self, rules: &Rules) -> Classification {
        rules.order_status.classify(self.status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_falls_through_to_fallback() {
        let rule = ThresholdRule::new("LOW", ColorToken::Blue).tier(Bound::Above(1.0), "HIGH", ColorToken::Red);
        assert_eq!(rule.classify(f64::NAN).label, "LOW");
    }

    #[test]
    fn palette_label_replaces_underscores() {
        let rules = Rules::default();
        let class = rules.issue_status.classify("in_progress");
        assert_eq!(class.label, "IN PROGRESS");
        assert_eq!(class.color, ColorToken::Yellow);
    }
}
