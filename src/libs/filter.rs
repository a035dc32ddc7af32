//! Multi-criteria record filtering.
//!
//! A list view is described by a [`ViewSpec`]: which fields are searched by
//! the free-text query, which fields ad-hoc tags compare against, and a
//! catalog of known tags. The user's choices live in a [`FilterState`].
//!
//! ## Matching rules
//!
//! A record is visible when all of these hold:
//!
//! - **Text**: the query is empty, or one of the searchable fields contains it
//!   as a case-insensitive substring.
//! - **Tags**: no tag is selected, or the selected tags match according to the
//!   [`TagMode`] (`Any` by default: OR across tags).
//! - **Scope**: every scope restriction (for example the forum channel) holds.
//!
//! Tags resolve to typed [`Predicate`] clauses. Categorical tags become
//! [`Predicate::Equality`], derived tags such as downtime severity become
//! [`Predicate::Range`] combinations, so both kinds can sit in one selection
//! without string overloading.
//!
//! ## Example
//!
//! ```rust,no_run
//! use machmon::libs::catalog::view_spec;
//! use machmon::libs::config::ThresholdConfig;
//! use machmon::libs::filter::FilterState;
//! use machmon::libs::record::{DowntimeEntry, ViewKind};
//!
//! # let entries: Vec<DowntimeEntry> = Vec::new();
//! let spec = view_spec(ViewKind::Downtime, &ThresholdConfig::default());
//! let state = FilterState::new().with_query("cnc").with_tags(["critical"]);
//! let listing = spec.filter(&entries, &state);
//! if let Some(message) = listing.empty_state() {
//!     println!("{}", message);
//! }
//! ```

use super::messages::Message;
use super::record::{FieldValue, Record, ViewKind};
use crate::msg_debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Comparison operator of a [`Predicate::Range`] clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Gt,
    Ge,
    Lt,
    Le,
    Eq,
}

impl Op {
    pub fn test(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Op::Gt => lhs > rhs,
            Op::Ge => lhs >= rhs,
            Op::Lt => lhs < rhs,
            Op::Le => lhs <= rhs,
            Op::Eq => lhs == rhs,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Eq => "==",
        })
    }
}

/// A boolean clause over record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Field equals the value, ignoring ASCII case. On list fields: contains.
    Equality { field: String, value: String },
    /// Numeric comparison `field <op> value`.
    Range { field: String, op: Op, value: f64 },
    /// Every clause holds. Empty is true.
    All(Vec<Predicate>),
    /// At least one clause holds. Empty is false.
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn equals(field: &str, value: &str) -> Self {
        Predicate::Equality {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn range(field: &str, op: Op, value: f64) -> Self {
        Predicate::Range {
            field: field.to_string(),
            op,
            value,
        }
    }

    pub fn negate(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// Evaluates the clause. Missing fields and type mismatches are false.
    pub fn evaluate<R: Record>(&self, record: &R) -> bool {
        match self {
            Predicate::Equality { field, value } => match record.field(field) {
                Some(FieldValue::Text(text)) => text.eq_ignore_ascii_case(value),
                Some(FieldValue::List(items)) => items.iter().any(|item| item.eq_ignore_ascii_case(value)),
                Some(FieldValue::Number(number)) => value.trim().parse::<f64>().map(|v| v == number).unwrap_or(false),
                Some(FieldValue::Flag(flag)) => value.trim().parse::<bool>().map(|v| v == flag).unwrap_or(false),
                None => false,
            },
            Predicate::Range { field, op, value } => match record.field(field) {
                Some(FieldValue::Number(number)) => op.test(number, *value),
                Some(FieldValue::Text(text)) => text.trim().parse::<f64>().map(|n| op.test(n, *value)).unwrap_or(false),
                _ => false,
            },
            Predicate::All(clauses) => clauses.iter().all(|clause| clause.evaluate(record)),
            Predicate::Any(clauses) => clauses.iter().any(|clause| clause.evaluate(record)),
            Predicate::Not(clause) => !clause.evaluate(record),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, clauses: &[Predicate], sep: &str) -> fmt::Result {
            write!(f, "(")?;
            for (i, clause) in clauses.iter().enumerate() {
                if i > 0 {
                    write!(f, " {} ", sep)?;
                }
                write!(f, "{}", clause)?;
            }
            write!(f, ")")
        }
        match self {
            Predicate::Equality { field, value } => write!(f, "{} = {}", field, value),
            Predicate::Range { field, op, value } => write!(f, "{} {} {}", field, op, value),
            Predicate::All(clauses) if clauses.is_empty() => write!(f, "true"),
            Predicate::Any(clauses) if clauses.is_empty() => write!(f, "false"),
            Predicate::All(clauses) => join(f, clauses, "and"),
            Predicate::Any(clauses) => join(f, clauses, "or"),
            Predicate::Not(clause) => write!(f, "not {}", clause),
        }
    }
}

/// How several selected tags combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TagMode {
    /// A record matching any selected tag passes.
    #[default]
    Any,
    /// A record must match every selected tag.
    All,
}

/// The user's query, tag selection and scope restrictions for one view.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    query: String,
    tags: BTreeSet<String>,
    mode: TagMode,
    scope: Vec<Predicate>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.select_tag(tag.as_ref());
        }
        self
    }

    pub fn with_mode(mut self, mode: TagMode) -> Self {
        self.mode = mode;
        self
    }

    /// Adds a clause that must always hold, independent of tags.
    pub fn restrict(mut self, predicate: Predicate) -> Self {
        self.scope.push(predicate);
        self
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn set_mode(&mut self, mode: TagMode) {
        self.mode = mode;
    }

    pub fn select_tag(&mut self, tag: &str) {
        if let Some(tag) = normalize_tag(tag) {
            self.tags.insert(tag);
        }
    }

    pub fn deselect_tag(&mut self, tag: &str) {
        if let Some(tag) = normalize_tag(tag) {
            self.tags.remove(&tag);
        }
    }

    /// Selects the tag if absent, deselects it otherwise. Returns whether the
    /// tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };
        if self.tags.remove(&tag) {
            false
        } else {
            self.tags.insert(tag);
            true
        }
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        normalize_tag(tag).map(|tag| self.tags.contains(&tag)).unwrap_or(false)
    }

    pub fn mode(&self) -> TagMode {
        self.mode
    }

    pub fn scope(&self) -> &[Predicate] {
        &self.scope
    }
}

fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_ascii_lowercase())
    }
}

/// A selectable tag and the clause it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDef {
    pub value: String,
    pub label: String,
    pub predicate: Predicate,
}

impl TagDef {
    pub fn new(value: &str, label: &str, predicate: Predicate) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            predicate,
        }
    }
}

/// Per-view filtering configuration.
#[derive(Debug, Clone)]
pub struct ViewSpec {
    pub kind: ViewKind,
    /// Fields searched by the free-text query.
    pub search_fields: Vec<&'static str>,
    /// Fields an unknown tag is compared against.
    pub tag_fields: Vec<&'static str>,
    pub tags: Vec<TagDef>,
}

impl ViewSpec {
    pub fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            search_fields: Vec::new(),
            tag_fields: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn search(mut self, fields: &[&'static str]) -> Self {
        self.search_fields.extend_from_slice(fields);
        self
    }

    pub fn tag_fields(mut self, fields: &[&'static str]) -> Self {
        self.tag_fields.extend_from_slice(fields);
        self
    }

    pub fn tag(mut self, tag: TagDef) -> Self {
        self.tags.push(tag);
        self
    }

    /// Adds one equality tag per value on a categorical field.
    pub fn categorical_tags(mut self, field: &str, values: &[(&str, &str)]) -> Self {
        for (value, label) in values {
            self.tags.push(TagDef::new(value, label, Predicate::equals(field, value)));
        }
        self
    }

    pub fn find_tag(&self, tag: &str) -> Option<&TagDef> {
        let tag = tag.trim();
        self.tags.iter().find(|def| def.value.eq_ignore_ascii_case(tag))
    }

    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.find_tag(tag).is_some()
    }

    /// Resolves a tag to its clause. Tags outside the catalog compare against
    /// the view's tag fields.
    pub fn resolve_tag(&self, tag: &str) -> Predicate {
        match self.find_tag(tag) {
            Some(def) => def.predicate.clone(),
            None => {
                msg_debug!(Message::UnknownTag(tag.to_string(), self.kind.to_string()));
                Predicate::Any(self.tag_fields.iter().map(|field| Predicate::equals(field, tag)).collect())
            }
        }
    }

    /// The combined tag clause for a state, `None` when no tag is selected.
    pub fn tag_predicate(&self, state: &FilterState) -> Option<Predicate> {
        let clauses: Vec<Predicate> = state.tags().map(|tag| self.resolve_tag(tag)).collect();
        if clauses.is_empty() {
            return None;
        }
        Some(match state.mode() {
            TagMode::Any => Predicate::Any(clauses),
            TagMode::All => Predicate::All(clauses),
        })
    }

    pub fn matches_text<R: Record>(&self, record: &R, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields.iter().any(|name| match record.field(name) {
            Some(FieldValue::Text(text)) => text.to_lowercase().contains(&needle),
            Some(FieldValue::List(items)) => items.iter().any(|item| item.to_lowercase().contains(&needle)),
            _ => false,
        })
    }

    pub fn matches<R: Record>(&self, record: &R, state: &FilterState) -> bool {
        self.matches_text(record, state.query())
            && self.tag_predicate(state).map_or(true, |clause| clause.evaluate(record))
            && state.scope().iter().all(|clause| clause.evaluate(record))
    }

    pub fn filter<'a, R: Record>(&self, records: &'a [R], state: &FilterState) -> Listing<'a, R> {
        let needle = state.query();
        let tags = self.tag_predicate(state);
        let visible: Vec<&R> = records
            .iter()
            .filter(|record| {
                self.matches_text(*record, needle)
                    && tags.as_ref().map_or(true, |clause| clause.evaluate(*record))
                    && state.scope().iter().all(|clause| clause.evaluate(*record))
            })
            .collect();

        msg_debug!(format!(
            "{}: {} of {} records match (query={:?}, tags={:?})",
            self.kind,
            visible.len(),
            records.len(),
            needle,
            tags.as_ref().map(|clause| clause.to_string())
        ));

        Listing {
            kind: self.kind,
            records: visible,
        }
    }
}

/// Filtered, ordered view of a record collection.
#[derive(Debug, Clone)]
pub struct Listing<'a, R> {
    kind: ViewKind,
    records: Vec<&'a R>,
}

impl<'a, R> Listing<'a, R> {
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn records(&self) -> &[&'a R] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The "no results" indicator a view must show instead of a blank list.
    pub fn empty_state(&self) -> Option<Message> {
        if self.records.is_empty() {
            Some(Message::NoMatches(self.kind.noun().to_string()))
        } else {
            None
        }
    }

    /// Stable reordering of the visible records.
    pub fn sort_by<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&&'a R, &&'a R) -> std::cmp::Ordering,
    {
        self.records.sort_by(compare);
        self
    }

    pub fn cloned(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.records.iter().map(|record| (*record).clone()).collect()
    }
}
