//! Maintenance record types shown in the list views.
//!
//! Every record kind implements [`Record`], which is the only surface the
//! filter engine and the classification rules see: a stable identifier, a
//! display name and named field lookups returning a [`FieldValue`].
//!
//! Categorical attributes are modelled as closed enums with an `Other`
//! variant, so values the data source invents are kept verbatim instead of
//! being rejected. Classification later maps them to the neutral colour.
//!
//! ## Field names
//!
//! | View      | Text fields                                  | Numeric fields                                   |
//! |-----------|----------------------------------------------|--------------------------------------------------|
//! | machines  | code, name, status, type, location, manufacturer, model | id, availability                      |
//! | issues    | title, machine_id, priority, status, type, ... | id                                             |
//! | forum     | title, content, channel, author; list: tags  | votes, answers, views                            |
//! | downtime  | id, name, status, type                       | total_downtime, incidents, mtbf                  |
//! | parts     | name, category, sku, status, location; list: compatible_machines | current_stock, min_threshold, max_stock, unit_price |
//! | orders    | id, supplier, status; list: items            | total_amount                                     |

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a categorical attribute: known values as variants (matched
/// ignoring ASCII case), anything else preserved in `Other`. Serialized as
/// the canonical string value.
macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $(
                    if value.eq_ignore_ascii_case($text) {
                        return Self::$variant;
                    }
                )+
                Self::Other(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

categorical!(MachineStatus {
    Operational => "operational",
    Maintenance => "maintenance",
    Error => "error",
});

categorical!(MachineType {
    Cnc => "CNC",
    Drilling => "Drilling",
    Assembly => "Assembly",
});

categorical!(Priority {
    Critical => "critical",
    High => "high",
    Medium => "medium",
    Low => "low",
});

categorical!(IssueStatus {
    Open => "open",
    InProgress => "in_progress",
    Resolved => "resolved",
    Closed => "closed",
});

categorical!(IssueType {
    Mechanical => "mechanical",
    Electrical => "electrical",
    Maintenance => "maintenance",
});

categorical!(DowntimeType {
    Preventive => "Preventive",
    Breakdown => "Breakdown",
});

categorical!(StockStatus {
    Normal => "normal",
    Low => "low",
    Critical => "critical",
});

categorical!(OrderStatus {
    Pending => "pending",
    InTransit => "in-transit",
    Delivered => "delivered",
});

/// The list views a record can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Machines,
    Issues,
    Forum,
    Downtime,
    Parts,
    Orders,
}

impl ViewKind {
    pub const ALL: [ViewKind; 6] = [
        ViewKind::Machines,
        ViewKind::Issues,
        ViewKind::Forum,
        ViewKind::Downtime,
        ViewKind::Parts,
        ViewKind::Orders,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Machines => "machines",
            ViewKind::Issues => "issues",
            ViewKind::Forum => "forum",
            ViewKind::Downtime => "downtime",
            ViewKind::Parts => "parts",
            ViewKind::Orders => "orders",
        }
    }

    /// Human-readable noun used in headers and empty-state messages.
    pub fn noun(&self) -> &'static str {
        match self {
            ViewKind::Machines => "machines",
            ViewKind::Issues => "issues",
            ViewKind::Forum => "questions",
            ViewKind::Downtime => "downtime entries",
            ViewKind::Parts => "spare parts",
            ViewKind::Orders => "purchase orders",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a named record field as seen by predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Flag(bool),
    List(Vec<&'a str>),
}

/// One materialized dataset, tagged with its view kind.
#[derive(Debug, Clone)]
pub enum RecordSet {
    Machines(Vec<Machine>),
    Issues(Vec<Issue>),
    Forum(Vec<ForumQuestion>),
    Downtime(Vec<DowntimeEntry>),
    Parts(Vec<SparePart>),
    Orders(Vec<PurchaseOrder>),
}

impl RecordSet {
    pub fn kind(&self) -> ViewKind {
        match self {
            RecordSet::Machines(_) => ViewKind::Machines,
            RecordSet::Issues(_) => ViewKind::Issues,
            RecordSet::Forum(_) => ViewKind::Forum,
            RecordSet::Downtime(_) => ViewKind::Downtime,
            RecordSet::Parts(_) => ViewKind::Parts,
            RecordSet::Orders(_) => ViewKind::Orders,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordSet::Machines(r) => r.len(),
            RecordSet::Issues(r) => r.len(),
            RecordSet::Forum(r) => r.len(),
            RecordSet::Downtime(r) => r.len(),
            RecordSet::Parts(r) => r.len(),
            RecordSet::Orders(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serializes every record as `(id, name, json payload)` rows.
    pub fn rows(&self) -> serde_json::Result<Vec<(String, String, String)>> {
        fn encode<R: Record>(records: &[R]) -> serde_json::Result<Vec<(String, String, String)>> {
            records
                .iter()
                .map(|r| Ok((r.id(), r.display_name().to_string(), serde_json::to_string(r)?)))
                .collect()
        }
        match self {
            RecordSet::Machines(r) => encode(r),
            RecordSet::Issues(r) => encode(r),
            RecordSet::Forum(r) => encode(r),
            RecordSet::Downtime(r) => encode(r),
            RecordSet::Parts(r) => encode(r),
            RecordSet::Orders(r) => encode(r),
        }
    }

    /// Rebuilds a set of the given kind from json payloads.
    pub fn from_payloads<'a>(kind: ViewKind, payloads: impl IntoIterator<Item = &'a str>) -> serde_json::Result<Self> {
        fn decode<'a, R: Record>(payloads: impl IntoIterator<Item = &'a str>) -> serde_json::Result<RecordSet> {
            let records = payloads
                .into_iter()
                .map(serde_json::from_str::<R>)
                .collect::<serde_json::Result<Vec<R>>>()?;
            Ok(R::into_set(records))
        }
        match kind {
            ViewKind::Machines => decode::<Machine>(payloads),
            ViewKind::Issues => decode::<Issue>(payloads),
            ViewKind::Forum => decode::<ForumQuestion>(payloads),
            ViewKind::Downtime => decode::<DowntimeEntry>(payloads),
            ViewKind::Parts => decode::<SparePart>(payloads),
            ViewKind::Orders => decode::<PurchaseOrder>(payloads),
        }
    }
}

/// A domain item displayed in one of the list views.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const KIND: ViewKind;

    /// Identifier, unique within a collection.
    fn id(&self) -> String;

    fn display_name(&self) -> &str;

    /// Looks up a field by name. Unknown names yield `None`.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    fn from_set(set: RecordSet) -> Option<Vec<Self>>;

    fn into_set(records: Vec<Self>) -> RecordSet;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: u32,
    pub code: String,
    pub name: String,
    pub status: MachineStatus,
    pub location: String,
    pub manufacturer: String,
    #[serde(rename = "type")]
    pub machine_type: MachineType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_maintenance: Option<NaiveDate>,
    /// Share of planned time the machine was available, in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<f64>,
}

impl Record for Machine {
    const KIND: ViewKind = ViewKind::Machines;

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "code" => Some(FieldValue::Text(&self.code)),
            "name" => Some(FieldValue::Text(&self.name)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "type" => Some(FieldValue::Text(self.machine_type.as_str())),
            "location" => Some(FieldValue::Text(&self.location)),
            "manufacturer" => Some(FieldValue::Text(&self.manufacturer)),
            "model" => self.model.as_deref().map(FieldValue::Text),
            "availability" => self.availability.map(FieldValue::Number),
            _ => None,
        }
    }

    fn from_set(set: RecordSet) -> Option<Vec<Self>> {
        match set {
            RecordSet::Machines(records) => Some(records),
            _ => None,
        }
    }

    fn into_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Machines(records)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: u32,
    pub title: String,
    pub machine_id: String,
    pub priority: Priority,
    pub status: IssueStatus,
    pub reporter: String,
    pub assignee: String,
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    #[serde(default)]
    pub description: String,
}

impl Record for Issue {
    const KIND: ViewKind = ViewKind::Issues;

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "title" => Some(FieldValue::Text(&self.title)),
            "machine_id" => Some(FieldValue::Text(&self.machine_id)),
            "priority" => Some(FieldValue::Text(self.priority.as_str())),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "type" => Some(FieldValue::Text(self.issue_type.as_str())),
            "reporter" => Some(FieldValue::Text(&self.reporter)),
            "assignee" => Some(FieldValue::Text(&self.assignee)),
            "description" => Some(FieldValue::Text(&self.description)),
            "resolved" => Some(FieldValue::Flag(self.resolved_at.is_some())),
            _ => None,
        }
    }

    fn from_set(set: RecordSet) -> Option<Vec<Self>> {
        match set {
            RecordSet::Issues(records) => Some(records),
            _ => None,
        }
    }

    fn into_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Issues(records)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumQuestion {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub channel: String,
    pub timestamp: NaiveDate,
    pub last_activity: NaiveDate,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub answers: u32,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub solved: bool,
    #[serde(default)]
    pub bookmarked: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Record for ForumQuestion {
    const KIND: ViewKind = ViewKind::Forum;

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "title" => Some(FieldValue::Text(&self.title)),
            "content" => Some(FieldValue::Text(&self.content)),
            "author" => Some(FieldValue::Text(&self.author.name)),
            "channel" => Some(FieldValue::Text(&self.channel)),
            "votes" => Some(FieldValue::Number(self.votes as f64)),
            "answers" => Some(FieldValue::Number(self.answers as f64)),
            "views" => Some(FieldValue::Number(self.views as f64)),
            "tags" => Some(FieldValue::List(self.tags.iter().map(String::as_str).collect())),
            "solved" => Some(FieldValue::Flag(self.solved)),
            "bookmarked" => Some(FieldValue::Flag(self.bookmarked)),
            "featured" => Some(FieldValue::Flag(self.featured)),
            _ => None,
        }
    }

    fn from_set(set: RecordSet) -> Option<Vec<Self>> {
        match set {
            RecordSet::Forum(records) => Some(records),
            _ => None,
        }
    }

    fn into_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Forum(records)
    }
}

/// Aggregated downtime for one machine. Durations are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DowntimeEntry {
    pub id: String,
    pub name: String,
    pub total_downtime: u32,
    #[serde(default)]
    pub incidents: u32,
    #[serde(default)]
    pub mtbf: u32,
    pub last_incident: NaiveDate,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "type")]
    pub downtime_type: DowntimeType,
}

impl Record for DowntimeEntry {
    const KIND: ViewKind = ViewKind::Downtime;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "total_downtime" => Some(FieldValue::Number(self.total_downtime as f64)),
            "incidents" => Some(FieldValue::Number(self.incidents as f64)),
            "mtbf" => Some(FieldValue::Number(self.mtbf as f64)),
            "status" => Some(FieldValue::Text(&self.status)),
            "type" => Some(FieldValue::Text(self.downtime_type.as_str())),
            _ => None,
        }
    }

    fn from_set(set: RecordSet) -> Option<Vec<Self>> {
        match set {
            RecordSet::Downtime(records) => Some(records),
            _ => None,
        }
    }

    fn into_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Downtime(records)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub sku: String,
    pub current_stock: u32,
    pub min_threshold: u32,
    pub max_stock: u32,
    pub unit_price: f64,
    pub location: String,
    pub last_restocked: NaiveDate,
    pub status: StockStatus,
    #[serde(default)]
    pub compatible_machines: Vec<String>,
}

impl Record for SparePart {
    const KIND: ViewKind = ViewKind::Parts;

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Number(self.id as f64)),
            "name" => Some(FieldValue::Text(&self.name)),
            "category" => Some(FieldValue::Text(&self.category)),
            "sku" => Some(FieldValue::Text(&self.sku)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "location" => Some(FieldValue::Text(&self.location)),
            "current_stock" => Some(FieldValue::Number(self.current_stock as f64)),
            "min_threshold" => Some(FieldValue::Number(self.min_threshold as f64)),
            "max_stock" => Some(FieldValue::Number(self.max_stock as f64)),
            "unit_price" => Some(FieldValue::Number(self.unit_price)),
            "compatible_machines" => Some(FieldValue::List(self.compatible_machines.iter().map(String::as_str).collect())),
            _ => None,
        }
    }

    fn from_set(set: RecordSet) -> Option<Vec<Self>> {
        match set {
            RecordSet::Parts(records) => Some(records),
            _ => None,
        }
    }

    fn into_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Parts(records)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub date: NaiveDate,
    pub supplier: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub expected_delivery: NaiveDate,
}

impl PurchaseOrder {
    /// Sum of line items, independent of the stored total.
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|item| item.quantity as f64 * item.price).sum()
    }
}

impl Record for PurchaseOrder {
    const KIND: ViewKind = ViewKind::Orders;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Text(&self.id)),
            "supplier" => Some(FieldValue::Text(&self.supplier)),
            "status" => Some(FieldValue::Text(self.status.as_str())),
            "total_amount" => Some(FieldValue::Number(self.total_amount)),
            "items" => Some(FieldValue::List(self.items.iter().map(|item| item.name.as_str()).collect())),
            _ => None,
        }
    }

    fn from_set(set: RecordSet) -> Option<Vec<Self>> {
        match set {
            RecordSet::Orders(records) => Some(records),
            _ => None,
        }
    }

    fn into_set(records: Vec<Self>) -> RecordSet {
        RecordSet::Orders(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_categorical_values_are_preserved() {
        let status: IssueStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(status, IssueStatus::Other("on_hold".to_string()));
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"on_hold\"");
    }

    #[test]
    fn known_categorical_values_map_to_variants() {
        assert_eq!(OrderStatus::from("in-transit"), OrderStatus::InTransit);
        assert_eq!(MachineType::from("CNC").as_str(), "CNC");
    }

    #[test]
    fn categorical_values_ignore_case() {
        assert_eq!(Priority::from("Critical"), Priority::Critical);
        assert_eq!(MachineType::from("cnc").as_str(), "CNC");
        assert_eq!(OrderStatus::from("IN-TRANSIT"), OrderStatus::InTransit);
    }
}
