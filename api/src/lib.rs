pub mod client;
pub mod statsbomb;

use chrono::NaiveTime;
use std::collections::BTreeMap;
use std::future::Future;

use crate::client::ApiResult;

// ---------------------------------------------------------------------------
// Domain types: clean model, independent of the StatsBomb wire format
// ---------------------------------------------------------------------------

/// Name of the category holding shot events.
pub const SHOTS: &str = "shots";

/// Outcome name StatsBomb records for a scored shot.
pub const GOAL_OUTCOME: &str = "Goal";

/// Everything that happened in one match, split by event category
/// (`"shots"`, `"passes"`, ...). Rows keep the order the provider sent them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDataset {
    pub match_id: u64,
    categories: BTreeMap<String, Vec<EventRecord>>,
}

impl EventDataset {
    pub fn new(match_id: u64) -> Self {
        Self { match_id, categories: BTreeMap::new() }
    }

    /// Append a record to the end of its category table.
    pub fn push(&mut self, category: impl Into<String>, record: EventRecord) {
        self.categories.entry(category.into()).or_default().push(record);
    }

    /// Replace a whole category table.
    pub fn insert(&mut self, category: impl Into<String>, records: Vec<EventRecord>) {
        self.categories.insert(category.into(), records);
    }

    pub fn category(&self, name: &str) -> Option<&[EventRecord]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    pub fn shots(&self) -> Option<&[EventRecord]> {
        self.category(SHOTS)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Total number of events across all categories.
    pub fn event_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedRef {
    pub id: u32,
    pub name: String,
}

impl NamedRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRecord {
    pub id: String,
    pub index: u32,
    pub period: Option<u8>,
    pub timestamp: Option<String>,
    pub minute: Option<u16>,
    pub second: Option<u8>,
    pub possession_team: Option<NamedRef>,
    pub team: Option<NamedRef>,
    pub player: Option<NamedRef>,
    pub location: Option<Vec<f64>>,
    pub shot: Option<ShotDetail>,
}

impl EventRecord {
    /// Period-relative clock parsed from `timestamp` ("00:23:11.187").
    pub fn match_clock(&self) -> Option<NaiveTime> {
        let raw = self.timestamp.as_deref()?;
        NaiveTime::parse_from_str(raw, "%H:%M:%S%.f").ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotDetail {
    pub outcome: Option<NamedRef>,
    pub end_location: Option<Vec<f64>>,
    pub statsbomb_xg: Option<f64>,
    pub body_part: Option<NamedRef>,
}

impl ShotDetail {
    pub fn is_goal(&self) -> bool {
        self.outcome.as_ref().is_some_and(|o| o.name == GOAL_OUTCOME)
    }
}

/// Derive the category key for an event type name, the way the StatsBomb
/// python client splits events: `"Shot"` → `"shots"`, `"Ball Receipt*"` →
/// `"ball_receipts"`, `"Pass"` → `"passes"`.
pub fn category_name(event_type: &str) -> String {
    let mut key: String = event_type
        .trim()
        .trim_end_matches('*')
        .to_lowercase()
        .replace([' ', '-', '/'], "_");
    if key.ends_with('s') || key.ends_with('x') || key.ends_with("ch") || key.ends_with("sh") {
        key.push_str("es");
    } else {
        key.push('s');
    }
    key
}

// ---------------------------------------------------------------------------
// Event source seam
// ---------------------------------------------------------------------------

/// Anything that can hand over the event dataset of a match.
pub trait EventSource {
    fn fetch_events(&self, match_id: u64) -> impl Future<Output = ApiResult<EventDataset>> + Send;
}
