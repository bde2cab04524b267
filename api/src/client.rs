use crate::statsbomb::{WireEvent, WireRef, WireShot};
use crate::{EventDataset, EventRecord, EventSource, NamedRef, ShotDetail, category_name};
use log::debug;
use reqwest::{Client, StatusCode};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const STATSBOMB_OPEN_DATA: &str =
    "https://raw.githubusercontent.com/statsbomb/open-data/master/data";

/// Event client backed by the StatsBomb open-data repository.
#[derive(Debug, Clone)]
pub struct StatsBombApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for StatsBombApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("goalmap/0.1 (terminal goal map)")
                .build()
                .unwrap_or_default(),
            base_url: STATSBOMB_OPEN_DATA.to_owned(),
            timeout: Duration::from_secs(20),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    Decode(serde_json::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Decode(e, source) => write!(f, "Invalid event json in {source}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl StatsBombApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another mirror of the open-data tree.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch every event of a match, split into categories.
    pub async fn fetch_match_events(&self, match_id: u64) -> ApiResult<EventDataset> {
        let url = format!("{}/events/{match_id}.json", self.base_url);
        debug!("fetching events for match {match_id} from {url}");
        let raw: Vec<WireEvent> = self.get(&url).await?;
        let dataset = split_events(match_id, raw);
        debug!(
            "match {match_id}: {} events in {} categories",
            dataset.event_count(),
            dataset.category_names().count()
        );
        Ok(dataset)
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("no data at {url}")));
        }

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => Err(ApiError::Api(e, url.to_owned())),
        }
    }
}

impl EventSource for StatsBombApi {
    async fn fetch_events(&self, match_id: u64) -> ApiResult<EventDataset> {
        self.fetch_match_events(match_id).await
    }
}

/// Events read from a local copy of an open-data events file.
#[derive(Debug, Clone)]
pub struct LocalEventFile {
    path: PathBuf,
}

impl LocalEventFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for LocalEventFile {
    async fn fetch_events(&self, match_id: u64) -> ApiResult<EventDataset> {
        let display = self.path.display().to_string();
        debug!("loading events for match {match_id} from {display}");
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| ApiError::NotFound(format!("could not read {display}: {e}")))?;
        parse_events(match_id, &content, &display)
    }
}

/// Decode an open-data events document.
pub fn parse_events(match_id: u64, json: &str, source: &str) -> ApiResult<EventDataset> {
    let raw: Vec<WireEvent> =
        serde_json::from_str(json).map_err(|e| ApiError::Decode(e, source.to_owned()))?;
    Ok(split_events(match_id, raw))
}

// ---------------------------------------------------------------------------
// Mapping: StatsBomb wire types → clean domain types
// ---------------------------------------------------------------------------

/// Bucket the flat event array by event type. Events without a type name are
/// dropped; everything else keeps its position relative to its category.
fn split_events(match_id: u64, raw: Vec<WireEvent>) -> EventDataset {
    let mut dataset = EventDataset::new(match_id);
    for event in raw {
        let Some(type_name) = event.event_type.as_ref().and_then(|t| t.name.as_deref()) else {
            continue;
        };
        let category = category_name(type_name);
        dataset.push(category, map_event(event));
    }
    dataset
}

fn map_event(e: WireEvent) -> EventRecord {
    EventRecord {
        id: e.id.unwrap_or_default(),
        index: e.index.unwrap_or_default(),
        period: e.period,
        timestamp: e.timestamp,
        minute: e.minute,
        second: e.second,
        possession_team: e.possession_team.and_then(map_ref),
        team: e.team.and_then(map_ref),
        player: e.player.and_then(map_ref),
        location: e.location,
        shot: e.shot.map(map_shot),
    }
}

fn map_shot(s: WireShot) -> ShotDetail {
    ShotDetail {
        outcome: s.outcome.and_then(map_ref),
        end_location: s.end_location,
        statsbomb_xg: s.statsbomb_xg,
        body_part: s.body_part.and_then(map_ref),
    }
}

/// A reference without a name carries nothing we can display or match on.
fn map_ref(r: WireRef) -> Option<NamedRef> {
    let name = r.name?;
    Some(NamedRef { id: r.id.unwrap_or_default(), name })
}
