//! StatsBomb open-data raw wire types: serde shapes for the per-match events file.
//! These map to the clean domain types via the mapping functions in client.rs.
//! Endpoint: https://raw.githubusercontent.com/statsbomb/open-data/master/data/events/{match_id}.json
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct WireRef {
    pub id: Option<u32>,
    pub name: Option<String>,
}

/// One element of the top-level events array. Every event carries a `type`;
/// the type-specific payload sits under a key named after it (`shot`, `pass`, ...).
#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireEvent {
    pub id: Option<String>,
    pub index: Option<u32>,
    pub period: Option<u8>,
    pub timestamp: Option<String>, // "00:23:11.187", resets every period
    pub minute: Option<u16>,
    pub second: Option<u8>,
    #[serde(rename = "type")]
    pub event_type: Option<WireRef>,
    pub possession_team: Option<WireRef>,
    pub team: Option<WireRef>,
    pub player: Option<WireRef>,
    pub location: Option<Vec<f64>>,
    pub shot: Option<WireShot>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireShot {
    pub outcome: Option<WireRef>,
    /// Two components, or three when the shot ends in the air (goal-mouth height).
    pub end_location: Option<Vec<f64>>,
    pub statsbomb_xg: Option<f64>,
    pub body_part: Option<WireRef>,
    pub technique: Option<WireRef>,
}
