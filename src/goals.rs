use crate::error::PipelineError;
use crate::pitch::{MarkerShape, PitchProfile, PitchSurface, Point, render_pitch};
use chrono::NaiveTime;
use log::debug;
use statsbomb_api::{EventDataset, EventRecord, SHOTS};
use tui::style::Color;

/// Positions of the scoring rows in the shots table, in table order.
pub type GoalIndexList = Vec<usize>;

pub const GOAL_MARKER_COLOR: Color = Color::Red;
/// Goal marker diameter in points.
pub const GOAL_MARKER_SIZE: f64 = 6.0;

/// Row positions in the shots table whose outcome is exactly "Goal".
pub fn identify_goals(events: &EventDataset) -> Result<GoalIndexList, PipelineError> {
    let shots = events.shots().ok_or_else(|| PipelineError::missing(SHOTS))?;
    let mut goals = Vec::new();
    for (row, record) in shots.iter().enumerate() {
        let shot = record
            .shot
            .as_ref()
            .ok_or_else(|| PipelineError::missing_in_row("shot", row))?;
        if shot.outcome.is_none() {
            return Err(PipelineError::missing_in_row("shot.outcome", row));
        }
        if shot.is_goal() {
            goals.push(row);
        }
    }
    debug!("match {}: {} goals in {} shots", events.match_id, goals.len(), shots.len());
    Ok(goals)
}

/// Default provider pitch with every goal's start and end marked.
#[allow(dead_code)]
pub fn plot_goals(goal_indices: &[usize], events: &EventDataset) -> Result<PitchSurface, PipelineError> {
    plot_goals_on(&PitchProfile::provider(), goal_indices, events)
}

/// Fresh pitch for `profile` with the goal overlay on top.
pub fn plot_goals_on(
    profile: &PitchProfile,
    goal_indices: &[usize],
    events: &EventDataset,
) -> Result<PitchSurface, PipelineError> {
    let mut surface = render_pitch(profile)?;
    overlay_goals(&mut surface, profile, goal_indices, events)?;
    Ok(surface)
}

/// Mark where each goal was struck from and where the ball ended up.
/// Event coordinates are projected through `profile`, which must be the
/// profile `surface` was rendered with.
pub fn overlay_goals(
    surface: &mut PitchSurface,
    profile: &PitchProfile,
    goal_indices: &[usize],
    events: &EventDataset,
) -> Result<(), PipelineError> {
    let shots = events.shots().ok_or_else(|| PipelineError::missing(SHOTS))?;
    // validate every row before drawing so a bad row leaves no partial overlay
    let mut points = Vec::with_capacity(goal_indices.len() * 2);
    for &row in goal_indices {
        let (start, end) = goal_endpoints(shots, row)?;
        points.push(profile.project(start));
        points.push(profile.project(end));
    }
    for at in points {
        surface.draw_marker(at, MarkerShape::Circle, GOAL_MARKER_SIZE, GOAL_MARKER_COLOR);
    }
    Ok(())
}

fn goal_endpoints(shots: &[EventRecord], row: usize) -> Result<(Point, Point), PipelineError> {
    let record = shots.get(row).ok_or_else(|| PipelineError::missing_in_row("shots", row))?;
    let location = record
        .location
        .as_deref()
        .ok_or_else(|| PipelineError::missing_in_row("location", row))?;
    let end_location = record
        .shot
        .as_ref()
        .and_then(|s| s.end_location.as_deref())
        .ok_or_else(|| PipelineError::missing_in_row("shot.end_location", row))?;
    Ok((planar(location, "location", row)?, planar(end_location, "shot.end_location", row)?))
}

/// First two components of a location; the optional third (height) is ignored.
fn planar(location: &[f64], field: &'static str, row: usize) -> Result<Point, PipelineError> {
    match location {
        [x, y, ..] => Ok((*x, *y)),
        _ => Err(PipelineError::InvalidLocation { field, row, components: location.len() }),
    }
}

// ---------------------------------------------------------------------------
// Goal list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalSummary {
    pub row: usize,
    pub team: String,
    pub player: Option<String>,
    pub period: Option<u8>,
    /// Period-relative clock.
    pub clock: Option<NaiveTime>,
    pub xg: Option<f64>,
}

impl GoalSummary {
    /// "P2 05:44" style label; falls back to what is known.
    pub fn time_label(&self) -> String {
        let clock = self.clock.map(|c| c.format("%M:%S").to_string());
        match (self.period, clock) {
            (Some(p), Some(c)) => format!("P{p} {c}"),
            (Some(p), None) => format!("P{p}"),
            (None, Some(c)) => c,
            (None, None) => "--:--".to_string(),
        }
    }
}

/// Who scored and when, one entry per goal index.
pub fn summarize_goals(goal_indices: &[usize], events: &EventDataset) -> Result<Vec<GoalSummary>, PipelineError> {
    let shots = events.shots().ok_or_else(|| PipelineError::missing(SHOTS))?;
    goal_indices
        .iter()
        .map(|&row| {
            let record = shots.get(row).ok_or_else(|| PipelineError::missing_in_row("shots", row))?;
            Ok(GoalSummary {
                row,
                team: record
                    .possession_team
                    .as_ref()
                    .or(record.team.as_ref())
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                player: record.player.as_ref().map(|p| p.name.clone()),
                period: record.period,
                clock: record.match_clock(),
                xg: record.shot.as_ref().and_then(|s| s.statsbomb_xg),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::{Dimensions, FieldTheme};
    use statsbomb_api::{NamedRef, ShotDetail};

    fn shot(outcome: &str, location: Vec<f64>, end: Vec<f64>) -> EventRecord {
        EventRecord {
            location: Some(location),
            shot: Some(ShotDetail {
                outcome: Some(NamedRef::new(0, outcome)),
                end_location: Some(end),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn dataset(rows: Vec<EventRecord>) -> EventDataset {
        let mut ds = EventDataset::new(267533);
        ds.insert(SHOTS, rows);
        ds
    }

    fn three_shots() -> EventDataset {
        dataset(vec![
            shot("Saved", vec![90.0, 30.0], vec![118.0, 38.0]),
            shot("Goal", vec![100.0, 40.0], vec![120.0, 41.0]),
            shot("Blocked", vec![95.0, 50.0], vec![97.0, 49.0]),
        ])
    }

    #[test]
    fn identifies_single_goal_row() {
        assert_eq!(identify_goals(&three_shots()).unwrap(), vec![1]);
    }

    #[test]
    fn no_goals_is_empty_not_error() {
        let ds = dataset(vec![
            shot("Off T", vec![80.0, 20.0], vec![120.0, 30.0]),
            shot("Saved", vec![90.0, 30.0], vec![118.0, 38.0]),
        ]);
        assert!(identify_goals(&ds).unwrap().is_empty());
        assert!(identify_goals(&dataset(vec![])).unwrap().is_empty());
    }

    #[test]
    fn goal_rows_are_valid_ordered_and_counted() {
        let outcomes = ["Goal", "Saved", "Goal", "goal", "Wayward", "Goal", "Post"];
        let ds = dataset(
            outcomes
                .iter()
                .map(|o| shot(o, vec![100.0, 40.0], vec![120.0, 40.0]))
                .collect(),
        );
        let goals = identify_goals(&ds).unwrap();
        assert_eq!(goals, vec![0, 2, 5]);
        assert!(goals.iter().all(|&i| i < outcomes.len()));
        assert!(goals.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(goals.len(), outcomes.iter().filter(|o| **o == "Goal").count());
    }

    #[test]
    fn missing_shots_category_fails() {
        let err = identify_goals(&EventDataset::new(1)).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "shots", row: None }));
    }

    #[test]
    fn missing_shot_or_outcome_fails() {
        let mut no_shot = three_shots();
        let mut rows = no_shot.shots().unwrap().to_vec();
        rows[2].shot = None;
        no_shot.insert(SHOTS, rows);
        let err = identify_goals(&no_shot).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "shot", row: Some(2) }));

        let mut no_outcome = three_shots();
        let mut rows = no_outcome.shots().unwrap().to_vec();
        rows[0].shot.as_mut().unwrap().outcome = None;
        no_outcome.insert(SHOTS, rows);
        let err = identify_goals(&no_outcome).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "shot.outcome", row: Some(0) }));
    }

    #[test]
    fn plots_start_and_end_of_goal() {
        let ds = three_shots();
        let surface = plot_goals(&[1], &ds).unwrap();
        assert_eq!(
            surface.markers_with_color(GOAL_MARKER_COLOR),
            vec![(100.0, 40.0), (120.0, 41.0)]
        );
    }

    #[test]
    fn empty_indices_give_bare_pitch() {
        let ds = three_shots();
        let surface = plot_goals(&[], &ds).unwrap();
        assert_eq!(surface, render_pitch(&PitchProfile::provider()).unwrap());
        assert!(surface.markers_with_color(GOAL_MARKER_COLOR).is_empty());
    }

    #[test]
    fn overlay_keeps_index_order_and_duplicates() {
        let ds = dataset(vec![
            shot("Goal", vec![100.0, 40.0], vec![120.0, 40.0]),
            shot("Goal", vec![100.0, 40.0], vec![120.0, 40.0]),
        ]);
        let surface = plot_goals(&[1, 0], &ds).unwrap();
        assert_eq!(surface.markers_with_color(GOAL_MARKER_COLOR).len(), 4);
    }

    #[test]
    fn aerial_end_location_uses_ground_position() {
        let ds = dataset(vec![shot("Goal", vec![108.0, 37.5], vec![120.0, 38.2, 1.9])]);
        let surface = plot_goals(&[0], &ds).unwrap();
        assert_eq!(
            surface.markers_with_color(GOAL_MARKER_COLOR),
            vec![(108.0, 37.5), (120.0, 38.2)]
        );
    }

    #[test]
    fn missing_locations_fail_without_partial_overlay() {
        let mut ds = three_shots();
        let mut rows = ds.shots().unwrap().to_vec();
        rows[2].shot.as_mut().unwrap().end_location = None;
        ds.insert(SHOTS, rows);

        let profile = PitchProfile::provider();
        let mut surface = render_pitch(&profile).unwrap();
        let err = overlay_goals(&mut surface, &profile, &[1, 2], &ds).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "shot.end_location", row: Some(2) }));
        assert!(surface.markers_with_color(GOAL_MARKER_COLOR).is_empty());

        let mut ds = three_shots();
        let mut rows = ds.shots().unwrap().to_vec();
        rows[1].location = None;
        ds.insert(SHOTS, rows);
        let err = plot_goals(&[1], &ds).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "location", row: Some(1) }));
    }

    #[test]
    fn short_location_is_invalid() {
        let ds = dataset(vec![shot("Goal", vec![100.0], vec![120.0, 40.0])]);
        let err = plot_goals(&[0], &ds).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InvalidLocation { field: "location", row: 0, components: 1 }
        ));
    }

    #[test]
    fn out_of_range_index_fails() {
        let err = plot_goals(&[7], &three_shots()).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "shots", row: Some(7) }));
    }

    #[test]
    fn overlay_on_meter_pitch_is_projected() {
        let ds = three_shots();
        let profile = PitchProfile::meter(Dimensions::new(110.0, 80.0), FieldTheme::Green);
        let mut surface = render_pitch(&profile).unwrap();
        overlay_goals(&mut surface, &profile, &[1], &ds).unwrap();
        let markers = surface.markers_with_color(GOAL_MARKER_COLOR);
        assert_eq!(markers.len(), 2);
        assert!((markers[0].0 - (100.0 / 120.0 * 110.0 - 55.0)).abs() < 1e-9);
        assert!((markers[0].1 - 0.0).abs() < 1e-9);
        assert!((markers[1].0 - 55.0).abs() < 1e-9);
    }

    #[test]
    fn summaries_carry_team_and_clock() {
        let mut ds = three_shots();
        let mut rows = ds.shots().unwrap().to_vec();
        rows[1].possession_team = Some(NamedRef::new(217, "Barcelona"));
        rows[1].player = Some(NamedRef::new(5503, "Lionel Messi"));
        rows[1].period = Some(2);
        rows[1].timestamp = Some("00:05:44.870".into());
        ds.insert(SHOTS, rows);

        let summaries = summarize_goals(&[1], &ds).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].team, "Barcelona");
        assert_eq!(summaries[0].player.as_deref(), Some("Lionel Messi"));
        assert_eq!(summaries[0].time_label(), "P2 05:44");
    }

    #[test]
    fn time_label_falls_back() {
        let summary = GoalSummary::default();
        assert_eq!(summary.time_label(), "--:--");
        let summary = GoalSummary { period: Some(1), ..Default::default() };
        assert_eq!(summary.time_label(), "P1");
    }
}
