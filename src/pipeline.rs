use crate::error::PipelineError;
use crate::goals::{GoalSummary, identify_goals, plot_goals_on, summarize_goals};
use crate::pitch::{PitchProfile, PitchSurface};
use log::info;
use statsbomb_api::{EventDataset, EventSource};

/// Everything one run needs to know; nothing is read from globals.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub match_id: u64,
    pub profile: PitchProfile,
}

/// The finished figure handed to a display sink.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchFigure {
    pub match_id: u64,
    pub profile: PitchProfile,
    pub surface: PitchSurface,
    pub goals: Vec<GoalSummary>,
    pub shot_count: usize,
}

/// Fetch, then build the figure. Any failure aborts before a figure exists.
pub async fn run<S: EventSource>(source: &S, config: &PipelineConfig) -> Result<MatchFigure, PipelineError> {
    let events = source.fetch_events(config.match_id).await?;
    build_figure(&events, &config.profile)
}

/// Extract goals from one dataset snapshot and draw them on a fresh pitch.
pub fn build_figure(events: &EventDataset, profile: &PitchProfile) -> Result<MatchFigure, PipelineError> {
    let goal_indices = identify_goals(events)?;
    let surface = plot_goals_on(profile, &goal_indices, events)?;
    let goals = summarize_goals(&goal_indices, events)?;
    let shot_count = events.shots().map_or(0, <[_]>::len);

    info!(
        "match {}: plotted {} goals from {} shots on the {} pitch",
        events.match_id,
        goals.len(),
        shot_count,
        profile.label()
    );

    Ok(MatchFigure { match_id: events.match_id, profile: profile.clone(), surface, goals, shot_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::GOAL_MARKER_COLOR;
    use statsbomb_api::client::{ApiError, ApiResult};
    use statsbomb_api::{EventRecord, NamedRef, SHOTS, ShotDetail};

    struct StaticSource(EventDataset);

    impl EventSource for StaticSource {
        async fn fetch_events(&self, match_id: u64) -> ApiResult<EventDataset> {
            let mut ds = self.0.clone();
            ds.match_id = match_id;
            Ok(ds)
        }
    }

    struct FailingSource;

    impl EventSource for FailingSource {
        async fn fetch_events(&self, match_id: u64) -> ApiResult<EventDataset> {
            Err(ApiError::NotFound(format!("match {match_id}")))
        }
    }

    fn goal_row(team: &str) -> EventRecord {
        EventRecord {
            possession_team: Some(NamedRef::new(1, team)),
            location: Some(vec![100.0, 40.0]),
            shot: Some(ShotDetail {
                outcome: Some(NamedRef::new(97, "Goal")),
                end_location: Some(vec![120.0, 41.0]),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn config() -> PipelineConfig {
        PipelineConfig { match_id: 267533, profile: PitchProfile::provider() }
    }

    #[tokio::test]
    async fn run_builds_figure_from_source() {
        let mut ds = EventDataset::new(0);
        ds.insert(SHOTS, vec![goal_row("Barcelona")]);
        let figure = run(&StaticSource(ds), &config()).await.unwrap();
        assert_eq!(figure.match_id, 267533);
        assert_eq!(figure.shot_count, 1);
        assert_eq!(figure.goals.len(), 1);
        assert_eq!(figure.goals[0].team, "Barcelona");
        assert_eq!(figure.surface.markers_with_color(GOAL_MARKER_COLOR).len(), 2);
    }

    #[tokio::test]
    async fn provider_failure_surfaces_unmodified() {
        let err = run(&FailingSource, &config()).await.unwrap_err();
        assert!(matches!(err, PipelineError::ProviderFailure(ApiError::NotFound(ref m)) if m == "match 267533"));
    }

    #[tokio::test]
    async fn missing_shots_aborts_before_figure() {
        let err = run(&StaticSource(EventDataset::new(0)), &config()).await.unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { field: "shots", .. }));
    }

    #[test]
    fn invalid_profile_aborts() {
        let mut ds = EventDataset::new(5);
        ds.insert(SHOTS, vec![goal_row("Alavés")]);
        let profile = PitchProfile::Provider { dimensions: crate::pitch::Dimensions::new(-1.0, 80.0) };
        assert!(matches!(
            build_figure(&ds, &profile),
            Err(PipelineError::InvalidDimensions { .. })
        ));
    }
}
