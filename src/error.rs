use statsbomb_api::client::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("missing field `{field}`{}", row_suffix(.row))]
    MissingField { field: &'static str, row: Option<usize> },

    #[error("field `{field}` in shots row {row} has {components} component(s), need at least 2")]
    InvalidLocation { field: &'static str, row: usize, components: usize },

    #[error("invalid pitch dimensions {length}x{width}: {reason}")]
    InvalidDimensions { length: f64, width: f64, reason: &'static str },

    #[error("unknown field theme `{0}` (expected `green` or `white`)")]
    InvalidTheme(String),

    #[error("event provider failed: {0}")]
    ProviderFailure(#[from] ApiError),
}

impl PipelineError {
    pub fn missing(field: &'static str) -> Self {
        PipelineError::MissingField { field, row: None }
    }

    pub fn missing_in_row(field: &'static str, row: usize) -> Self {
        PipelineError::MissingField { field, row: Some(row) }
    }
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|r| format!(" in shots row {r}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_row() {
        assert_eq!(
            PipelineError::missing_in_row("shot.outcome", 3).to_string(),
            "missing field `shot.outcome` in shots row 3"
        );
        assert_eq!(PipelineError::missing("shots").to_string(), "missing field `shots`");
    }

    #[test]
    fn provider_failure_wraps_api_error() {
        let err: PipelineError = ApiError::NotFound("no data".into()).into();
        assert_eq!(err.to_string(), "event provider failed: Not found: no data");
    }
}
