use thiserror::Error;

/// Errors surfaced by the dashboard.
///
/// Remote failures come in exactly two kinds: transport-level errors and
/// non-2xx responses. Both halt the view that triggered them; there is no
/// retry or partial-failure recovery.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status} for {endpoint}")]
    Api { status: u16, endpoint: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    pub fn api(status: reqwest::StatusCode, endpoint: impl Into<String>) -> Self {
        Self::Api {
            status: status.as_u16(),
            endpoint: endpoint.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<validator::ValidationErrors> for DashboardError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
