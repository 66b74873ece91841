use serde_json::json;
use tracing::instrument;

use super::ApiClient;
use crate::errors::DashboardError;
use crate::models::{Forklift, ForkliftStatus, NewForklift};

impl ApiClient {
    /// Lists forklifts, optionally filtered by status on the backend side.
    #[instrument(skip(self))]
    pub async fn list_forklifts(
        &self,
        status: Option<ForkliftStatus>,
    ) -> Result<Vec<Forklift>, DashboardError> {
        let query = status.map(|status| [("status", status.to_string())]);
        self.get_json("/forklifts/", query.as_ref()).await
    }

    #[instrument(skip(self))]
    pub async fn block_forklift(&self, forklift_id: i64) -> Result<(), DashboardError> {
        self.post_empty(&format!("/forklifts/{}/block", forklift_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn unblock_forklift(&self, forklift_id: i64) -> Result<(), DashboardError> {
        self.post_empty(&format!("/forklifts/{}/unblock", forklift_id))
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_forklift_status(
        &self,
        forklift_id: i64,
        status: ForkliftStatus,
    ) -> Result<(), DashboardError> {
        self.patch_empty::<_, ()>(
            &format!("/forklifts/{}/status", forklift_id),
            Some(&json!({ "status": status })),
            None,
        )
        .await
    }

    /// Creates a forklift. The payload is validated locally before any
    /// request is made; a validation failure is synchronous and non-fatal.
    #[instrument(skip(self, forklift), fields(name = %forklift.name))]
    pub async fn create_forklift(
        &self,
        forklift: &NewForklift,
    ) -> Result<Forklift, DashboardError> {
        use validator::Validate;
        forklift.validate()?;
        self.post_json("/forklifts/", forklift).await
    }

    #[instrument(skip(self))]
    pub async fn reset_forklift_statuses(&self) -> Result<(), DashboardError> {
        self.post_empty("/forklifts/reset-status").await
    }
}
