use tracing::instrument;

use super::ApiClient;
use crate::errors::DashboardError;
use crate::models::Plan;

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn list_plans(&self) -> Result<Vec<Plan>, DashboardError> {
        self.get_json::<_, ()>("/plans/all", None).await
    }

    /// Re-anchors all plan windows on the backend (used by the "reset times"
    /// control on the simulation page).
    #[instrument(skip(self))]
    pub async fn reset_plan_times(&self) -> Result<(), DashboardError> {
        self.post_empty("/plans/reset_times").await
    }
}
