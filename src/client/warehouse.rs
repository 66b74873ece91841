use tracing::instrument;

use super::ApiClient;
use crate::errors::DashboardError;
use crate::models::{Location, WarehouseMap};

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn list_locations(&self) -> Result<Vec<Location>, DashboardError> {
        self.get_json::<_, ()>("/warehouse/locations", None).await
    }

    #[instrument(skip(self))]
    pub async fn list_maps(&self) -> Result<Vec<WarehouseMap>, DashboardError> {
        self.get_json::<_, ()>("/warehouse/maps", None).await
    }
}
