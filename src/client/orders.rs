use tracing::instrument;

use super::ApiClient;
use crate::errors::DashboardError;
use crate::models::{Order, OrderStatus};

impl ApiClient {
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, DashboardError> {
        self.get_json::<_, ()>("/orders/", None).await
    }

    /// Updates an order's status. The backend expects the status in the
    /// query string, not the body.
    #[instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> Result<(), DashboardError> {
        self.patch_empty::<(), _>(
            &format!("/orders/{}/status", order_id),
            None,
            Some(&[("status", status.to_string())]),
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn reset_order_statuses(&self) -> Result<(), DashboardError> {
        self.post_empty("/orders/reset-status").await
    }
}
