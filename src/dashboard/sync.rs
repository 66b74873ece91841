use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::errors::DashboardError;
use crate::models::{Order, OrderStatus};

/// Pushes simulation-derived order statuses back to the backend.
///
/// The push is an explicit operation invoked from the tick loop, never from
/// rendering. It is diff-gated: an order is PATCHed only when its derived
/// status differs from the last value this sync saw (seeded from the
/// backend's own value on first sight), so a paused clock generates no
/// traffic. Disabled entirely via `push_order_status = false`.
pub struct OrderStatusSync {
    enabled: bool,
    seen: HashMap<i64, OrderStatus>,
}

impl OrderStatusSync {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            seen: HashMap::new(),
        }
    }

    /// Pushes every changed status; returns how many orders were PATCHed.
    #[instrument(skip_all)]
    pub async fn push(
        &mut self,
        client: &ApiClient,
        orders: &[Order],
        derived: &HashMap<i64, OrderStatus>,
    ) -> Result<usize, DashboardError> {
        if !self.enabled {
            return Ok(0);
        }
        let mut pushed = 0;
        for order in orders {
            let Some(status) = derived.get(&order.id).copied() else {
                continue;
            };
            let known = self.seen.get(&order.id).copied().unwrap_or(order.status);
            if status != known {
                client.update_order_status(order.id, status).await?;
                debug!(order_id = order.id, status = %status, "pushed derived order status");
                pushed += 1;
            }
            self.seen.insert(order.id, status);
        }
        Ok(pushed)
    }

    /// Forgets everything pushed so far; used when the clock is reset.
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
