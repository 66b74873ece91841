use crate::models::{Forklift, ForkliftStatus, Order, OrderStatus, Plan};

/// The id of the forklift assigned to an order, via the first plan that
/// references it.
pub fn assigned_forklift_id(order_id: i64, plans: &[Plan]) -> Option<i64> {
    plans
        .iter()
        .find(|plan| plan.order_id == Some(order_id))
        .and_then(|plan| plan.forklift_id)
}

/// Sidebar filter over the fetched order list. Pure predicate; no
/// pagination, no backend-side filtering.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub forklift_id: Option<i64>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order, plans: &[Plan]) -> bool {
        if let Some(status) = self.status {
            if order.status != status {
                return false;
            }
        }
        if let Some(forklift_id) = self.forklift_id {
            if assigned_forklift_id(order.id, plans) != Some(forklift_id) {
                return false;
            }
        }
        true
    }
}

/// Forklift status filter for the status sidebar; `None` shows everything.
pub fn forklift_matches(forklift: &Forklift, filter: Option<ForkliftStatus>) -> bool {
    filter.map_or(true, |status| forklift.status == status)
}
