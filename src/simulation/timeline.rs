use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::SiteMap;
use crate::models::{GridPoint, Order, Plan};

/// One usable plan window in the relative time domain, with its order's
/// endpoints already resolved to grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanWindow {
    pub start: f64,
    pub end: f64,
    pub order_id: i64,
    pub pickup: GridPoint,
    pub delivery: GridPoint,
}

/// The resolved simulation input: per-forklift plan windows in seconds
/// relative to the earliest plan timestamp.
///
/// Plans missing a forklift, order, timestamp, or a resolvable endpoint are
/// skipped, as are windows that end before they start. The grid degrades to
/// an idle depot rather than failing.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    origin: Option<DateTime<Utc>>,
    span: f64,
    windows: HashMap<i64, Vec<PlanWindow>>,
}

impl Timeline {
    pub fn resolve(plans: &[Plan], orders: &[Order], site: &SiteMap) -> Self {
        let origin = plans
            .iter()
            .flat_map(|plan| [plan.start_time, plan.end_time])
            .flatten()
            .min();
        let Some(origin) = origin else {
            return Self::default();
        };

        let order_index: HashMap<i64, &Order> =
            orders.iter().map(|order| (order.id, order)).collect();

        let mut windows: HashMap<i64, Vec<PlanWindow>> = HashMap::new();
        let mut span: f64 = 0.0;
        for plan in plans {
            let Some(window) = resolve_window(plan, origin, &order_index, site) else {
                debug!(plan_id = plan.id, "skipping unresolvable plan");
                continue;
            };
            span = span.max(window.end);
            windows
                .entry(plan.forklift_id.unwrap_or_default())
                .or_default()
                .push(window);
        }
        for list in windows.values_mut() {
            list.sort_by(|a, b| a.start.total_cmp(&b.start));
        }

        Self {
            origin: Some(origin),
            span,
            windows,
        }
    }

    /// Upper clock bound: the distance from the earliest to the latest plan
    /// timestamp, with the documented fallback of 1 when no plans resolve.
    pub fn span(&self) -> f64 {
        if self.span > 0.0 {
            self.span
        } else {
            1.0
        }
    }

    /// The absolute timestamp that relative time 0 corresponds to.
    pub fn origin(&self) -> Option<DateTime<Utc>> {
        self.origin
    }

    /// This forklift's plan windows, sorted ascending by start time.
    pub fn windows_for(&self, forklift_id: i64) -> &[PlanWindow] {
        self.windows
            .get(&forklift_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

fn seconds_from(origin: DateTime<Utc>, ts: DateTime<Utc>) -> f64 {
    (ts - origin).num_milliseconds() as f64 / 1000.0
}

fn resolve_window(
    plan: &Plan,
    origin: DateTime<Utc>,
    orders: &HashMap<i64, &Order>,
    site: &SiteMap,
) -> Option<PlanWindow> {
    plan.forklift_id?;
    let order = orders.get(&plan.order_id?)?;
    let start = seconds_from(origin, plan.start_time?);
    let end = seconds_from(origin, plan.end_time?);
    if end < start {
        return None;
    }
    Some(PlanWindow {
        start,
        end,
        order_id: order.id,
        pickup: site.cell(order.pickup_location_id)?,
        delivery: site.cell(order.delivery_location_id)?,
    })
}
