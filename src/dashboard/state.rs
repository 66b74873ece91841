use std::collections::HashMap;

use tracing::{info, instrument};

use super::filters::{forklift_matches, OrderFilter};
use super::grid::ForkliftMarker;
use crate::client::ApiClient;
use crate::errors::DashboardError;
use crate::models::{
    Forklift, ForkliftStatus, Location, NewForklift, Order, OrderStatus, Plan, WarehouseMap,
};
use crate::simulation::{
    order_phase_status, resolved_position, SimulationClock, SiteMap, Timeline, DEFAULT_CYCLE_SECS,
};

/// One fetched snapshot of the backend data backing the dashboard.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub forklifts: Vec<Forklift>,
    pub locations: Vec<Location>,
    pub maps: Vec<WarehouseMap>,
    pub orders: Vec<Order>,
    pub plans: Vec<Plan>,
}

/// State container for the dashboard view.
///
/// Holds the last snapshot plus the view-local selections and filters. Every
/// operator action is one backend call followed by a full refetch; there is
/// no optimistic mutation and the displayed state is only as fresh as the
/// last refetch.
pub struct DashboardState {
    client: ApiClient,
    pub snapshot: Snapshot,
    pub order_filter: OrderFilter,
    pub forklift_status_filter: Option<ForkliftStatus>,
    pub selected_order: Option<i64>,
}

impl DashboardState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            snapshot: Snapshot::default(),
            order_filter: OrderFilter::default(),
            forklift_status_filter: None,
            selected_order: None,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Replaces the snapshot with a fresh parallel fetch. Fail-fast: any
    /// single failing request fails the whole load.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        let (forklifts, locations, maps, orders, plans) = tokio::try_join!(
            self.client.list_forklifts(None),
            self.client.list_locations(),
            self.client.list_maps(),
            self.client.list_orders(),
            self.client.list_plans(),
        )?;
        info!(
            forklifts = forklifts.len(),
            locations = locations.len(),
            orders = orders.len(),
            plans = plans.len(),
            "snapshot refreshed"
        );
        self.snapshot = Snapshot {
            forklifts,
            locations,
            maps,
            orders,
            plans,
        };
        Ok(())
    }

    pub async fn block_forklift(&mut self, forklift_id: i64) -> Result<(), DashboardError> {
        self.client.block_forklift(forklift_id).await?;
        self.refresh().await
    }

    pub async fn unblock_forklift(&mut self, forklift_id: i64) -> Result<(), DashboardError> {
        self.client.unblock_forklift(forklift_id).await?;
        self.refresh().await
    }

    pub async fn set_forklift_status(
        &mut self,
        forklift_id: i64,
        status: ForkliftStatus,
    ) -> Result<(), DashboardError> {
        self.client
            .update_forklift_status(forklift_id, status)
            .await?;
        self.refresh().await
    }

    pub async fn create_forklift(
        &mut self,
        forklift: &NewForklift,
    ) -> Result<Forklift, DashboardError> {
        let created = self.client.create_forklift(forklift).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Resets all forklift and order statuses on the backend, then refetches.
    pub async fn reset_all(&mut self) -> Result<(), DashboardError> {
        self.client.reset_forklift_statuses().await?;
        self.client.reset_order_statuses().await?;
        self.refresh().await
    }

    pub async fn reset_plan_times(&mut self) -> Result<(), DashboardError> {
        self.client.reset_plan_times().await?;
        self.refresh().await
    }

    pub fn site(&self) -> SiteMap {
        SiteMap::from_locations(&self.snapshot.locations)
    }

    pub fn timeline(&self, site: &SiteMap) -> Timeline {
        Timeline::resolve(&self.snapshot.plans, &self.snapshot.orders, site)
    }

    /// Orders passing the sidebar filter, in fetch order.
    pub fn filtered_orders(&self) -> Vec<&Order> {
        self.snapshot
            .orders
            .iter()
            .filter(|order| self.order_filter.matches(order, &self.snapshot.plans))
            .collect()
    }

    /// Forklifts passing the status filter, in fetch order.
    pub fn filtered_forklifts(&self) -> Vec<&Forklift> {
        self.snapshot
            .forklifts
            .iter()
            .filter(|forklift| forklift_matches(forklift, self.forklift_status_filter))
            .collect()
    }

    /// Interpolated marker positions for every forklift at the clock's
    /// current time.
    pub fn forklift_markers(
        &self,
        clock_time: f64,
        timeline: &Timeline,
        site: &SiteMap,
        reset_pending: bool,
    ) -> Vec<ForkliftMarker> {
        self.snapshot
            .forklifts
            .iter()
            .map(|forklift| ForkliftMarker {
                id: forklift.id,
                name: forklift.name.clone(),
                cell: resolved_position(
                    clock_time,
                    timeline.windows_for(forklift.id),
                    site,
                    reset_pending,
                ),
            })
            .collect()
    }

    /// Simulation-derived display status for every order at the clock's
    /// current time.
    pub fn derived_order_statuses(&self, clock: &SimulationClock) -> HashMap<i64, OrderStatus> {
        self.snapshot
            .orders
            .iter()
            .map(|order| {
                let assigned = super::filters::assigned_forklift_id(order.id, &self.snapshot.plans)
                    .and_then(|id| {
                        self.snapshot
                            .forklifts
                            .iter()
                            .find(|forklift| forklift.id == id)
                    })
                    .map(|forklift| forklift.status);
                (
                    order.id,
                    order_phase_status(clock.time(), DEFAULT_CYCLE_SECS, assigned),
                )
            })
            .collect()
    }
}
