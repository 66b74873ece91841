use std::time::Duration;

use anyhow::Context;
use tokio::{signal, time};
use tracing::{info, warn};

use warehouse_dashboard::client::ApiClient;
use warehouse_dashboard::dashboard::{DashboardState, GridView, OrderStatusSync};
use warehouse_dashboard::simulation::SimulationClock;
use warehouse_dashboard::{config, errors::DashboardError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config()?;
    config::init_tracing(&cfg.log_level, cfg.log_json);

    let client = ApiClient::new(
        &cfg.api_base_url,
        Duration::from_secs(cfg.request_timeout_secs),
    )
    .context("failed to build API client")?;
    info!(base_url = %client.base_url(), "connecting to dispatch backend");

    let mut state = DashboardState::new(client);
    state.refresh().await.context("initial fetch failed")?;

    let site = state.site();
    let timeline = state.timeline(&site);
    if timeline.is_empty() {
        warn!("no usable dispatch plans; the grid will stay idle at the depot");
    }

    let mut clock = SimulationClock::new(timeline.span());
    clock.set_speed(cfg.speed);
    clock.play();

    let mut sync = OrderStatusSync::new(cfg.push_order_status);
    let mut ticker = time::interval(Duration::from_secs(cfg.tick_period_secs));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                clock.tick();
                let reset_pending = clock.take_reset();
                if reset_pending {
                    sync.clear();
                }

                let markers = state.forklift_markers(clock.time(), &timeline, &site, reset_pending);
                let statuses = state.derived_order_statuses(&clock);
                let grid = GridView::build(
                    &state.snapshot.locations,
                    &markers,
                    &state.snapshot.orders,
                    &statuses,
                    state.selected_order,
                );
                println!("t = {:.0}s / {:.0}s", clock.time(), clock.max_time());
                println!("{}", grid.render_text());

                match sync.push(state.client(), &state.snapshot.orders, &statuses).await {
                    Ok(0) => {}
                    Ok(pushed) => info!(pushed, "order statuses pushed"),
                    Err(err @ DashboardError::Api { .. }) | Err(err @ DashboardError::Transport(..)) => {
                        warn!(error = %err, "order status push failed; state left stale")
                    }
                    Err(err) => return Err(err).context("order status push"),
                }

                if !clock.is_playing() {
                    info!("simulation reached the end of its timeline");
                    break;
                }
            }
            _ = signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
