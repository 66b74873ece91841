//! Pure simulation logic behind the grid view.
//!
//! Nothing in this module performs I/O: plan windows are resolved from
//! already-fetched snapshots, and positions/statuses are recomputed from the
//! clock value on every tick.

pub mod clock;
pub mod position;
pub mod progress;
pub mod site;
pub mod timeline;

pub use clock::SimulationClock;
pub use position::{forklift_position, resolved_position};
pub use progress::{order_phase_status, DEFAULT_CYCLE_SECS};
pub use site::SiteMap;
pub use timeline::{PlanWindow, Timeline};

/// Fixed travel time from the depot to an order's pickup location.
pub const DEPOT_TRAVEL_SECS: f64 = 10.0;

/// Fixed travel time from a delivery location back to the depot.
pub const RETURN_TRAVEL_SECS: f64 = 10.0;
