use crate::models::{ForkliftStatus, OrderStatus};

/// Duration of one animation cycle for order progress, split into thirds.
pub const DEFAULT_CYCLE_SECS: f64 = 10.0;

/// Display status of an order at `elapsed` seconds of simulated time.
///
/// The cycle is split into thirds: pending, on the way, completed. Progress
/// is gated on the assigned forklift being available; a blocked or
/// unavailable forklift (or no assignment at all) holds the order at
/// pending regardless of elapsed time. For a fixed available forklift the
/// result is monotonic non-decreasing in `elapsed`.
pub fn order_phase_status(
    elapsed: f64,
    cycle: f64,
    forklift: Option<ForkliftStatus>,
) -> OrderStatus {
    if !matches!(forklift, Some(ForkliftStatus::Available)) {
        return OrderStatus::Pending;
    }
    let phase = cycle / 3.0;
    if elapsed < phase {
        OrderStatus::Pending
    } else if elapsed < 2.0 * phase {
        OrderStatus::OnTheWay
    } else {
        OrderStatus::Completed
    }
}
