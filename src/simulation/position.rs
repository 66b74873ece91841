use super::{PlanWindow, SiteMap, DEPOT_TRAVEL_SECS, RETURN_TRAVEL_SECS};
use crate::models::GridPoint;

fn lerp(a: i32, b: i32, fraction: f64) -> i32 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * fraction).round() as i32
}

/// Rounded linear blend between two grid cells.
fn blend(from: GridPoint, to: GridPoint, fraction: f64) -> GridPoint {
    GridPoint::new(lerp(from.x, to.x, fraction), lerp(from.y, to.y, fraction))
}

/// Position of one forklift at `time` seconds on the timeline.
///
/// `windows` must be sorted ascending by start time. The motion model is
/// piecewise linear: depot -> pickup over a fixed 10 s leg, pickup ->
/// delivery over the rest of the window, then delivery -> depot over a fixed
/// 10 s return once the window ends. Before the first window and after the
/// return leg the forklift sits at the depot.
pub fn forklift_position(time: f64, windows: &[PlanWindow], depot: GridPoint) -> GridPoint {
    let mut previous: Option<&PlanWindow> = None;
    let mut current: Option<&PlanWindow> = None;
    for window in windows {
        if time < window.start {
            break;
        }
        if time <= window.end {
            current = Some(window);
            break;
        }
        previous = Some(window);
    }

    if let Some(window) = current {
        let pickup_eta = window.start + DEPOT_TRAVEL_SECS;
        if time < pickup_eta {
            let fraction = ((time - window.start) / DEPOT_TRAVEL_SECS).clamp(0.0, 1.0);
            return blend(depot, window.pickup, fraction);
        }
        let haul = window.end - window.start - DEPOT_TRAVEL_SECS;
        // Windows of 10 s or less leave no haul phase; arrive immediately.
        let fraction = if haul <= 0.0 {
            1.0
        } else {
            ((time - pickup_eta) / haul).clamp(0.0, 1.0)
        };
        return blend(window.pickup, window.delivery, fraction);
    }

    if let Some(window) = previous {
        let fraction = ((time - window.end) / RETURN_TRAVEL_SECS).clamp(0.0, 1.0);
        return blend(window.delivery, depot, fraction);
    }

    depot
}

/// Position with the degraded fallbacks applied: a missing depot or a
/// pending clock reset short-circuits to the depot cell (or `(0, 0)` when no
/// depot exists) without interpolating.
pub fn resolved_position(
    time: f64,
    windows: &[PlanWindow],
    site: &SiteMap,
    reset_pending: bool,
) -> GridPoint {
    let depot = site.depot_or_default();
    if reset_pending || site.depot().is_none() {
        return depot;
    }
    forklift_position(time, windows, depot)
}
