use serde::{Deserialize, Serialize};

/// Enum representing the possible statuses of an order.
///
/// Variants are ordered by delivery progress; the simulation only ever moves
/// an order's status forward along this ordering.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    #[strum(serialize = "pending")]
    Pending,
    #[serde(rename = "on the way")]
    #[strum(serialize = "on the way")]
    OnTheWay,
    #[serde(rename = "completed")]
    #[strum(serialize = "completed")]
    Completed,
}

/// A delivery order between two warehouse locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub pickup_location_id: i64,
    pub delivery_location_id: i64,
    pub status: OrderStatus,
}
