pub mod forklift;
pub mod location;
pub mod order;
pub mod plan;
pub mod warehouse_map;

pub use forklift::{Forklift, ForkliftStatus, NewForklift};
pub use location::{GridPoint, Location};
pub use order::{Order, OrderStatus};
pub use plan::Plan;
pub use warehouse_map::WarehouseMap;
