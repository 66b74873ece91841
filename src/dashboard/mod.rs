//! View-level state for the operations dashboard.
//!
//! Each view owns an explicit state container holding the last fetched
//! snapshot; child renderers receive data by reference. All mutation happens
//! by total snapshot replacement after a backend call resolves.

pub mod filters;
pub mod grid;
pub mod state;
pub mod sync;

pub use filters::{assigned_forklift_id, forklift_matches, OrderFilter};
pub use grid::{Cell, ForkliftMarker, GridView, Highlight};
pub use state::{DashboardState, Snapshot};
pub use sync::OrderStatusSync;
