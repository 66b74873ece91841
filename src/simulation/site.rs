use std::collections::HashMap;

use crate::models::{GridPoint, Location};

/// Location lookup for the simulation: coordinates by id plus the depot.
#[derive(Clone, Debug, Default)]
pub struct SiteMap {
    cells: HashMap<i64, GridPoint>,
    depot: Option<GridPoint>,
}

impl SiteMap {
    pub fn from_locations(locations: &[Location]) -> Self {
        let cells = locations
            .iter()
            .map(|location| (location.id, location.cell()))
            .collect();
        let depot = locations
            .iter()
            .find(|location| location.is_depot())
            .map(Location::cell);
        Self { cells, depot }
    }

    pub fn cell(&self, location_id: i64) -> Option<GridPoint> {
        self.cells.get(&location_id).copied()
    }

    pub fn depot(&self) -> Option<GridPoint> {
        self.depot
    }

    /// The depot cell, or the `(0, 0)` fallback when no depot exists.
    pub fn depot_or_default(&self) -> GridPoint {
        self.depot.unwrap_or_default()
    }
}
