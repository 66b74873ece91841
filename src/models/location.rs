use serde::{Deserialize, Serialize};

/// Integer cell coordinates on the warehouse grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A named cell of the warehouse map.
///
/// Static reference data; the backend owns the layout. The depot is the
/// distinguished home location forklifts return to between assignments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(rename = "mapId")]
    pub map_id: i64,
    #[serde(rename = "displayX")]
    pub display_x: i32,
    #[serde(rename = "displayY")]
    pub display_y: i32,
}

impl Location {
    /// The depot is identified by a case-insensitive name match.
    pub fn is_depot(&self) -> bool {
        self.name.eq_ignore_ascii_case("depot")
    }

    pub fn cell(&self) -> GridPoint {
        GridPoint::new(self.display_x, self.display_y)
    }
}
