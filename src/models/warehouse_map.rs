use serde::{Deserialize, Serialize};

/// A named warehouse map. Fetched and stored; nothing reads past the name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarehouseMap {
    pub id: i64,
    pub name: String,
}
