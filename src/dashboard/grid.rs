use std::collections::HashMap;

use crate::models::{GridPoint, Location, Order, OrderStatus};

/// Endpoint highlight for the selected order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Pickup,
    Delivery,
}

/// A forklift marker placed on the grid at its interpolated position.
#[derive(Clone, Debug, PartialEq)]
pub struct ForkliftMarker {
    pub id: i64,
    pub name: String,
    pub cell: GridPoint,
}

/// One rendered grid cell.
#[derive(Clone, Debug, Default)]
pub struct Cell {
    pub location_name: Option<String>,
    pub is_depot: bool,
    pub forklift_ids: Vec<i64>,
    pub highlight: Option<Highlight>,
    /// Phase label at an order endpoint: "on the way" at its pickup cell,
    /// "completed" at its delivery cell.
    pub phase_label: Option<OrderStatus>,
}

/// The cell matrix for one render of the simulation grid, sized to the
/// bounding box of all location coordinates.
#[derive(Clone, Debug)]
pub struct GridView {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GridView {
    pub fn build(
        locations: &[Location],
        markers: &[ForkliftMarker],
        orders: &[Order],
        display_statuses: &HashMap<i64, OrderStatus>,
        selected_order: Option<i64>,
    ) -> Self {
        let width = locations
            .iter()
            .map(|l| l.display_x.max(0) as usize + 1)
            .max()
            .unwrap_or(1);
        let height = locations
            .iter()
            .map(|l| l.display_y.max(0) as usize + 1)
            .max()
            .unwrap_or(1);
        let mut cells = vec![Cell::default(); width * height];

        let index_of = |point: GridPoint| -> Option<usize> {
            let (x, y) = (point.x, point.y);
            if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
                return None;
            }
            Some(y as usize * width + x as usize)
        };

        let mut location_cells: HashMap<i64, GridPoint> = HashMap::new();
        for location in locations {
            location_cells.insert(location.id, location.cell());
            if let Some(i) = index_of(location.cell()) {
                cells[i].location_name = Some(location.name.clone());
                cells[i].is_depot = location.is_depot();
            }
        }

        for marker in markers {
            if let Some(i) = index_of(marker.cell) {
                cells[i].forklift_ids.push(marker.id);
            }
        }

        for order in orders {
            let status = display_statuses
                .get(&order.id)
                .copied()
                .unwrap_or(order.status);
            let labelled = match status {
                OrderStatus::OnTheWay => Some((order.pickup_location_id, status)),
                OrderStatus::Completed => Some((order.delivery_location_id, status)),
                OrderStatus::Pending => None,
            };
            if let Some((location_id, status)) = labelled {
                if let Some(i) = location_cells.get(&location_id).and_then(|p| index_of(*p)) {
                    cells[i].phase_label = Some(status);
                }
            }
        }

        if let Some(order) = selected_order.and_then(|id| orders.iter().find(|o| o.id == id)) {
            for (location_id, highlight) in [
                (order.pickup_location_id, Highlight::Pickup),
                (order.delivery_location_id, Highlight::Delivery),
            ] {
                if let Some(i) = location_cells.get(&location_id).and_then(|p| index_of(*p)) {
                    cells[i].highlight = Some(highlight);
                }
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Fixed-width text rendering for the terminal.
    pub fn render_text(&self) -> String {
        const CELL_WIDTH: usize = 9;
        let mut out = String::new();
        let rule = format!("+{}\n", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(self.width));
        out.push_str(&rule);
        for y in 0..self.height {
            out.push('|');
            for x in 0..self.width {
                let cell = &self.cells[y * self.width + x];
                let mut token = if !cell.forklift_ids.is_empty() {
                    cell.forklift_ids
                        .iter()
                        .map(|id| format!("F{}", id))
                        .collect::<Vec<_>>()
                        .join("+")
                } else if cell.is_depot {
                    "Depot".to_string()
                } else if let Some(name) = &cell.location_name {
                    name.clone()
                } else {
                    String::new()
                };
                match cell.highlight {
                    Some(Highlight::Pickup) => token = format!("[P]{}", token),
                    Some(Highlight::Delivery) => token = format!("[D]{}", token),
                    None => {}
                }
                if let Some(status) = cell.phase_label {
                    token = format!("{}*{}", token, status);
                }
                let token: String = token.chars().take(CELL_WIDTH).collect();
                out.push_str(&format!("{:^width$}|", token, width = CELL_WIDTH));
            }
            out.push('\n');
            out.push_str(&rule);
        }
        out
    }
}
