//! Diamond / grid layout: ships on a grid that drifts as one body from
//! its start anchor toward its end anchor.

use glam::DVec2;
use log::debug;

use vanguard_core::config::DiamondLayout;
use vanguard_core::constants::{DIAMOND_DEFAULT_ROWS, FORMATION_SPAWN_HEIGHT};
use vanguard_core::enums::ShipClass;
use vanguard_core::types::Bounds;

use super::Slot;

/// A grid cell: row index, column offset from the row center (in cells),
/// and the ship class index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub column: f64,
    pub ship: usize,
}

/// Occupied cells for the layout.
///
/// An explicit grid is used when it has at least one occupied cell and all
/// indices name a configured ship; columns are centered on the widest row.
/// Otherwise the symmetric row counts apply, each row centered on itself.
pub fn cells(layout: &DiamondLayout, ship_count: usize) -> Vec<Cell> {
    if ship_count == 0 {
        return Vec::new();
    }
    if let Some(grid) = &layout.formation_grid {
        let mut occupied = grid.iter().flatten().flatten().peekable();
        let usable = occupied.peek().is_some() && occupied.all(|index| *index < ship_count);
        if usable {
            let widest = grid.iter().map(Vec::len).max().unwrap_or(0);
            let middle = widest.saturating_sub(1) as f64 / 2.0;
            return grid
                .iter()
                .enumerate()
                .flat_map(|(row, cells)| {
                    cells.iter().enumerate().filter_map(move |(column, cell)| {
                        cell.map(|ship| Cell {
                            row,
                            column: column as f64 - middle,
                            ship,
                        })
                    })
                })
                .collect();
        }
        debug!("formation grid unusable, using row counts");
    }

    let rows: &[usize] = match &layout.rows {
        Some(rows) if rows.iter().any(|n| *n > 0) => rows,
        _ => &DIAMOND_DEFAULT_ROWS,
    };
    rows.iter()
        .enumerate()
        .flat_map(|(row, &n)| {
            let middle = n.saturating_sub(1) as f64 / 2.0;
            (0..n).map(move |column| Cell {
                row,
                column: column as f64 - middle,
                ship: row % ship_count,
            })
        })
        .collect()
}

/// Lay the grid out above the top edge at the start anchor.
///
/// The last row sits on the spawn line and earlier rows stack above it, so
/// the formation enters the screen front row first.
pub fn slots(layout: &DiamondLayout, ships: &[ShipClass], bounds: &Bounds) -> Vec<Slot> {
    let cells = cells(layout, ships.len());
    let last_row = cells.iter().map(|c| c.row).max().unwrap_or(0);
    let anchor = anchor(layout, bounds);

    cells
        .iter()
        .map(|cell| {
            let offset = DVec2::new(
                cell.column * layout.spacing,
                -((last_row - cell.row) as f64) * layout.vertical_spacing,
            );
            Slot {
                position: anchor + offset,
                offset,
                class: ships[cell.ship],
                phase_ms: 0.0,
            }
        })
        .collect()
}

/// Formation anchor on the spawn line.
pub fn anchor(layout: &DiamondLayout, bounds: &Bounds) -> DVec2 {
    DVec2::new(
        bounds.width * layout.start_width,
        bounds.height * FORMATION_SPAWN_HEIGHT,
    )
}

/// Shared velocity (px/ms) carrying the grid from its start anchor toward
/// the end anchor on the bottom edge.
pub fn drift_velocity(layout: &DiamondLayout, bounds: &Bounds, speed: f64) -> DVec2 {
    let target = DVec2::new(bounds.width * layout.end_width, bounds.height);
    let direction = (target - anchor(layout, bounds)).normalize_or_zero();
    if direction == DVec2::ZERO {
        return DVec2::new(0.0, speed);
    }
    direction * speed
}
