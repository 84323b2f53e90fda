//! Fixed five-column boxed table.

use crate::vehicle::VehicleRecord;

/// Column headers of the grid table.
pub const HEADERS: [&str; 5] = ["Run #", "Vehicle", "VIN", "Cost", "Source"];

/// Renders `records` as a boxed table with a header row.
///
/// Cells are left-aligned and padded to the widest cell in their column,
/// counted in characters. An empty slice renders the header alone.
///
/// ```text
/// +-------+----------------------+-------------------+------+------------+
/// | Run # | Vehicle              | VIN               | Cost | Source     |
/// +-------+----------------------+-------------------+------+------------+
/// | 42    | 2003 Honda Accord EX | 1HGCM82633A004352 | 4500 | John Smith |
/// +-------+----------------------+-------------------+------+------------+
/// ```
#[must_use]
pub fn render_grid(records: &[VehicleRecord]) -> String {
    let rows: Vec<[String; 5]> = records.iter().map(grid_row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut lines = vec![border.clone(), cell_line(&HEADERS, &widths), border.clone()];
    for row in &rows {
        lines.push(cell_line(row, &widths));
    }
    if !rows.is_empty() {
        lines.push(border);
    }

    lines.join("\n")
}

fn grid_row(record: &VehicleRecord) -> [String; 5] {
    [
        record.run_number().unwrap_or_default().to_string(),
        record.description(),
        record.vin().unwrap_or_default().to_string(),
        record.sale_price().unwrap_or_default().to_string(),
        record.seller().unwrap_or_default().to_string(),
    ]
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn cell_line<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}
