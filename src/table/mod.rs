//! Text rendering of matched vehicles.
//!
//! Two renderers:
//! - [`TableLayout`]: tab-separated rows whose columns come from
//!   configuration, meant for pasting into a spreadsheet
//! - [`render_grid`]: a fixed five-column boxed table for the console

mod grid;
mod layout;


pub use grid::{HEADERS, render_grid};
pub use layout::{Column, LayoutError, TableLayout};
