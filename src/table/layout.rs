//! Configuration-driven tab-separated layout.

use std::borrow::Cow;
use std::collections::BTreeMap;

use thiserror::Error;

use crate::vehicle::VehicleRecord;

/// Prefix of every layout key (`col1`, `col2`, ...).
const KEY_PREFIX: &str = "col";

/// Error type for layout configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Key is not `col<N>` with N >= 1.
    #[error("Invalid layout key '{0}': expected col<N> with N >= 1")]
    InvalidKey(String),

    /// Two keys name the same column.
    #[error("Layout keys '{first}' and '{second}' both name column {index}")]
    DuplicateColumn {
        /// Column index
        index: usize,
        /// Key seen first
        first: String,
        /// Key seen second
        second: String,
    },
}

/// What a layout column shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    /// The run number, as-is
    RunNumber,
    /// `"{year} {make} {model} {trim}"`
    Description,
    /// Last six characters of the VIN
    Vin,
    /// The sale price, as-is
    SalePrice,
    /// The seller label, as-is
    Seller,
    /// Fixed text repeated on every row
    Literal(String),
}

impl Column {
    /// Maps a configured field name to a column.
    ///
    /// Unknown names become [`Column::Literal`]. `sold_price` and
    /// `seller_name` are accepted as aliases.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "run_number" => Self::RunNumber,
            "description" => Self::Description,
            "vin" => Self::Vin,
            "sale_price" | "sold_price" => Self::SalePrice,
            "seller" | "seller_name" => Self::Seller,
            other => Self::Literal(other.to_string()),
        }
    }

    /// Renders this column's cell for `record`.
    #[must_use]
    pub fn render<'a>(&'a self, record: &'a VehicleRecord) -> Cow<'a, str> {
        match self {
            Self::RunNumber => Cow::Borrowed(record.run_number().unwrap_or_default()),
            Self::Description => Cow::Owned(record.description()),
            Self::Vin => Cow::Borrowed(record.vin_suffix()),
            Self::SalePrice => Cow::Borrowed(record.sale_price().unwrap_or_default()),
            Self::Seller => Cow::Borrowed(record.seller().unwrap_or_default()),
            Self::Literal(text) => Cow::Borrowed(text),
        }
    }
}

/// Positional column layout, 1-based, gaps allowed.
///
/// # Example
///
/// ```
/// use runlist_match::table::{Column, TableLayout};
/// use runlist_match::vehicle::VehicleRecord;
///
/// let layout = TableLayout::new()
///     .with_column(1, Column::RunNumber)
///     .with_column(3, Column::Vin);
/// let record = VehicleRecord::from_run_list("42", "1HGCM82633A004352");
///
/// assert_eq!(layout.render(&[record]), "42\t\t004352");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    columns: BTreeMap<usize, Column>,
}

impl TableLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `column` at the 1-based `index`, replacing any previous one.
    ///
    /// Index 0 does not exist in a layout and is ignored.
    #[must_use]
    pub fn with_column(mut self, index: usize, column: Column) -> Self {
        if index > 0 {
            self.columns.insert(index, column);
        }
        self
    }

    /// Builds a layout from `col<N>` → field-name entries.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] for a malformed key or two keys naming the
    /// same column (`col1` and `col01`).
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, LayoutError> {
        let mut columns = BTreeMap::new();
        let mut keys: BTreeMap<usize, &str> = BTreeMap::new();

        for (key, field) in entries {
            let index = parse_key(key)?;
            if let Some(first) = keys.insert(index, key) {
                return Err(LayoutError::DuplicateColumn {
                    index,
                    first: first.to_string(),
                    second: key.to_string(),
                });
            }
            columns.insert(index, Column::parse(field));
        }

        Ok(Self { columns })
    }

    /// Returns the highest configured column index (0 for an empty layout).
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.keys().next_back().copied().unwrap_or(0)
    }

    /// Returns the column at `index`, if any.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(&index)
    }

    /// Returns true if no column is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Renders one record as tab-separated cells, unmapped indexes blank.
    #[must_use]
    pub fn render_row(&self, record: &VehicleRecord) -> String {
        (1..=self.width())
            .map(|i| self.column(i).map_or(Cow::Borrowed(""), |c| c.render(record)))
            .collect::<Vec<_>>()
            .join("\t")
    }

    /// Renders all records, one row per line, with no trailing newline.
    #[must_use]
    pub fn render(&self, records: &[VehicleRecord]) -> String {
        records
            .iter()
            .map(|r| self.render_row(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn parse_key(key: &str) -> Result<usize, LayoutError> {
    key.strip_prefix(KEY_PREFIX)
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .ok_or_else(|| LayoutError::InvalidKey(key.to_string()))
}
