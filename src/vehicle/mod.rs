//! The vehicle record shared by every stage of the pipeline.
//!
//! A [`VehicleRecord`] starts life either as a partial run-list row
//! (run number and VIN) or as a detail record (everything but the run
//! number). The matching stage folds the second into the first with
//! [`VehicleRecord::fill_empty`].

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Seller label used when the detail record names nobody.
pub const PRIVATE_SELLER: &str = "Private Seller";

/// A vehicle assembled from the run list and the detail lookup.
///
/// Every field is optional until populated. A field counts as empty when
/// it is absent or holds the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleRecord {
    run_number: Option<String>,
    vin: Option<String>,
    year: Option<String>,
    make: Option<String>,
    model: Option<String>,
    trim: Option<String>,
    sale_price: Option<String>,
    seller: Option<String>,
}

impl VehicleRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the partial record for one run-list row.
    #[must_use]
    pub fn from_run_list(run_number: impl Into<String>, vin: impl Into<String>) -> Self {
        Self::new().with_run_number(run_number).with_vin(vin)
    }

    /// Sets the run number.
    #[must_use]
    pub fn with_run_number(mut self, run_number: impl Into<String>) -> Self {
        self.run_number = Some(run_number.into());
        self
    }

    /// Sets the VIN.
    #[must_use]
    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }

    /// Sets the model year.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Sets the make.
    #[must_use]
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Sets the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the trim.
    #[must_use]
    pub fn with_trim(mut self, trim: impl Into<String>) -> Self {
        self.trim = Some(trim.into());
        self
    }

    /// Sets the sale price, in whatever text form the source reported it.
    #[must_use]
    pub fn with_sale_price(mut self, sale_price: impl Into<String>) -> Self {
        self.sale_price = Some(sale_price.into());
        self
    }

    /// Sets the seller label directly.
    ///
    /// Use [`seller_label`] to derive it from first and last names.
    #[must_use]
    pub fn with_seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = Some(seller.into());
        self
    }

    #[must_use]
    pub fn run_number(&self) -> Option<&str> {
        self.run_number.as_deref()
    }

    #[must_use]
    pub fn vin(&self) -> Option<&str> {
        self.vin.as_deref()
    }

    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    #[must_use]
    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    #[must_use]
    pub fn trim(&self) -> Option<&str> {
        self.trim.as_deref()
    }

    #[must_use]
    pub fn sale_price(&self) -> Option<&str> {
        self.sale_price.as_deref()
    }

    #[must_use]
    pub fn seller(&self) -> Option<&str> {
        self.seller.as_deref()
    }

    /// Returns `"{year} {make} {model} {trim}"`, with missing parts left blank.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} {} {} {}",
            self.year().unwrap_or_default(),
            self.make().unwrap_or_default(),
            self.model().unwrap_or_default(),
            self.trim().unwrap_or_default(),
        )
    }

    /// Returns the last six characters of the VIN (the whole VIN if shorter).
    #[must_use]
    pub fn vin_suffix(&self) -> &str {
        let vin = self.vin().unwrap_or_default();
        let skip = vin.chars().count().saturating_sub(6);
        vin.char_indices().nth(skip).map_or("", |(i, _)| &vin[i..])
    }

    /// Fills every empty field of `self` from `other`.
    ///
    /// Fields that already hold a value are never overwritten, so the
    /// run-list run number survives a merge with a detail record.
    pub fn fill_empty(&mut self, other: Self) {
        fill(&mut self.run_number, other.run_number);
        fill(&mut self.vin, other.vin);
        fill(&mut self.year, other.year);
        fill(&mut self.make, other.make);
        fill(&mut self.model, other.model);
        fill(&mut self.trim, other.trim);
        fill(&mut self.sale_price, other.sale_price);
        fill(&mut self.seller, other.seller);
    }
}

fn fill(slot: &mut Option<String>, value: Option<String>) {
    if is_empty(slot.as_deref()) {
        if let Some(value) = value {
            *slot = Some(value);
        }
    }
}

fn is_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Derives the seller label from the seller's first and last names.
///
/// Both empty gives [`PRIVATE_SELLER`]; otherwise the present names are
/// joined with a single space.
#[must_use]
pub fn seller_label(first_name: Option<&str>, last_name: Option<&str>) -> String {
    let first = first_name.unwrap_or_default();
    let last = last_name.unwrap_or_default();

    match (first.is_empty(), last.is_empty()) {
        (true, true) => PRIVATE_SELLER.to_string(),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (false, false) => format!("{first} {last}"),
    }
}
