//! Typed shape of a lookup response.

use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

use crate::vehicle::{VehicleRecord, seller_label};

use super::{LookupError, LookupOutcome};

/// Key whose presence marks an unknown VIN.
const NOT_FOUND_KEY: &str = "error";

/// A found lookup result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DetailRecord {
    /// Descriptive vehicle fields
    #[serde(rename = "vehicle_info")]
    pub vehicle: VehicleInfo,

    /// Sale information
    #[serde(rename = "vehicle_sales")]
    pub sale: SaleInfo,

    /// Who sold the vehicle
    #[serde(rename = "vehicle_seller")]
    pub seller: Party,

    /// Who bought the vehicle; the name filters apply to this party
    #[serde(rename = "vehicle_purchaser", default)]
    pub purchaser: Party,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VehicleInfo {
    #[serde(default, deserialize_with = "text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub make: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub trim: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub vin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SaleInfo {
    /// Sale price; the service sends either a number or a string
    #[serde(default, deserialize_with = "text")]
    pub price: Option<String>,
}

/// A named person on either side of a sale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Party {
    #[serde(rename = "firstname", default, deserialize_with = "text")]
    pub first_name: Option<String>,
    #[serde(rename = "lastname", default, deserialize_with = "text")]
    pub last_name: Option<String>,
}

impl Party {
    /// Creates a party from first and last names.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// First name, or the empty string when absent.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }

    /// Last name, or the empty string when absent.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }
}

impl From<DetailRecord> for VehicleRecord {
    fn from(detail: DetailRecord) -> Self {
        let seller = seller_label(
            detail.seller.first_name.as_deref(),
            detail.seller.last_name.as_deref(),
        );
        let info = detail.vehicle;

        let mut record = Self::new().with_seller(seller);
        if let Some(vin) = info.vin {
            record = record.with_vin(vin);
        }
        if let Some(year) = info.year {
            record = record.with_year(year);
        }
        if let Some(make) = info.make {
            record = record.with_make(make);
        }
        if let Some(model) = info.model {
            record = record.with_model(model);
        }
        if let Some(trim) = info.trim {
            record = record.with_trim(trim);
        }
        if let Some(price) = detail.sale.price {
            record = record.with_sale_price(price);
        }
        record
    }
}

/// Parses a lookup response body.
///
/// # Errors
///
/// Returns [`LookupError::InvalidJson`] if the body is not a JSON object and
/// [`LookupError::MalformedResponse`] if a found record is missing a
/// required section or holds a non-scalar field.
pub fn parse_response(body: &[u8]) -> Result<LookupOutcome, LookupError> {
    let object: serde_json::Map<String, Value> =
        serde_json::from_slice(body).map_err(LookupError::InvalidJson)?;

    if object.contains_key(NOT_FOUND_KEY) {
        return Ok(LookupOutcome::NotFound);
    }

    serde_json::from_value(Value::Object(object))
        .map(LookupOutcome::Found)
        .map_err(LookupError::MalformedResponse)
}

/// Accepts a string, a number or null as optional text.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::invalid_type(
            de::Unexpected::Other(&other.to_string()),
            &"a string, number or null",
        )),
    }
}
