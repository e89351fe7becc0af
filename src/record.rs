//! Lookup result types.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// One of the four geographic attributes tracked per address.
///
/// The variant names double as the field names in the service payload and
/// in the cache key format, via [`GeoField::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum GeoField {
    /// Two-letter country code, e.g. `RU`.
    Country,
    /// City name.
    City,
    /// Region (oblast/state) name.
    Region,
    /// Federal district name.
    District,
}

impl GeoField {
    /// Field name as it appears in the payload and in cache keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoField::Country => "country",
            GeoField::City => "city",
            GeoField::Region => "region",
            GeoField::District => "district",
        }
    }
}

impl fmt::Display for GeoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of one successful lookup.
///
/// All four fields are always present together; a lookup never produces a
/// partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    /// Two-letter country code.
    pub country: String,
    /// City name.
    pub city: String,
    /// Region name.
    pub region: String,
    /// Federal district name.
    pub district: String,
}

impl GeoRecord {
    /// Returns the value of one field by name.
    pub fn field(&self, field: GeoField) -> &str {
        match field {
            GeoField::Country => &self.country,
            GeoField::City => &self.city,
            GeoField::Region => &self.region,
            GeoField::District => &self.district,
        }
    }
}

impl fmt::Display for GeoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} ({})",
            self.city, self.region, self.district, self.country
        )
    }
}
