//! Wire types for the vacancy search endpoint.
//!
//! Only the page envelope (`items`, `pages`) is strict. Every field inside an
//! item is read leniently: a missing, `null`, or wrongly-typed value becomes
//! `None` instead of failing the page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// One page of search results.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    /// Raw listing objects; parsed one by one via [`VacancyItem::from_value`]
    /// so that a single odd element cannot fail the page.
    pub items: Vec<serde_json::Value>,
    /// Total number of pages available for this query.
    pub pages: u32,
    /// Total number of matching listings across all pages.
    #[serde(default, deserialize_with = "lenient")]
    pub found: Option<u64>,
}

/// A single vacancy listing as returned by the API.
#[derive(Debug, Default, Deserialize)]
pub struct VacancyItem {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Public listing page, e.g. `https://hh.ru/vacancy/123`.
    #[serde(default, deserialize_with = "lenient")]
    pub alternate_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub employer: Option<Named>,
    #[serde(default, deserialize_with = "lenient")]
    pub area: Option<Named>,
    #[serde(default, deserialize_with = "lenient")]
    pub salary: Option<Salary>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<Address>,
}

impl VacancyItem {
    /// Parses one element of the `items` array.
    ///
    /// Returns an all-absent item when the element is not a JSON object.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        if !value.is_object() {
            tracing::warn!(kind = %json_kind(&value), "vacancy item is not an object; treating all fields as absent");
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Employer or area reference; only the display name is used.
#[derive(Debug, Default, Deserialize)]
pub struct Named {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Salary block. Bounds are gross or net depending on the listing; the API
/// reports the currency code separately.
#[derive(Debug, Default, Deserialize)]
pub struct Salary {
    #[serde(default, deserialize_with = "lenient")]
    pub from: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub to: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "lenient")]
    pub raw: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub lng: Option<f64>,
    /// Nearest metro station, when the employer linked one.
    #[serde(default, deserialize_with = "lenient")]
    pub metro: Option<MetroStation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetroStation {
    #[serde(default, deserialize_with = "lenient")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub lng: Option<f64>,
}

/// Deserializes any JSON value, keeping it only if it converts to `T`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
