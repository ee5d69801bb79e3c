use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::helpers::{opt_f64_int_or_string, opt_published_date, opt_u64_int_or_string};

/// One advertised property from a listings search.
///
/// The service serves most numeric attributes as decimal strings
/// ("price": "465000", "num_bedrooms": "2"), so every count and price
/// decodes through the int-or-string helpers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub listing_id: Option<u64>,
    #[serde(default)]
    pub listing_status: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_modifier: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub num_bedrooms: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub num_bathrooms: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub num_recepts: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub num_floors: Option<u64>,
    #[serde(default)]
    pub displayable_address: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub outcode: Option<String>,
    #[serde(default)]
    pub post_town: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub details_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub agent_phone: Option<String>,
    #[serde(default)]
    pub agent_logo: Option<String>,
    #[serde(default, deserialize_with = "opt_published_date")]
    pub first_published_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "opt_published_date")]
    pub last_published_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub price_change: Option<Vec<PriceChange>>,
}

/// Entry in a listing's price history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceChange {
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "opt_published_date")]
    pub date: Option<NaiveDateTime>,
}

// Search responses wrap the listings in an envelope alongside the match
// count and resolved search area; callers only get the array.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingsResponse {
    #[serde(default)]
    pub listing: Vec<PropertyListing>,
}
