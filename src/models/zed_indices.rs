use serde::{Deserialize, Serialize};

use super::helpers::{opt_f64_int_or_string, opt_u64_int_or_string};

/// Paged zed-index values for the streets (or towns, postcodes) inside
/// an area, ordered as requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaZedIndices {
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub results: Vec<ZedIndexEntry>,
    #[serde(default)]
    pub results_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZedIndexEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub zed_index: Option<u64>,
}
