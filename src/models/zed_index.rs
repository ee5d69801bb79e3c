use serde::{Deserialize, Serialize};
use serde_this_or_that::as_u64;

use super::helpers::opt_f64_int_or_string;

/// Zoopla's house price index for one area, current plus history.
///
/// Index values are served as plain integers for some output types and as
/// decimal strings for others, hence the lenient decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZedIndex {
    pub area_name: String,
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
    #[serde(default, deserialize_with = "as_u64")]
    pub zed_index: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub zed_index_3month: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub zed_index_6month: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub zed_index_1year: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub zed_index_2year: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub zed_index_3year: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub zed_index_4year: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub zed_index_5year: u64,
    #[serde(default)]
    pub area_url: Option<String>,
}
