use serde::{Deserialize, Serialize};

use super::helpers::opt_f64_int_or_string;

/// Graph URLs charting property values for an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaValueGraphs {
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
    #[serde(default)]
    pub average_values_graph_url: Option<String>,
    #[serde(default)]
    pub home_values_graph_url: Option<String>,
    #[serde(default)]
    pub value_ranges_graph_url: Option<String>,
    #[serde(default)]
    pub value_trend_graph_url: Option<String>,
    #[serde(default)]
    pub area_values_url: Option<String>,
}
