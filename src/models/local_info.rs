use serde::{Deserialize, Serialize};

use super::helpers::opt_f64_int_or_string;

/// Links to the pre-rendered local information graphs for an area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalInfoGraphs {
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
    pub council_tax_graph_url: Option<String>,
    #[serde(default)]
    pub crime_graph_url: Option<String>,
    #[serde(default)]
    pub education_graph_url: Option<String>,
    #[serde(default)]
    pub people_graph_url: Option<String>,
    #[serde(default)]
    pub local_info_url: Option<String>,
}
