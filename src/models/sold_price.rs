use serde::{Deserialize, Serialize};

use super::helpers::{opt_f64_int_or_string, opt_u64_int_or_string};

/// Average sold prices and sale counts for an area over 1/3/5/7 years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageAreaSoldPrice {
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
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub average_sold_price_1year: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub average_sold_price_3year: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub average_sold_price_5year: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub average_sold_price_7year: Option<f64>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub number_of_sales_1year: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub number_of_sales_3year: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub number_of_sales_5year: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_int_or_string")]
    pub number_of_sales_7year: Option<u64>,
    #[serde(default, deserialize_with = "opt_f64_int_or_string")]
    pub turnover: Option<f64>,
    #[serde(default)]
    pub prices_url: Option<String>,
}
