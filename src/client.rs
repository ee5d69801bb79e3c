use log::{debug, error};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::{Result, ZooplaError};
use crate::models::listing::ListingsResponse;
use crate::models::{
    AreaValueGraphs, AreaZedIndices, AutoComplete, AverageAreaSoldPrice, LocalInfoGraphs,
    PropertyListing, ZedIndex,
};

pub const DEFAULT_BASE_URL: &str = "http://api.zoopla.co.uk/api/v1/";

/// Client for the Zoopla developer API.
///
/// Holds the API key and an HTTP client; every operation is a single GET
/// against one endpoint. Calls borrow `&self` and share nothing mutable,
/// so one client can serve concurrent lookups.
#[derive(Debug, Clone)]
pub struct Zoopla {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Options for [`Zoopla::zed_index`].
#[derive(Debug, Clone)]
pub struct ZedIndexOptions {
    pub output_type: String,
}

impl Default for ZedIndexOptions {
    fn default() -> ZedIndexOptions {
        ZedIndexOptions {
            output_type: String::from("outcode"),
        }
    }
}

/// Options for [`Zoopla::area_value_graphs`]. `size` picks the rendered
/// graph dimensions (small, medium, large).
#[derive(Debug, Clone)]
pub struct AreaValueGraphsOptions {
    pub size: String,
}

impl Default for AreaValueGraphsOptions {
    fn default() -> AreaValueGraphsOptions {
        AreaValueGraphsOptions {
            size: String::from("medium"),
        }
    }
}

/// Options for [`Zoopla::get_average_area_sold_price`]. The service
/// resolves whichever of `area`/`postcode` is given.
#[derive(Debug, Clone)]
pub struct AverageSoldPriceOptions {
    pub area: Option<String>,
    pub postcode: Option<String>,
    pub output_type: String,
    pub area_type: String,
}

impl Default for AverageSoldPriceOptions {
    fn default() -> AverageSoldPriceOptions {
        AverageSoldPriceOptions {
            area: None,
            postcode: None,
            output_type: String::from("outcode"),
            area_type: String::from("streets"),
        }
    }
}

/// Options for [`Zoopla::auto_complete`].
#[derive(Debug, Clone)]
pub struct AutoCompleteOptions {
    pub search_type: String,
}

impl Default for AutoCompleteOptions {
    fn default() -> AutoCompleteOptions {
        AutoCompleteOptions {
            search_type: String::from("properties"),
        }
    }
}

/// Options for [`Zoopla::area_zed_indices`].
#[derive(Debug, Clone)]
pub struct AreaZedIndicesOptions {
    pub area_type: String,
    pub output_type: String,
    pub order: String,
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for AreaZedIndicesOptions {
    fn default() -> AreaZedIndicesOptions {
        AreaZedIndicesOptions {
            area_type: String::from("streets"),
            output_type: String::from("area"),
            order: String::from("ascending"),
            page_number: 1,
            page_size: 10,
        }
    }
}

/// Search criteria for [`Zoopla::search_property_listings`]. Only the
/// fields the caller sets go out on the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListingSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_beds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_beds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub furnished: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_homes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Zoopla {
    pub fn new<S: Into<String>>(api_key: S) -> Zoopla {
        Zoopla::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Same client against a different host. The mocked-transport tests
    /// go through here.
    pub fn with_base_url<S: Into<String>>(api_key: S, base_url: &str) -> Zoopla {
        let mut base_url: String = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Zoopla {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &Config) -> Zoopla {
        match &config.base_url {
            Some(url) => Zoopla::with_base_url(config.api_key.clone(), url),
            None => Zoopla::new(config.api_key.clone()),
        }
    }

    /*
       Links to the local information graphs (council tax, crime,
       education, people) for an area
    */
    pub async fn local_info_graphs(&self, area: &str) -> Result<LocalInfoGraphs> {
        let params: Vec<(&str, String)> = vec![("area", area.to_string())];
        self.call("local_info_graphs.js", params).await
    }

    /*
       Current and historical house price index for an area
    */
    pub async fn zed_index(&self, area: &str, options: ZedIndexOptions) -> Result<ZedIndex> {
        let params: Vec<(&str, String)> = vec![
            ("area", area.to_string()),
            ("output_type", options.output_type),
        ];
        self.call("zed_index.js", params).await
    }

    /*
       Property value graph URLs for an area
    */
    pub async fn area_value_graphs(
        &self,
        area: &str,
        options: AreaValueGraphsOptions,
    ) -> Result<AreaValueGraphs> {
        let params: Vec<(&str, String)> =
            vec![("area", area.to_string()), ("size", options.size)];
        self.call("area_value_graphs.js", params).await
    }

    /*
       Searches current listings; returns the "listing" array of the
       response in service order
    */
    pub async fn search_property_listings(
        &self,
        params: &ListingSearchParams,
    ) -> Result<Vec<PropertyListing>> {
        let url = format!("{}property_listings.json", self.base_url);
        let request = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params);

        let envelope: ListingsResponse = self.execute("property_listings.json", request).await?;
        Ok(envelope.listing)
    }

    /*
       Average sold prices for an area or postcode
    */
    pub async fn get_average_area_sold_price(
        &self,
        options: AverageSoldPriceOptions,
    ) -> Result<AverageAreaSoldPrice> {
        // Unset area/postcode still go out as empty-valued keys, the way
        // the service has always been queried.
        let params: Vec<(&str, String)> = vec![
            ("postcode", options.postcode.unwrap_or_default()),
            ("area", options.area.unwrap_or_default()),
            ("output_type", options.output_type),
            ("area_type", options.area_type),
        ];
        self.call("average_area_sold_price.json", params).await
    }

    /*
       Geo-autocomplete suggestions for a partial search term
    */
    pub async fn auto_complete(
        &self,
        search_term: &str,
        options: AutoCompleteOptions,
    ) -> Result<AutoComplete> {
        let params: Vec<(&str, String)> = vec![
            ("search_term", search_term.to_string()),
            ("search_type", options.search_type),
        ];
        self.call("geo_autocomplete.json", params).await
    }

    /*
       Paged zed indices for the sub-areas of an area
    */
    pub async fn area_zed_indices(
        &self,
        area: &str,
        options: AreaZedIndicesOptions,
    ) -> Result<AreaZedIndices> {
        let params: Vec<(&str, String)> = vec![
            ("area", area.to_string()),
            ("output_type", options.output_type),
            ("area_type", options.area_type),
            ("order", options.order),
            ("page_number", options.page_number.to_string()),
            ("page_size", options.page_size.to_string()),
        ];
        self.call("zed_indices.json", params).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Vec<(&str, String)>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let request = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(&params);

        self.execute(endpoint, request).await
    }

    // Exactly 200 decodes the body; everything else surfaces as an Api
    // error with status, reason phrase and raw body.
    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        debug!("GET {}", endpoint);

        let response = request.send().await?;

        let status: StatusCode = response.status();
        if status != StatusCode::OK {
            let reason = status.canonical_reason().unwrap_or("").to_string();
            let body = response.text().await.unwrap_or_default();
            error!("{} returned {} {}: {}", endpoint, status.as_u16(), reason, body);
            return Err(ZooplaError::Api {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
