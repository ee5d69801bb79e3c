//! Client for the Zoopla property API: listings search, house price
//! indices, area sold-price statistics and geo-autocomplete.
//!
//! ```no_run
//! use zoopla::{Zoopla, ZedIndexOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Zoopla::new("my-api-key");
//!
//!     let index = client.zed_index("SW11", ZedIndexOptions::default()).await?;
//!     println!("{}: {}", index.area_name.trim(), index.zed_index);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;

pub use client::{
    AreaValueGraphsOptions, AreaZedIndicesOptions, AutoCompleteOptions, AverageSoldPriceOptions,
    ListingSearchParams, ZedIndexOptions, Zoopla, DEFAULT_BASE_URL,
};
pub use config::Config;
pub use error::{Result, ZooplaError};
pub use models::{
    AreaValueGraphs, AreaZedIndices, AutoComplete, AverageAreaSoldPrice, LocalInfoGraphs,
    PriceChange, PropertyListing, Suggestion, ZedIndex, ZedIndexEntry,
};
