pub mod area_value_graphs;
pub mod autocomplete;
pub mod helpers;
pub mod listing;
pub mod local_info;
pub mod sold_price;
pub mod zed_index;
pub mod zed_indices;

pub use area_value_graphs::AreaValueGraphs;
pub use autocomplete::{AutoComplete, Suggestion};
pub use listing::{PriceChange, PropertyListing};
pub use local_info::LocalInfoGraphs;
pub use sold_price::AverageAreaSoldPrice;
pub use zed_index::ZedIndex;
pub use zed_indices::{AreaZedIndices, ZedIndexEntry};
