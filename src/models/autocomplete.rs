use serde::{Deserialize, Serialize};

/// Geo-autocomplete suggestions for a partial area or property search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoComplete {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub area_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub value: String,
    #[serde(default)]
    pub identifier: Option<String>,
}
