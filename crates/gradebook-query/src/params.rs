use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    NameAsc,
    NameDesc,
}

/// Free-text search parameters shared by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    pub search_text: Option<String>,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            search_text: None,
            sort_order: SortOrder::Newest,
            page: 1,
            page_size: 10,
        }
    }
}
