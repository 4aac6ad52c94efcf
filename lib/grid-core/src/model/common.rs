use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetListResponse<Response> {
    pub values: Vec<Response>,
    pub total_pages: u64,
    pub total_items: u64,
}
