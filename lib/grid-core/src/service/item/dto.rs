use serde_json::{Map, Value};
use strum::EnumString;

use crate::model::common::SortDirection;
use crate::model::item::Item;

/// Grid view state as sent by the client. Sort and filter entries are kept
/// as raw JSON and validated by the normalizer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItemRowsRequestDTO {
    pub start_row: i64,
    pub end_row: i64,
    pub sort_model: Vec<Value>,
    pub filter_model: Map<String, Value>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetItemRowsResponseDTO {
    pub rows: Vec<Item>,
    /// index of the last row of the full filtered result set
    pub last_row: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum TextOperator {
    Contains,
    NotContains,
    Equals,
    NotEqual,
    StartsWith,
    EndsWith,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum NumberOperator {
    Equals,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    InRange,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextFilter {
    pub operator: TextOperator,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumberFilter {
    pub operator: NumberOperator,
    pub value: f64,
    /// upper bound, present only for [`NumberOperator::InRange`]
    pub value_to: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FilterSpec {
    Text(TextFilter),
    Number(NumberFilter),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuickFilter {
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedFilters {
    pub per_column: Vec<(String, FilterSpec)>,
    pub quick: Option<QuickFilter>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortEntry {
    pub column_id: String,
    pub direction: SortDirection,
}
