use grid_core::model::item::ItemFilterValue;
use grid_core::model::list_filter::{ListFilterCondition, StringMatch};
use grid_core::service::item::dto::{GetItemRowsRequestDTO, GetItemRowsResponseDTO};
use one_dto_mapper::convert_inner;
use serde_json::{Map, Value};

use super::dto::{GetItemRowsRequestRestDTO, GetItemRowsResponseRestDTO, ItemFilterQueryParamsRest};

impl From<GetItemRowsRequestRestDTO> for GetItemRowsRequestDTO {
    fn from(value: GetItemRowsRequestRestDTO) -> Self {
        Self {
            start_row: value.start_row,
            end_row: value.end_row,
            sort_model: match value.sort_model {
                None | Some(Value::Null) => vec![],
                Some(Value::Array(sort_model)) => sort_model,
                Some(other) => {
                    tracing::debug!("Ignoring non-array sortModel: {other}");
                    vec![]
                }
            },
            filter_model: match value.filter_model {
                None | Some(Value::Null) => Map::new(),
                Some(Value::Object(filter_model)) => filter_model,
                Some(other) => {
                    tracing::debug!("Ignoring non-object filterModel: {other}");
                    Map::new()
                }
            },
        }
    }
}

impl From<GetItemRowsResponseDTO> for GetItemRowsResponseRestDTO {
    fn from(value: GetItemRowsResponseDTO) -> Self {
        Self {
            rows: convert_inner(value.rows),
            last_row: value.last_row,
        }
    }
}

impl From<ItemFilterQueryParamsRest> for ListFilterCondition<ItemFilterValue> {
    fn from(value: ItemFilterQueryParamsRest) -> Self {
        let name = value
            .name
            .map(|name| ItemFilterValue::Name(StringMatch::starts_with(name)));

        ListFilterCondition::from(name)
    }
}
